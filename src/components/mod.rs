mod menu_toggle;
pub use menu_toggle::MenuToggle;

mod navbar;
pub use navbar::Navbar;

mod toast_host;
pub use toast_host::ToastHost;
