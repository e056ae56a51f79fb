// Mobile navigation menu state
mod classes;
mod platforms;

pub use classes::{ClassList, ClassSet};

use dioxus::prelude::*;

/// `data-toggle` value identifying a control that opens the mobile menu.
pub const MOBILE_MENU_MARKER: &str = "mobile-menu";

/// Class on the element the app renders into. Marked controls inside it are
/// handled by the app's own components.
pub const APP_ROOT_CLASS: &str = "app-root";

/// Root class whose presence means the mobile menu is open.
pub const MOBILE_MENU_OPEN: &str = "mobile-menu-open";

/// Handle a click on an element whose `data-toggle` attribute holds `marker`.
///
/// Toggles [`MOBILE_MENU_OPEN`] exactly once when the element is a menu
/// toggle and returns the new state. Clicks on anything else are ignored.
pub fn handle_click(classes: &mut impl ClassList, marker: Option<&str>) -> Option<bool> {
    if marker != Some(MOBILE_MENU_MARKER) {
        return None;
    }
    Some(classes.toggle(MOBILE_MENU_OPEN))
}

#[derive(Clone, Copy, PartialEq)]
pub struct MobileMenu {
    classes: Signal<ClassSet>,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.classes.read().contains(MOBILE_MENU_OPEN)
    }

    pub fn click(&self, marker: Option<&str>) -> Option<bool> {
        let mut classes = self.classes;
        let open = handle_click(&mut *classes.write(), marker);
        if let Some(open) = open {
            tracing::debug!("Mobile menu {}", if open { "opened" } else { "closed" });
        }
        open
    }

    pub fn close(&self) {
        if self.is_open() {
            let mut classes = self.classes;
            classes.write().set(MOBILE_MENU_OPEN, false);
        }
    }

    /// Class attribute for the app root.
    pub fn root_class(&self) -> String {
        self.classes.read().to_string()
    }
}

/// Provide the menu state and keep the document element in sync with it.
pub fn use_mobile_menu_provider() -> MobileMenu {
    let classes = use_signal(ClassSet::default);
    let menu = use_context_provider(|| MobileMenu { classes });

    use_effect(move || {
        platforms::mirror_root(&classes.read(), &[MOBILE_MENU_OPEN]);
    });
    platforms::use_host_toggles(menu);

    menu
}

pub fn use_mobile_menu() -> MobileMenu {
    use_context::<MobileMenu>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_click_toggles_once() {
        let mut classes = ClassSet::default();

        assert_eq!(handle_click(&mut classes, Some("mobile-menu")), Some(true));
        assert!(classes.contains(MOBILE_MENU_OPEN));
    }

    #[test]
    fn two_clicks_restore_original_state() {
        let mut classes = ClassSet::default();
        classes.set("theme-dark", true);
        let original = classes.clone();

        handle_click(&mut classes, Some(MOBILE_MENU_MARKER));
        handle_click(&mut classes, Some(MOBILE_MENU_MARKER));

        assert_eq!(classes, original);
    }

    #[test]
    fn unmarked_click_changes_nothing() {
        let mut classes = ClassSet::default();
        classes.set(MOBILE_MENU_OPEN, true);
        let original = classes.clone();

        assert_eq!(handle_click(&mut classes, None), None);
        assert_eq!(handle_click(&mut classes, Some("dropdown")), None);
        assert_eq!(classes, original);
    }

    #[test]
    fn marker_matches_portal_markup() {
        assert_eq!(MOBILE_MENU_MARKER, "mobile-menu");
        assert_eq!(MOBILE_MENU_OPEN, "mobile-menu-open");
    }

    #[test]
    fn host_page_clicks_resolve_through_the_marker() {
        let mut classes = ClassSet::default();

        // host page control outside the app, e.g. <a data-toggle="mobile-menu">
        assert_eq!(handle_click(&mut classes, Some("mobile-menu")), Some(true));
        // a sibling widget using the same attribute for something else
        assert_eq!(handle_click(&mut classes, Some("dropdown")), None);
        assert!(classes.contains(MOBILE_MENU_OPEN));
        assert_eq!(handle_click(&mut classes, Some("mobile-menu")), Some(false));
        assert!(!classes.contains(MOBILE_MENU_OPEN));
    }
}
