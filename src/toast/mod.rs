// Transient notifications
#[cfg(test)]
pub(crate) mod harness;
mod platforms;
mod service;
mod stack;
mod types;

pub use service::{use_toast_provider, use_toasts};
pub use types::ToastTiming;
