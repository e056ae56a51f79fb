// Mirroring of the root class list onto the document, and host page toggles
#[cfg(feature = "web")]
mod web;

use super::{ClassSet, MobileMenu};

#[cfg(feature = "web")]
pub fn mirror_root(classes: &ClassSet, managed: &[&str]) {
    web::mirror_root(classes, managed);
}

#[cfg(feature = "web")]
pub fn use_host_toggles(menu: MobileMenu) {
    web::use_host_toggles(menu);
}

// Outside the browser the app root carries the classes itself
#[cfg(not(feature = "web"))]
pub fn mirror_root(_classes: &ClassSet, _managed: &[&str]) {}

// and there is no host page with controls of its own
#[cfg(not(feature = "web"))]
pub fn use_host_toggles(_menu: MobileMenu) {}
