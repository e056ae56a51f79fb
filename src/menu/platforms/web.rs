use crate::menu::{ClassList, ClassSet, MobileMenu, APP_ROOT_CLASS};
use dioxus::prelude::use_hook;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomTokenList, Element, Event};

const MARKER_ATTRIBUTE: &str = "data-toggle";

// `document.documentElement.classList`
pub struct RootClassList(DomTokenList);

impl RootClassList {
    pub fn current() -> Option<Self> {
        let root = web_sys::window()?.document()?.document_element()?;
        Some(Self(root.class_list()))
    }
}

impl ClassList for RootClassList {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    fn set(&mut self, class: &str, on: bool) {
        if let Err(e) = self.0.toggle_with_force(class, on) {
            tracing::warn!("Failed to update root class {}: {:?}", class, e);
        }
    }
}

/// Copy the managed classes from `classes` onto the document element.
pub fn mirror_root(classes: &ClassSet, managed: &[&str]) {
    match RootClassList::current() {
        Some(mut root) => {
            for class in managed {
                root.set(class, classes.contains(class));
            }
        }
        None => tracing::warn!("No document element to mirror menu state onto"),
    }
}

// Delegated click listener on the document, removed when dropped
struct HostToggleListener {
    document: Document,
    callback: Closure<dyn FnMut(Event)>,
}

impl HostToggleListener {
    fn attach(menu: MobileMenu) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            // The app's own toggles already have handlers
            if let Ok(Some(_)) = target.closest(&format!(".{}", APP_ROOT_CLASS)) {
                return;
            }
            let marker = target
                .closest(&format!("[{}]", MARKER_ATTRIBUTE))
                .ok()
                .flatten()
                .and_then(|element| element.get_attribute(MARKER_ATTRIBUTE));
            menu.click(marker.as_deref());
        });

        if let Err(e) = document
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to listen for menu toggles: {:?}", e);
            return None;
        }
        Some(Self { document, callback })
    }
}

impl Drop for HostToggleListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}

/// Route clicks on `[data-toggle]` controls in the host page into `menu`.
pub fn use_host_toggles(menu: MobileMenu) {
    use_hook(|| Rc::new(HostToggleListener::attach(menu)));
}
