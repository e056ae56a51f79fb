// Minimal app around `ToastHost` for rendering toasts in tests
use super::service::{use_toast_provider, ToastService};
use super::types::ToastTiming;
use crate::common::ToastKind;
use crate::components::ToastHost;
use crate::config::UiConfig;
use dioxus::prelude::*;
use std::cell::RefCell;

thread_local! {
    static SERVICE: RefCell<Option<ToastService>> = const { RefCell::new(None) };
}

#[component]
fn Harness(config: UiConfig, initial: Vec<(String, ToastKind)>) -> Element {
    let config = use_context_provider(|| config.clone());
    let toasts = use_toast_provider(ToastTiming::from(&config));
    SERVICE.with(|service| *service.borrow_mut() = Some(toasts));

    use_hook(|| {
        for (message, kind) in &initial {
            toasts.show(message.clone(), *kind);
        }
    });

    rsx! {
        ToastHost {}
    }
}

/// Build and render the harness, returning the dom and its toast service.
pub fn mount(config: UiConfig, initial: Vec<(String, ToastKind)>) -> (VirtualDom, ToastService) {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { config, initial });
    dom.rebuild_in_place();
    let service = SERVICE
        .with(|service| *service.borrow())
        .expect("harness provides a toast service");
    (dom, service)
}

pub fn html(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}

pub fn class_attributes(html: &str) -> Vec<&str> {
    html.split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}
