use crate::config::UiConfig;
use crate::toast::use_toasts;
use dioxus::prelude::*;

// Renders every live toast; clicking one dismisses it
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let config = use_context::<UiConfig>();

    rsx! {
        for toast in toasts.toasts() {
            div {
                key: "{toast.id}",
                id: "{toast.id}",
                class: "toast {config.toast_class}",
                "role": "status",
                "data-category": toast.kind.as_str(),
                style: "opacity: {toast.opacity()}; transition: opacity {config.fade_for_ms}ms ease;",
                onclick: move |_| toasts.dismiss(toast.id),
                "{toast.message}"
            }
        }
    }
}
