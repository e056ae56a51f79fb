use crate::common::ToastKind;
use crate::menu::use_mobile_menu;
use crate::toast::use_toasts;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{
        BsCheckCircleFill, BsExclamationTriangleFill, BsInfoCircleFill, BsXCircleFill,
    },
    Icon,
};

#[component]
pub fn Home() -> Element {
    let toasts = use_toasts();
    let menu = use_mobile_menu();
    let mut message = use_signal(|| "Saved".to_string());

    rsx! {
        div { class: "container mx-auto px-4 py-12 max-w-3xl",
            h1 { class: "text-4xl font-bold mb-4 text-text-primary", "BankFlask" }
            p { class: "text-xl text-text-secondary mb-8 leading-relaxed",
                "Your accounts, savings and learning paths in one place."
            }

            div { class: "p-6 rounded-xl border border-border bg-background-card shadow-sm mb-8",
                h2 { class: "text-2xl font-semibold mb-4 text-text-primary", "Notifications" }
                input {
                    class: "w-full mb-4 px-3 py-2 rounded-lg bg-background-medium border border-border text-text-primary",
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
                div { class: "flex flex-wrap gap-3",
                    button {
                        class: "flex items-center bg-background-medium text-text-primary py-2 px-4 rounded-lg",
                        onclick: move |_| {
                            toasts.info(message());
                        },
                        Icon { icon: BsInfoCircleFill, width: 16, height: 16, class: "mr-2" }
                        "Info"
                    }
                    button {
                        class: "flex items-center bg-background-medium text-text-primary py-2 px-4 rounded-lg",
                        onclick: move |_| {
                            toasts.show(message(), ToastKind::Success);
                        },
                        Icon { icon: BsCheckCircleFill, width: 16, height: 16, class: "mr-2" }
                        "Success"
                    }
                    button {
                        class: "flex items-center bg-background-medium text-text-primary py-2 px-4 rounded-lg",
                        onclick: move |_| {
                            toasts.show(message(), ToastKind::Warning);
                        },
                        Icon { icon: BsExclamationTriangleFill, width: 16, height: 16, class: "mr-2" }
                        "Warning"
                    }
                    button {
                        class: "flex items-center bg-background-medium text-text-primary py-2 px-4 rounded-lg",
                        onclick: move |_| {
                            toasts.show(message(), ToastKind::Error);
                        },
                        Icon { icon: BsXCircleFill, width: 16, height: 16, class: "mr-2" }
                        "Error"
                    }
                }
            }

            p { class: "text-sm text-text-muted",
                if menu.is_open() {
                    "Mobile menu is open"
                } else {
                    "Mobile menu is closed"
                }
            }
        }
    }
}
