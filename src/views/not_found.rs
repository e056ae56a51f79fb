use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "container mx-auto px-4 py-20 text-center",
            h1 { class: "text-3xl font-bold mb-4 text-text-primary", "Page not found" }
            p { class: "text-text-secondary mb-8", "Nothing lives at /{path}" }
            Link {
                to: Route::Home {},
                class: "inline-flex items-center justify-center bg-accent-teal text-text-invert px-6 py-3 rounded-lg",
                "Back home"
            }
        }
    }
}
