use crate::menu::{use_mobile_menu, MOBILE_MENU_MARKER};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsList, BsXLg},
    Icon,
};

// Hamburger button carrying the mobile menu marker
#[component]
pub fn MenuToggle() -> Element {
    let menu = use_mobile_menu();
    let open = menu.is_open();

    rsx! {
        button {
            class: "p-2 rounded-lg text-text-muted hover:text-text-primary hover:bg-background-hover transition-colors",
            r#type: "button",
            "data-toggle": MOBILE_MENU_MARKER,
            "aria-label": "Toggle navigation",
            "aria-expanded": "{open}",
            onclick: move |_| {
                menu.click(Some(MOBILE_MENU_MARKER));
            },
            if open {
                Icon { icon: BsXLg, width: 20, height: 20 }
            } else {
                Icon { icon: BsList, width: 20, height: 20 }
            }
        }
    }
}
