use crate::components::MenuToggle;
use crate::menu::use_mobile_menu;
use crate::Route;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{
        BsArrowLeftRight, BsBank, BsBriefcase, BsCreditCard, BsGraphUpArrow, BsMortarboard,
        BsPeople, BsPiggyBank, BsSpeedometer2,
    },
    Icon,
};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let mut show_labels = use_signal(|| true);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "flex flex-col md:flex-row h-screen w-full overflow-hidden bg-background",
            // Mobile header
            header { class: "mobile-header flex md:hidden items-center justify-between p-4 border-b border-border-dark bg-background-sidebar",
                Link { to: Route::Home {}, class: "font-bold text-lg text-text-primary", "BankFlask" }
                MenuToggle {}
            }
            // Mobile navigation, shown while the root carries the open class
            nav { class: "mobile-nav md:hidden px-2 py-4 border-b border-border-dark bg-background-sidebar",
                PortalLinks { show_labels: true }
            }
            // Sidebar
            div {
                class: "sidebar hidden md:block bg-background-sidebar text-text-primary transition-all duration-300 border-r border-border-dark",
                class: if show_labels() { "w-60" } else { "w-20" },
                div {
                    class: "flex items-center p-4 border-b border-border-dark",
                    class: if show_labels() { "justify-between" } else { "justify-center" },
                    div { class: "flex items-center",
                        span { class: "text-primary-400 text-2xl mr-2",
                            Icon { icon: BsBank, width: 22, height: 22 }
                        }
                        if show_labels() {
                            span { class: "font-bold text-lg text-text-primary", "BankFlask" }
                        }
                    }
                    // Toggle sidebar width button
                    button {
                        class: "text-text-muted hover:text-text-primary p-1 rounded-full transition-colors duration-200",
                        onclick: move |_| show_labels.set(!show_labels()),
                        span {
                            class: "block transition-transform",
                            class: if show_labels() { "" } else { "rotate-180" },
                            "←"
                        }
                    }
                }
                nav { class: "mt-6 px-2",
                    PortalLinks { show_labels: show_labels() }
                }
            }
            // Main content area
            div { class: "flex-1 overflow-auto bg-background p-6", Outlet::<Route> {} }
        }
    }
}

// Links into the server-rendered portal sections
#[component]
fn PortalLinks(show_labels: bool) -> Element {
    rsx! {
        NavItem { href: "/dashboard", label: "Dashboard", show_labels,
            Icon { icon: BsSpeedometer2, width: 20, height: 20 }
        }
        NavItem { href: "/accounts", label: "Accounts", show_labels,
            Icon { icon: BsBank, width: 20, height: 20 }
        }
        NavItem { href: "/transactions", label: "Transactions", show_labels,
            Icon { icon: BsArrowLeftRight, width: 20, height: 20 }
        }
        NavItem { href: "/savings", label: "Savings", show_labels,
            Icon { icon: BsPiggyBank, width: 20, height: 20 }
        }
        NavItem { href: "/credit", label: "Credit", show_labels,
            Icon { icon: BsCreditCard, width: 20, height: 20 }
        }
        NavItem { href: "/investments", label: "Investments", show_labels,
            Icon { icon: BsGraphUpArrow, width: 20, height: 20 }
        }
        NavItem { href: "/learning-paths", label: "Learning", show_labels,
            Icon { icon: BsMortarboard, width: 20, height: 20 }
        }
        NavItem { href: "/jobs", label: "Jobs", show_labels,
            Icon { icon: BsBriefcase, width: 20, height: 20 }
        }
        NavItem { href: "/mentors", label: "Mentors", show_labels,
            Icon { icon: BsPeople, width: 20, height: 20 }
        }
    }
}

#[component]
fn NavItem(href: String, label: String, show_labels: bool, children: Element) -> Element {
    let menu = use_mobile_menu();

    rsx! {
        a {
            href: "{href}",
            class: "flex items-center py-3 px-3 mb-2 rounded-lg transition-all duration-200 text-text-muted hover:bg-background-hover hover:text-text-primary",
            class: if !show_labels { "justify-center" } else { "" },
            onclick: move |_| menu.close(),
            div { class: if show_labels { "mr-3" } else { "" }, {children} }
            if show_labels {
                span { "{label}" }
            }
        }
    }
}
