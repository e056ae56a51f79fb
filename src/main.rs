use dioxus::prelude::*;

use components::{Navbar, ToastHost};
use config::UiConfig;
use menu::{use_mobile_menu_provider, APP_ROOT_CLASS};
use toast::{use_toast_provider, ToastTiming};
use views::{Home, NotFound};

mod components;
mod config;
mod menu;
mod page;
mod toast;
mod views;

pub mod common;

/// Element id of the JSON block holding flash messages queued by the server.
const FLASH_ELEMENT_ID: &str = "flash-messages";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Logger initialization error: {}", e);
    }

    tracing::info!(
        "Starting shell (web: {}, desktop: {})",
        cfg!(feature = "web"),
        cfg!(feature = "desktop")
    );

    // Launch the app based on target platform
    #[cfg(feature = "desktop")]
    {
        LaunchBuilder::desktop().launch(App);
    }

    #[cfg(feature = "web")]
    {
        LaunchBuilder::web().launch(App);
    }

    #[cfg(not(any(feature = "desktop", feature = "web")))]
    {
        LaunchBuilder::new().launch(App);
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(UiConfig::load);
    let toasts = use_toast_provider(ToastTiming::from(&config));
    let menu = use_mobile_menu_provider();

    // Surface anything the server flashed before this page rendered
    use_effect(move || {
        if let Some(raw) = page::embedded_json(FLASH_ELEMENT_ID) {
            match common::parse_flashes(&raw) {
                Ok(flashes) => toasts.show_flashes(&flashes),
                Err(e) => tracing::warn!("{}", e),
            }
        }
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "{APP_ROOT_CLASS} {menu.root_class()}",
            Router::<Route> {}
            ToastHost {}
        }
    }
}
