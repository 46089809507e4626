use dioxus::prelude::*;

use views::{AppShell, Creator, Lister, Manager, Remover, Updater};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Lister {},
        #[route("/create")]
        Creator {},
        #[route("/update")]
        Updater {},
        #[route("/delete")]
        Remover {},
        #[route("/manage")]
        Manager {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Compiled in; edit and rebuild to point at another collection.
const CONFIG_TOML: &str = include_str!("../userdir.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| ui::load_config(CONFIG_TOML));
    use_hook(|| tracing::info!(collection = %config.api.collection_url(), "Starting user directory"));
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::components::ToastProvider {
            Router::<Route> {}
        }
    }
}
