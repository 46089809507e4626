use dioxus::prelude::*;
use ui::views::{CreatorView, ListerView, ManagerView, RemoverView, UpdaterView};

#[component]
pub fn Lister() -> Element {
    rsx! { ListerView {} }
}

#[component]
pub fn Creator() -> Element {
    rsx! { CreatorView {} }
}

#[component]
pub fn Updater() -> Element {
    rsx! { UpdaterView {} }
}

#[component]
pub fn Remover() -> Element {
    rsx! { RemoverView {} }
}

#[component]
pub fn Manager() -> Element {
    rsx! { ManagerView {} }
}
