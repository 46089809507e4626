use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the brand on the left and `children` (route links, toggles)
/// on the right. Owns no data.
#[component]
pub fn Navbar(#[props(default = "Synergy Labs".to_string())] brand: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "{brand}" }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}
