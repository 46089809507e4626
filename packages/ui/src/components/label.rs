use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: html_for, {children} }
    }
}

/// Inline message under a form field; renders nothing without a message.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "field-error", "{message}" }
        },
        None => rsx! {},
    }
}
