use dioxus::prelude::*;

/// Controlled text input. `invalid` adds the error outline.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] required: bool,
    #[props(default)] readonly: bool,
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let state = if invalid { "input input-invalid" } else { "input" };
    rsx! {
        input {
            id: id,
            class: "{state} {class}",
            r#type: r#type,
            placeholder: placeholder,
            value: value,
            required: required,
            readonly: readonly,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
