use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Name filter input. Filtering itself happens in the caller.
#[component]
pub fn SearchBox(
    value: String,
    on_change: EventHandler<String>,
    #[props(default = "Search by name".to_string())] placeholder: String,
) -> Element {
    rsx! {
        div {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "search",
                placeholder: placeholder,
                value: value,
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
        }
    }
}
