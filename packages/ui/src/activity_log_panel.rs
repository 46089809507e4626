use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogLevel};
use crate::icons::{FaListUl, FaXmark};
use crate::Icon;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries = log().entries.clone();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Activity Log" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        title: "Close",
                        onclick: move |_| log.write().visible = false,
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    div { class: "activity-log-empty", "No requests yet." }
                }
                for entry in entries.iter().rev() {
                    div {
                        class: match entry.level {
                            LogLevel::Error => "activity-log-entry error",
                            LogLevel::Warning => "activity-log-entry warning",
                            LogLevel::Success => "activity-log-entry success",
                            LogLevel::Info => "activity-log-entry info",
                        },
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Navbar button that shows or hides the panel; turns red once an error is logged.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();
    let errors = log().error_count();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }
        button {
            class: if errors > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            title: "Activity log",
            Icon { icon: FaListUl, width: 14, height: 14 }
            if count > 0 {
                span { class: "activity-log-count", "{count}" }
            }
        }
    }
}
