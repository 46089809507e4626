//! Transient notifications.
//!
//! The toast stack itself comes from `dioxus_primitives::toast`: every toast
//! runs its own timer and can be closed early by the user. Toasts are never
//! merged, so two failures in a row show two toasts. This module adds the
//! directory's stylesheet and [`use_notices`], which turns a screen
//! [`Notice`] into a toast with the configured duration.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{self, use_toast, ToastOptions};
use store::{Notice, NoticeLevel};

use crate::config::use_directory_config;

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/styling/toast.css") }
        toast::ToastProvider {
            {children}
        }
    }
}

/// Callback showing a [`Notice`] as a toast of the matching kind.
///
/// Must be called below [`ToastProvider`].
pub fn use_notices() -> Callback<Notice> {
    let toasts = use_toast();
    let duration = Duration::from_millis(use_directory_config().notifications.duration_ms);

    use_callback(move |notice: Notice| {
        let options = ToastOptions::new().duration(duration);
        match notice.level {
            NoticeLevel::Success => toasts.success(notice.message, options),
            NoticeLevel::Error => toasts.error(notice.message, options),
        }
    })
}
