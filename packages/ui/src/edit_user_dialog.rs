use api::submit_update;
use dioxus::prelude::*;
use store::User;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::views::ModalOverlay;
use crate::UserList;

/// Modal form editing a copy of `user`.
///
/// Edits only touch the working copy; the list changes once the update
/// response arrives. The four inputs are `required`, which is all the
/// checking this form does.
#[component]
pub fn EditUserDialog(list: UserList, user: User, on_close: EventHandler<()>) -> Element {
    let mut working = use_signal(|| user.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);
        let current = working();
        list.spawn(async move {
            match submit_update(&list.client(), &current).await {
                Ok(updated) => {
                    busy.set(false);
                    list.updated(updated);
                    on_close.call(());
                }
                Err(e) => {
                    let message = e.to_string();
                    error.set(Some(message.clone()));
                    busy.set(false);
                    list.update_failed(&message);
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            title: "Edit User",
            on_close: move |_| {
                if !busy() {
                    on_close.call(());
                }
            },
            if let Some(message) = error() {
                p { class: "dialog-error", "{message}" }
            }
            form {
                class: "dialog-form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    Label { html_for: "edit-name", "Name" }
                    Input {
                        id: "edit-name",
                        value: working.read().name.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| working.write().name = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "edit-email", "Email" }
                    Input {
                        id: "edit-email",
                        r#type: "email",
                        value: working.read().email.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| working.write().email = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "edit-phone", "Phone" }
                    Input {
                        id: "edit-phone",
                        value: working.read().phone.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| working.write().phone = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "edit-website", "Website" }
                    Input {
                        id: "edit-website",
                        value: working.read().website.clone(),
                        required: true,
                        oninput: move |evt: FormEvent| working.write().website = evt.value(),
                    }
                }
                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Updating..." } else { "Update" }
                    }
                }
            }
        }
    }
}
