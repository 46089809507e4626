use api::{submit_delete, ApiError, Operation};
use dioxus::prelude::*;
use store::User;

use crate::components::{Button, ButtonVariant};
use crate::views::ModalOverlay;
use crate::UserList;

/// Confirmation for deleting `user`. Only the name is shown.
#[component]
pub fn DeleteUserDialog(
    list: UserList,
    user: User,
    #[props(default = "Confirm Delete".to_string())] title: String,
    on_close: EventHandler<()>,
) -> Element {
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let target = user.id.clone();

    let handle_confirm = move |_: MouseEvent| {
        if busy() {
            return;
        }
        let Some(id) = target.clone() else {
            let message = ApiError::MissingId {
                op: Operation::Delete,
            }
            .to_string();
            error.set(Some(message.clone()));
            list.delete_failed(&message);
            return;
        };
        busy.set(true);
        error.set(None);
        list.spawn(async move {
            match submit_delete(&list.client(), &id).await {
                Ok(()) => {
                    busy.set(false);
                    list.deleted(&id);
                    on_close.call(());
                }
                Err(e) => {
                    let message = e.to_string();
                    error.set(Some(message.clone()));
                    busy.set(false);
                    list.delete_failed(&message);
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            title: title,
            on_close: move |_| {
                if !busy() {
                    on_close.call(());
                }
            },
            if let Some(message) = error() {
                p { class: "dialog-error", "{message}" }
            }
            p {
                class: "dialog-body",
                "Are you sure you want to delete "
                strong { "{user.name}" }
                "?"
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
                    variant: ButtonVariant::Destructive,
                    disabled: busy(),
                    onclick: handle_confirm,
                    if busy() { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
