use dioxus::prelude::*;
use store::{ScreenNotices, User};

use crate::{use_user_list, DeleteUserDialog, InitialLoad, UserTable};

/// Users with a per-row delete action behind a confirmation.
#[component]
pub fn RemoverView() -> Element {
    let list = use_user_list(ScreenNotices::remover(), InitialLoad::Fetch);
    let mut pending = use_signal(|| Option::<User>::None);

    rsx! {
        section {
            class: "screen",
            h1 { "Delete User" }
            UserTable {
                users: list.all(),
                on_delete: move |user: User| pending.set(Some(user)),
            }

            // Cancel just forgets the selection; no request is made.
            if let Some(user) = pending() {
                DeleteUserDialog {
                    key: "{user.row_key()}",
                    list: list,
                    user: user,
                    on_close: move |_| pending.set(None),
                }
            }
        }
    }
}
