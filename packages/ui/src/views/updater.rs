use dioxus::prelude::*;
use store::{ScreenNotices, User};

use crate::{use_user_list, EditUserDialog, InitialLoad, SearchBox, UserTable};

/// Users with a per-row edit action and a name filter.
#[component]
pub fn UpdaterView() -> Element {
    let list = use_user_list(ScreenNotices::updater(), InitialLoad::Fetch);
    let mut search = use_signal(String::new);
    let mut editing = use_signal(|| Option::<User>::None);

    let users = list.filtered(&search());

    rsx! {
        section {
            class: "screen",
            h1 { "Update User" }
            SearchBox {
                value: search(),
                on_change: move |term| search.set(term),
            }
            if list.is_loading() {
                p { class: "screen-note", "Loading users..." }
            }
            UserTable {
                users: users,
                on_edit: move |user: User| editing.set(Some(user)),
            }

            if let Some(user) = editing() {
                EditUserDialog {
                    key: "{user.row_key()}",
                    list: list,
                    user: user,
                    on_close: move |_| editing.set(None),
                }
            }
        }
    }
}
