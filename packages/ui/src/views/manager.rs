use dioxus::prelude::*;
use store::{RuleSet, ScreenNotices, User, UserDraft};

use crate::components::{Button, ButtonVariant};
use crate::icons::FaUserPlus;
use crate::{
    use_user_list, CreateUserDialog, DeleteUserDialog, EditUserDialog, Icon, InitialLoad,
    SearchBox, UserTable,
};

/// Which dialog the manager has open. At most one at a time.
#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Add,
    Edit(User),
    Delete(User),
}

/// Search, add, edit and delete over one shared list.
#[component]
pub fn ManagerView() -> Element {
    let list = use_user_list(ScreenNotices::manager(), InitialLoad::Fetch);
    let mut search = use_signal(String::new);
    let mut draft = use_signal(UserDraft::default);
    let mut dialog = use_signal(|| Option::<Dialog>::None);

    // Surrounding spaces are ignored here only.
    let users = list.filtered(search().trim());

    let open_add = move |_: MouseEvent| {
        draft.set(UserDraft::default());
        dialog.set(Some(Dialog::Add));
    };

    rsx! {
        section {
            class: "screen",
            h1 { "Manage Users" }
            SearchBox {
                value: search(),
                on_change: move |term| search.set(term),
            }
            div {
                class: "screen-toolbar end",
                Button {
                    variant: ButtonVariant::Success,
                    onclick: open_add,
                    Icon { icon: FaUserPlus, width: 12, height: 12 }
                    " Add New User"
                }
            }
            if list.is_loading() {
                p { class: "screen-note", "Loading users..." }
            }
            UserTable {
                users: users,
                on_edit: move |user: User| dialog.set(Some(Dialog::Edit(user))),
                on_delete: move |user: User| dialog.set(Some(Dialog::Delete(user))),
            }

            match dialog() {
                Some(Dialog::Add) => rsx! {
                    CreateUserDialog {
                        list: list,
                        draft: draft,
                        rules: RuleSet::quick_add(),
                        title: "Add New User",
                        submit_label: "Add User",
                        busy_label: "Adding...",
                        submit_variant: ButtonVariant::Success,
                        on_close: move |_| dialog.set(None),
                    }
                },
                Some(Dialog::Edit(user)) => rsx! {
                    EditUserDialog {
                        key: "edit-{user.row_key()}",
                        list: list,
                        user: user,
                        on_close: move |_| dialog.set(None),
                    }
                },
                Some(Dialog::Delete(user)) => rsx! {
                    DeleteUserDialog {
                        key: "delete-{user.row_key()}",
                        list: list,
                        user: user,
                        title: "Delete User",
                        on_close: move |_| dialog.set(None),
                    }
                },
                None => rsx! {},
            }
        }
    }
}
