use dioxus::prelude::*;
use store::{RuleSet, ScreenNotices, UserDraft};

use crate::components::{Button, ButtonVariant};
use crate::icons::FaPlus;
use crate::{use_user_list, CreateUserDialog, Icon, InitialLoad, UserTable};

/// Create form plus a table of the users created on this screen.
///
/// The table starts empty; nothing is fetched.
#[component]
pub fn CreatorView() -> Element {
    let list = use_user_list(ScreenNotices::creator(), InitialLoad::Empty);
    let draft = use_signal(UserDraft::default);
    let mut open = use_signal(|| false);

    rsx! {
        section {
            class: "screen",
            h1 { "Create User" }
            div {
                class: "screen-toolbar",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| open.set(true),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Create New User"
                }
            }
            UserTable { users: list.all() }

            if open() {
                CreateUserDialog {
                    list: list,
                    draft: draft,
                    rules: RuleSet::creator(),
                    show_username: true,
                    on_close: move |_| open.set(false),
                }
            }
        }
    }
}
