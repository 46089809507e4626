use dioxus::prelude::*;
use store::{LoadState, ScreenNotices};

use crate::config::use_directory_config;
use crate::{use_user_list, InitialLoad, UserTable};

/// Read-only list of every user.
///
/// Shows skeleton rows until the fetch settles. A failed fetch replaces the
/// whole screen with the error line.
#[component]
pub fn ListerView() -> Element {
    let config = use_directory_config();
    let list = use_user_list(ScreenNotices::lister(), InitialLoad::Fetch);

    let state = (list.state)();
    if let LoadState::Failed(message) = state {
        return rsx! {
            p { class: "screen-error", "Error: {message}" }
        };
    }

    let skeleton_rows = list.is_loading().then_some(config.lister.skeleton_rows);

    rsx! {
        section {
            class: "screen",
            h1 { "Users List" }
            UserTable {
                users: list.all(),
                show_username: true,
                striped: true,
                skeleton_rows: skeleton_rows,
            }
        }
    }
}
