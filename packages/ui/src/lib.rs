//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, UserClient};

mod config;
pub use config::{load_config, use_directory_config};

pub mod views;

pub const THEME_CSS: Asset = asset!("/assets/theme.css");

mod navbar;
pub use navbar::Navbar;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod user_list;
pub use user_list::{use_user_list, InitialLoad, UserList};

mod user_table;
pub use user_table::{SkeletonRows, UserTable};

mod search_box;
pub use search_box::SearchBox;

mod create_user_dialog;
pub use create_user_dialog::CreateUserDialog;

mod edit_user_dialog;
pub use edit_user_dialog::EditUserDialog;

mod delete_user_dialog;
pub use delete_user_dialog::DeleteUserDialog;
