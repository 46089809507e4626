use dioxus::prelude::*;
use store::User;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPen, FaTrashCan};
use crate::Icon;

/// The record table every screen renders.
///
/// The actions column only appears when at least one row action is wired.
#[component]
pub fn UserTable(
    users: Vec<User>,
    #[props(default)] show_username: bool,
    #[props(default)] striped: bool,
    /// Rendered in place of the rows while the first fetch is pending.
    skeleton_rows: Option<usize>,
    on_edit: Option<EventHandler<User>>,
    on_delete: Option<EventHandler<User>>,
) -> Element {
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let columns = 5 + usize::from(show_username) + usize::from(has_actions);

    rsx! {
        div {
            class: "table-wrap",
            table {
                class: if striped { "user-table striped" } else { "user-table" },
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        if show_username {
                            th { "Username" }
                        }
                        th { "Email" }
                        th { "Phone" }
                        th { "Website" }
                        if has_actions {
                            th { "Actions" }
                        }
                    }
                }
                tbody {
                    if let Some(rows) = skeleton_rows {
                        SkeletonRows { rows: rows, columns: columns }
                    } else {
                        for user in users {
                            UserRow {
                                key: "{user.row_key()}",
                                user: user.clone(),
                                show_username: show_username,
                                on_edit: on_edit,
                                on_delete: on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: User,
    show_username: bool,
    on_edit: Option<EventHandler<User>>,
    on_delete: Option<EventHandler<User>>,
) -> Element {
    let edit_target = user.clone();
    let delete_target = user.clone();

    rsx! {
        tr {
            td {
                class: "cell-id",
                "{user.id_label()}"
                if user.provisional {
                    span { class: "badge-local", title: "Id assigned locally", "local" }
                }
            }
            td { "{user.name}" }
            if show_username {
                td { "{user.username}" }
            }
            td { "{user.email}" }
            td { "{user.phone}" }
            td { "{user.website}" }
            if on_edit.is_some() || on_delete.is_some() {
                td {
                    class: "cell-actions",
                    if let Some(handler) = on_edit {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| handler.call(edit_target.clone()),
                            Icon { icon: FaPen, width: 12, height: 12 }
                            " Edit"
                        }
                    }
                    if let Some(handler) = on_delete {
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| handler.call(delete_target.clone()),
                            Icon { icon: FaTrashCan, width: 12, height: 12 }
                            " Delete"
                        }
                    }
                }
            }
        }
    }
}

/// Pulsing placeholder rows.
#[component]
pub fn SkeletonRows(rows: usize, columns: usize) -> Element {
    rsx! {
        for row in 0..rows {
            tr {
                key: "{row}",
                class: "skeleton-row",
                for col in 0..columns {
                    td {
                        key: "{col}",
                        div { class: "skeleton-bar" }
                    }
                }
            }
        }
    }
}
