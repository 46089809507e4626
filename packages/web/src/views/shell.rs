use dioxus::prelude::*;
use ui::{ActivityLogPanel, ActivityLogToggle, Navbar};

use crate::Route;

/// Navigation bar over the active screen. Only one screen is mounted at a
/// time, so leaving a route drops that screen's list and in-flight requests.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Lister {}, active_class: "active", "Fetch Users" }
            Link { to: Route::Creator {}, active_class: "active", "Create User" }
            Link { to: Route::Updater {}, active_class: "active", "Update User" }
            Link { to: Route::Remover {}, active_class: "active", "Delete User" }
            Link { to: Route::Manager {}, active_class: "active", "Manage Users" }
            ActivityLogToggle {}
        }
        main {
            class: "app-content",
            Outlet::<Route> {}
        }
        ActivityLogPanel {}
    }
}
