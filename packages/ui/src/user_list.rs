//! # Per-screen user list
//!
//! [`use_user_list`] is the state every screen is built on: a
//! [`LocalList<User>`] in a signal, the [`LoadState`] of the initial fetch, and
//! a client for the configured collection. The list lives and dies with the
//! screen's component, so two screens never share records.
//!
//! The initial fetch runs in a `use_resource`. Mutations are started from
//! dialogs but run through [`UserList::spawn`], which parks the task on the
//! screen's scope: closing a dialog never drops a request in flight, while
//! leaving the screen drops both and a late response has nothing left to
//! write into.
//!
//! After a remote call finishes, the screen reports the outcome through one
//! of the `*ed` / `*_failed` methods of [`UserList`]. These apply the matching
//! reducer, raise the screen's toast and add an activity log entry.

use std::future::Future;

use api::fetch_users;
use dioxus::dioxus_core::{current_scope_id, Runtime, Task};
use dioxus::prelude::*;
use store::{current_millis, LoadState, LocalList, Notice, RecordId, ScreenNotices, User};

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::client::{make_client, UserClient};
use crate::components::use_notices;
use crate::config::use_directory_config;

/// How a screen's list starts out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialLoad {
    /// Fetch the whole collection on mount.
    Fetch,
    /// Start empty and only show records created on this screen.
    Empty,
}

/// Spawns tasks owned by the component that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenTasks {
    scope: ScopeId,
}

pub fn use_screen_tasks() -> ScreenTasks {
    use_hook(|| ScreenTasks {
        scope: current_scope_id(),
    })
}

impl ScreenTasks {
    /// Run `task` until it finishes or the owning component unmounts,
    /// whichever comes first. Safe to call from a child's event handler.
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) -> Task {
        Runtime::current().spawn(self.scope, task)
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct UserList {
    pub records: Signal<LocalList<User>>,
    pub state: Signal<LoadState>,
    client: Signal<UserClient>,
    notices: Signal<ScreenNotices>,
    toast: Callback<Notice>,
    activity: Signal<ActivityLog>,
    tasks: ScreenTasks,
}

pub fn use_user_list(notices: ScreenNotices, initial: InitialLoad) -> UserList {
    let config = use_directory_config();
    let toast = use_notices();
    let tasks = use_screen_tasks();
    let mut activity = use_activity_log();
    let client = use_signal(|| make_client(&config));
    let notices = use_signal(|| notices);
    let mut records = use_signal(LocalList::<User>::new);
    let mut state = use_signal(|| match initial {
        InitialLoad::Fetch => LoadState::Loading,
        InitialLoad::Empty => LoadState::Ready,
    });

    let _loader = use_resource(move || async move {
        if initial == InitialLoad::Empty {
            return;
        }
        let client = UserClient::clone(&client.peek());
        log_activity(&mut activity, LogLevel::Info, "Fetching users...");
        match fetch_users(&client).await {
            Ok(users) => {
                let count = users.len();
                records.set(LocalList::from_fetch(users));
                state.set(LoadState::Ready);
                log_activity(&mut activity, LogLevel::Success, &format!("Fetched {count} users"));
                if let Some(notice) = notices.peek().on_fetched() {
                    toast.call(notice);
                }
            }
            Err(e) => {
                let message = e.to_string();
                log_activity(&mut activity, LogLevel::Error, &message);
                toast.call(notices.peek().on_fetch_failed(&message));
                state.set(LoadState::Failed(message));
            }
        }
    });

    UserList {
        records,
        state,
        client,
        notices,
        toast,
        activity,
        tasks,
    }
}

impl UserList {
    pub fn client(&self) -> UserClient {
        UserClient::clone(&self.client.peek())
    }

    /// Start a remote call on the screen's scope. See [`ScreenTasks::spawn`].
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) -> Task {
        self.tasks.spawn(task)
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }

    /// Every record, in list order.
    pub fn all(&self) -> Vec<User> {
        self.records.read().records().to_vec()
    }

    /// Records whose name contains `term`, ignoring case.
    pub fn filtered(&self, term: &str) -> Vec<User> {
        self.records.read().filtered(term)
    }

    pub fn created(mut self, user: User) {
        let id = self.records.write().append_created(user, current_millis());
        let provisional = self
            .records
            .peek()
            .get(&id)
            .is_some_and(|u| u.provisional);
        let message = if provisional {
            format!("Created user (local id {id})")
        } else {
            format!("Created user {id}")
        };
        self.log(LogLevel::Success, &message);
        self.toast.call(self.notices.peek().on_created());
    }

    pub fn create_failed(mut self, error: &str) {
        self.log(LogLevel::Error, error);
        self.toast.call(self.notices.peek().on_create_failed(error));
    }

    pub fn updated(mut self, user: User) {
        let label = user.id_label();
        if self.records.write().replace_updated(user) {
            self.log(LogLevel::Success, &format!("Updated user {label}"));
        } else {
            // Nothing matched the response id; the old row stays as it was.
            self.log(
                LogLevel::Warning,
                &format!("Update response id {label:?} matches no listed user"),
            );
        }
        self.toast.call(self.notices.peek().on_updated());
    }

    pub fn update_failed(mut self, error: &str) {
        self.log(LogLevel::Error, error);
        self.toast.call(self.notices.peek().on_update_failed(error));
    }

    pub fn deleted(mut self, id: &RecordId) {
        if self.records.write().remove_by_id(id) {
            self.log(LogLevel::Success, &format!("Deleted user {id}"));
        } else {
            self.log(
                LogLevel::Warning,
                &format!("Deleted user {id} was not in the list"),
            );
        }
        self.toast.call(self.notices.peek().on_deleted());
    }

    pub fn delete_failed(mut self, error: &str) {
        self.log(LogLevel::Error, error);
        self.toast.call(self.notices.peek().on_delete_failed(error));
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        log_activity(&mut self.activity, level, message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use dioxus::dioxus_core::{generation, needs_update, NoOpMutations};
    use dioxus::prelude::*;

    use super::{use_screen_tasks, ScreenTasks};

    static SCREEN_OWNED: AtomicUsize = AtomicUsize::new(0);
    static DIALOG_OWNED: AtomicUsize = AtomicUsize::new(0);

    // First render shows the dialog, the second closes it.
    fn screen() -> Element {
        let tasks = use_screen_tasks();
        if generation() > 0 {
            rsx!(div {})
        } else {
            needs_update();
            rsx!(PendingDialog { tasks: tasks })
        }
    }

    #[component]
    fn PendingDialog(tasks: ScreenTasks) -> Element {
        use_hook(move || {
            tasks.spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                SCREEN_OWNED.fetch_add(1, Ordering::Relaxed);
            });
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                DIALOG_OWNED.fetch_add(1, Ordering::Relaxed);
            });
        });
        rsx!(div {})
    }

    #[tokio::test]
    async fn test_screen_task_outlives_closed_dialog() {
        let mut dom = VirtualDom::new(screen);
        dom.rebuild(&mut NoOpMutations);
        dom.render_immediate(&mut NoOpMutations);

        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep(Duration::from_millis(500)) => {}
        };

        assert_eq!(SCREEN_OWNED.load(Ordering::Relaxed), 1);
        assert_eq!(DIALOG_OWNED.load(Ordering::Relaxed), 0);
    }
}
