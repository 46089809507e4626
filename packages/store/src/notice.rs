//! Notification values and the text each screen shows.
//!
//! A [`Notice`] is what a finished remote operation hands to the toast
//! channel. The wording differs per screen, so each screen carries a
//! [`ScreenNotices`] table instead of formatting messages inline.

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// How a failure is worded on a given screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureText {
    /// `"<prefix><error>"`
    Detailed(&'static str),
    /// A fixed sentence; the error itself only goes to the log.
    Fixed(&'static str),
}

impl FailureText {
    fn render(&self, error: &str) -> String {
        match self {
            FailureText::Detailed(prefix) => format!("{prefix}{error}"),
            FailureText::Fixed(text) => text.to_string(),
        }
    }
}

/// Per-screen wording for every operation outcome.
///
/// `None` on a success entry means that outcome is not announced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenNotices {
    pub fetched: Option<&'static str>,
    pub fetch_failed: FailureText,
    pub created: &'static str,
    pub create_failed: FailureText,
    pub updated: &'static str,
    pub update_failed: FailureText,
    pub deleted: &'static str,
    pub delete_failed: FailureText,
}

impl ScreenNotices {
    pub fn lister() -> Self {
        Self {
            fetched: None,
            fetch_failed: FailureText::Detailed("Error: "),
            ..Self::detailed()
        }
    }

    pub fn creator() -> Self {
        Self::detailed()
    }

    pub fn updater() -> Self {
        Self {
            fetch_failed: FailureText::Detailed("Error fetching users: "),
            ..Self::detailed()
        }
    }

    pub fn remover() -> Self {
        Self {
            fetched: Some("Users fetched successfully!"),
            fetch_failed: FailureText::Detailed("Error fetching users: "),
            ..Self::detailed()
        }
    }

    pub fn manager() -> Self {
        Self {
            fetched: None,
            fetch_failed: FailureText::Fixed("Error fetching users."),
            created: "User added successfully.",
            create_failed: FailureText::Fixed("Error adding new user."),
            updated: "User updated successfully.",
            update_failed: FailureText::Fixed("Error updating user."),
            deleted: "User deleted successfully.",
            delete_failed: FailureText::Fixed("Error deleting user."),
        }
    }

    fn detailed() -> Self {
        Self {
            fetched: None,
            fetch_failed: FailureText::Detailed("Error: "),
            created: "User created successfully!",
            create_failed: FailureText::Detailed("Error: "),
            updated: "User updated successfully!",
            update_failed: FailureText::Detailed("Error: "),
            deleted: "User deleted successfully!",
            delete_failed: FailureText::Detailed("Error: "),
        }
    }

    pub fn on_fetched(&self) -> Option<Notice> {
        self.fetched.map(Notice::success)
    }

    pub fn on_fetch_failed(&self, error: &str) -> Notice {
        Notice::error(self.fetch_failed.render(error))
    }

    pub fn on_created(&self) -> Notice {
        Notice::success(self.created)
    }

    pub fn on_create_failed(&self, error: &str) -> Notice {
        Notice::error(self.create_failed.render(error))
    }

    pub fn on_updated(&self) -> Notice {
        Notice::success(self.updated)
    }

    pub fn on_update_failed(&self, error: &str) -> Notice {
        Notice::error(self.update_failed.render(error))
    }

    pub fn on_deleted(&self) -> Notice {
        Notice::success(self.deleted)
    }

    pub fn on_delete_failed(&self, error: &str) -> Notice {
        Notice::error(self.delete_failed.render(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_failures_carry_the_error() {
        let n = ScreenNotices::creator().on_create_failed("Failed to create user");
        assert_eq!(n.level, NoticeLevel::Error);
        assert_eq!(n.message, "Error: Failed to create user");
    }

    #[test]
    fn test_manager_failures_are_fixed() {
        let n = ScreenNotices::manager().on_update_failed("HTTP 500");
        assert_eq!(n.message, "Error updating user.");
    }

    #[test]
    fn test_only_remover_announces_fetch() {
        assert!(ScreenNotices::lister().on_fetched().is_none());
        assert!(ScreenNotices::manager().on_fetched().is_none());
        let n = ScreenNotices::remover().on_fetched().unwrap();
        assert_eq!(n, Notice::success("Users fetched successfully!"));
    }

    #[test]
    fn test_remover_fetch_failure_wording() {
        let n = ScreenNotices::remover().on_fetch_failed("boom");
        assert_eq!(n.message, "Error fetching users: boom");
    }
}
