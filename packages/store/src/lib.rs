pub mod config;
pub mod filter;
pub mod list;
pub mod models;
pub mod notice;
pub mod validation;

pub use config::DirectoryConfig;
pub use filter::filter_by_name;
pub use list::{current_millis, LoadState, LocalList};
pub use models::{Field, Record, RecordId, User, UserDraft};
pub use notice::{Notice, NoticeLevel, ScreenNotices};
pub use validation::{FieldErrors, RuleSet};
