//! # API crate: access to the remote user collection
//!
//! Everything the screens need to talk to the `/users` collection lives here.
//! The UI never builds requests itself: it picks a [`RemoteCollection`] and
//! calls one of the [`flows`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`collection`] | The [`RemoteCollection`] trait: `list`, `create`, `update`, `delete` |
//! | [`http`] | [`HttpCollection`], JSON over HTTP(S) through `reqwest` |
//! | [`memory`] | [`MemoryCollection`], an in-process stand-in for tests and offline use |
//! | [`error`] | [`ApiError`] and the [`Operation`] it failed in |
//! | [`flows`] | Fetch / create / update / delete as the screens run them |

pub mod collection;
pub mod error;
pub mod flows;
pub mod http;
pub mod memory;

pub use collection::RemoteCollection;
pub use error::{ApiError, Operation};
pub use flows::{fetch_users, submit_create, submit_delete, submit_update, CreateError};
pub use http::HttpCollection;
pub use memory::MemoryCollection;

pub use store::{DirectoryConfig, RecordId, User, UserDraft};
