//! Shared client constructor for all screens.
//!
//! Every screen builds its own client from the configured collection URL.
//! `reqwest` picks the transport per platform: the browser's `fetch` on WASM,
//! hyper everywhere else.

use api::HttpCollection;
use store::{DirectoryConfig, User};

pub type UserClient = HttpCollection<User>;

/// Create a client for the configured `/users` collection.
pub fn make_client(config: &DirectoryConfig) -> UserClient {
    HttpCollection::from_config(&config.api)
}
