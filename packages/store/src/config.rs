//! # Front-end configuration: `userdir.toml`
//!
//! Defines the TOML file the web binary embeds at build time (filename:
//! [`DirectoryConfig::filename`] = `"userdir.toml"`). It names the remote
//! collection every screen talks to and tunes a few presentation details.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://jsonplaceholder.typicode.com"
//! collection = "users"
//!
//! [notifications]
//! duration_ms = 5000      # how long a toast stays up
//!
//! [lister]
//! skeleton_rows = 5       # placeholder rows while the first fetch is pending
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DirectoryConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Where the collection lives; [`ApiConfig::collection_url`] joins the two parts. |
//! | [`NotificationConfig`] | Toast lifetime, default **5000 ms**. |
//! | [`ListerConfig`] | Skeleton row count, default **5**. |
//!
//! Every section and field has a default, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Top-level configuration stored in `userdir.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub lister: ListerConfig,
}

/// Remote collection location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path segment of the collection under `base_url`.
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_collection() -> String {
    "users".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
        }
    }
}

impl ApiConfig {
    /// `base_url` and `collection` joined with exactly one slash.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    5000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListerConfig {
    #[serde(default = "default_skeleton_rows")]
    pub skeleton_rows: usize,
}

fn default_skeleton_rows() -> usize {
    5
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            skeleton_rows: default_skeleton_rows(),
        }
    }
}

impl DirectoryConfig {
    /// Builder method to point at another collection host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "userdir.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DirectoryConfig::from_toml("").unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.notifications.duration_ms, 5000);
        assert_eq!(config.lister.skeleton_rows, 5);
    }

    #[test]
    fn test_partial_sections() {
        let config = DirectoryConfig::from_toml(
            "[api]\nbase_url = \"http://localhost:3000/\"\n\n[notifications]\nduration_ms = 1500\n",
        )
        .unwrap();
        assert_eq!(config.api.collection, "users");
        assert_eq!(config.api.collection_url(), "http://localhost:3000/users");
        assert_eq!(config.notifications.duration_ms, 1500);
        assert_eq!(config.lister, ListerConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DirectoryConfig::default().with_base_url("https://api.example.org");
        let text = config.to_toml().unwrap();
        assert_eq!(DirectoryConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(DirectoryConfig::from_toml("[api\nbase_url = 1").is_err());
    }
}
