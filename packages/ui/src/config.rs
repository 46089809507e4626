//! Configuration context shared by every screen.

use dioxus::prelude::*;
use store::DirectoryConfig;

/// The [`DirectoryConfig`] installed by the app root, or the defaults when
/// rendered outside of one.
pub fn use_directory_config() -> DirectoryConfig {
    try_use_context::<DirectoryConfig>().unwrap_or_default()
}

/// Parse the bundled `userdir.toml`, falling back to the defaults.
pub fn load_config(raw: &str) -> DirectoryConfig {
    match DirectoryConfig::from_toml(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring {}: {e}", DirectoryConfig::filename());
            DirectoryConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_falls_back_on_garbage() {
        assert_eq!(load_config("[api\nbase_url ="), DirectoryConfig::default());
    }

    #[test]
    fn test_load_config_reads_overrides() {
        let config = load_config("[notifications]\nduration_ms = 1500\n");
        assert_eq!(config.notifications.duration_ms, 1500);
        assert_eq!(config.api, DirectoryConfig::default().api);
    }
}
