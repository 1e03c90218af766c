use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::api::NewPost;

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_LOG_FILE: &str = "logs/postprobe.log";

/// Run parameters. Every field has a default matching the public
/// JSONPlaceholder service, so an empty (or absent) config file works.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the posts API, without a trailing slash.
    pub base_url: String,
    /// Number of sequential reads against the created post.
    pub poll_count: u32,
    /// Seconds to wait between consecutive polls (not after the last).
    pub poll_interval_secs: u64,
    /// Title of the post created in step 1.
    pub title: String,
    /// Body of the post created in step 1.
    pub body: String,
    /// Owner reference sent as `userId`.
    pub user_id: u32,
    /// Log file path; the parent directory is created if missing.
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_count: 5,
            poll_interval_secs: 10,
            title: "foo".to_string(),
            body: "bar".to_string(),
            user_id: 1,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or fall back to the defaults when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Payload for the create step.
    pub fn payload(&self) -> NewPost {
        NewPost {
            title: self.title.clone(),
            body: self.body.clone(),
            user_id: self.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.poll_count, 5);
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.title, "foo");
        assert_eq!(config.body, "bar");
        assert_eq!(config.user_id, 1);
        assert_eq!(config.log_file, PathBuf::from("logs/postprobe.log"));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.poll_count, 5);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:8080\"").unwrap();
        writeln!(file, "poll_interval_secs = 0").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.poll_interval_secs, 0);
        assert_eq!(config.poll_count, 5);
        assert_eq!(config.title, "foo");
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pol_count = 3").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/postprobe.toml"))).is_err());
    }

    #[test]
    fn test_payload_mirrors_config() {
        let config = Config::default();
        let payload = config.payload();
        assert_eq!(payload.title, "foo");
        assert_eq!(payload.body, "bar");
        assert_eq!(payload.user_id, 1);
    }
}
