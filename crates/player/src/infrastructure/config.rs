//! Player configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

/// Default approval service base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:4001";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_AUTOSAVE_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub autosave_interval: Duration,
    pub storage_path: PathBuf,
    /// Sent as `X-CSRFToken` on writes when set
    pub csrf_token: Option<String>,
}

impl PlayerConfig {
    /// Read `CODEX_*` variables from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_url: var("CODEX_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            request_timeout: Duration::from_secs(secs(
                "CODEX_REQUEST_TIMEOUT_SECS",
                var("CODEX_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            autosave_interval: Duration::from_secs(secs(
                "CODEX_AUTOSAVE_SECS",
                var("CODEX_AUTOSAVE_SECS"),
                DEFAULT_AUTOSAVE_SECS,
            )),
            storage_path: var("CODEX_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_storage_path),
            csrf_token: var("CODEX_CSRF_TOKEN"),
        }
    }
}

/// Platform config directory, e.g. `~/.config/codex/chargen/storage.json` on Linux.
pub fn default_storage_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("io", "codex", "chargen") {
        dirs.config_dir().join("storage.json")
    } else {
        // Fallback to current directory if project dirs unavailable
        PathBuf::from("codex_storage.json")
    }
}

fn secs(key: &str, raw: Option<String>, default: u64) -> u64 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse::<u64>() {
        Ok(value) if value > 0 => value,
        _ => {
            tracing::warn!(key, value = %raw, default, "Ignoring invalid duration, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> PlayerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlayerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.autosave_interval, Duration::from_secs(30));
        assert_eq!(config.csrf_token, None);
        assert!(config.storage_path.ends_with("storage.json"));
    }

    #[test]
    fn values_are_read_and_trimmed() {
        let config = config(&[
            ("CODEX_API_URL", " https://mush.example.org "),
            ("CODEX_AUTOSAVE_SECS", "5"),
            ("CODEX_STORAGE_PATH", "/tmp/drafts.json"),
            ("CODEX_CSRF_TOKEN", "abc123"),
        ]);
        assert_eq!(config.api_url, "https://mush.example.org");
        assert_eq!(config.autosave_interval, Duration::from_secs(5));
        assert_eq!(config.storage_path, PathBuf::from("/tmp/drafts.json"));
        assert_eq!(config.csrf_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = config(&[
            ("CODEX_REQUEST_TIMEOUT_SECS", "soon"),
            ("CODEX_AUTOSAVE_SECS", "0"),
        ]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.autosave_interval, Duration::from_secs(30));
    }
}
