use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SproutError};
use crate::fetch::DEFAULT_TIMEOUT;

/// User-level configuration loaded from `~/.config/sprout/config.toml`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// License used when none is given on the command line.
    pub default_license: Option<String>,

    /// Upper bound on each remote fetch, in seconds.
    pub fetch_timeout_secs: Option<u64>,

    /// Interpreter used to create virtualenvs (default `python3`).
    pub python: Option<String>,

    /// Content key to location overrides, e.g.
    /// `python-gitignore = "https://mirror.example.com/Python.gitignore"`.
    #[serde(default)]
    pub sources: HashMap<String, String>,
}

impl UserConfig {
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn python(&self) -> &str {
        self.python.as_deref().unwrap_or("python3")
    }
}

/// Get the path to the user config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sprout").join("config.toml"))
}

/// Load the config at `path`, or the default location when `path` is `None`.
///
/// A missing file yields defaults; an unreadable or malformed one is an error.
pub fn load_user_config(path: Option<&Path>) -> Result<UserConfig> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => return Ok(UserConfig::default()),
    };

    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|e| SproutError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| SproutError::ConfigParse { path, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
default_license = "apache"
fetch_timeout_secs = 3
python = "python3.12"

[sources]
python-gitignore = "https://mirror.example.com/Python.gitignore"
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_license.as_deref(), Some("apache"));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(3));
        assert_eq!(config.python(), "python3.12");
        assert_eq!(
            config.sources["python-gitignore"],
            "https://mirror.example.com/Python.gitignore"
        );
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config: UserConfig = toml::from_str("").unwrap();
        assert!(config.default_license.is_none());
        assert_eq!(config.fetch_timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.python(), "python3");
        assert!(config.sources.is_empty());
    }

    #[test]
    fn missing_explicit_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_user_config(Some(&dir.path().join("nope.toml"))).unwrap();
        assert!(config.sources.is_empty());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid [[ toml").unwrap();
        let err = load_user_config(Some(&path)).unwrap_err();
        assert!(matches!(err, SproutError::ConfigParse { .. }));
    }
}
