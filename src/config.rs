//! Configuration handling for the sign-up form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "signup_tui=info";

/// File name of the submissions log inside the data directory
const SUBMISSIONS_FILE: &str = "submissions.jsonl";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Where accepted submissions are appended (JSON lines)
    pub submissions_path: Option<String>,
    /// Tracing filter directive, e.g. `signup_tui=debug`
    pub log_filter: Option<String>,
}

impl SignupConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "signup", "signup-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Whether a config file is present on disk
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: SignupConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    /// Resolve where submissions are written.
    /// Falls back to the working directory when no data directory is known.
    pub fn submissions_path(&self) -> PathBuf {
        if let Some(ref path) = self.submissions_path {
            return PathBuf::from(path);
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join(SUBMISSIONS_FILE))
            .unwrap_or_else(|| PathBuf::from(SUBMISSIONS_FILE))
    }

    /// Tracing filter to use when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignupConfig::default();
        assert!(config.submissions_path.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_serialization() {
        let config = SignupConfig {
            submissions_path: Some("/tmp/signups.jsonl".to_string()),
            log_filter: Some("signup_tui=debug".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SignupConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.submissions_path,
            Some("/tmp/signups.jsonl".to_string())
        );
        assert_eq!(parsed.log_filter(), "signup_tui=debug");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SignupConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submissions_path.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Unknown keys are ignored
        let json = r#"{"log_filter": "warn", "theme": "purple"}"#;
        let parsed: SignupConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.log_filter(), "warn");
    }

    #[test]
    fn test_submissions_path_override() {
        let config = SignupConfig {
            submissions_path: Some("out/signups.jsonl".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.submissions_path(),
            PathBuf::from("out/signups.jsonl")
        );
    }

    #[test]
    fn test_default_submissions_path_file_name() {
        let path = SignupConfig::default().submissions_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(SUBMISSIONS_FILE)
        );
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir =
            std::env::temp_dir().join(format!("signup-tui-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("config.json");
        let config = SignupConfig {
            submissions_path: Some("out/signups.jsonl".to_string()),
            log_filter: Some("signup_tui=debug".to_string()),
        };

        config.save_to(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let loaded = SignupConfig::load_from(&path).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert!(content.contains('\n'), "expected pretty JSON");
        assert_eq!(loaded.submissions_path, config.submissions_path);
        assert_eq!(loaded.log_filter(), "signup_tui=debug");
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-config-{}.json",
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, "{ not json").unwrap();
        let result = SignupConfig::load_from(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
