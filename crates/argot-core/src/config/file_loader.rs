//! File-based configuration loading

use std::fs;
use std::path::Path;

use tracing::debug;

use super::console_config::ConsoleConfig;
use crate::error::{ArgotError, ArgotResult};

/// Load configuration from a file
///
/// Supports TOML and JSON based on file extension (TOML when there is none).
/// Returns the default config if the file doesn't exist.
pub fn load_config_from_file(path: &Path) -> ArgotResult<ConsoleConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(ConsoleConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ArgotError::io_with_path(
            format!("Failed to read config file: {}", e),
            path.display().to_string(),
        )
    })?;

    let config = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            ArgotError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
        _ => toml::from_str(&content).map_err(|e| {
            ArgotError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
    };

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
prompt = "argot> "
command_prefix = "/"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = load_config_from_file(&config_path).unwrap();
        assert_eq!(config.prompt, "argot> ");
        assert_eq!(config.command_prefix.as_deref(), Some("/"));
        assert!(!config.case_insensitive);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{ "case_insensitive": true, "history_size": 10 }"#,
        )
        .unwrap();

        let config = load_config_from_file(&config_path).unwrap();
        assert!(config.case_insensitive);
        assert_eq!(config.history_size, 10);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "prompt = [").unwrap();

        let err = load_config_from_file(&config_path).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.context().unwrap().contains("config.toml"));
    }
}
