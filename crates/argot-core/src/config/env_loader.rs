//! Environment variable-based configuration loading

use super::console_config::ConsoleConfig;
use crate::error::{ArgotError, ArgotResult};

/// Load the default configuration with environment overrides applied
pub fn load_config_from_env() -> ArgotResult<ConsoleConfig> {
    apply_env_overrides(ConsoleConfig::default(), |key| std::env::var(key).ok())
}

/// Override fields of `config` from `ARGOT_*` variables.
///
/// `lookup` resolves a variable name; pass `std::env::var` for the real
/// environment.
pub fn apply_env_overrides<L>(mut config: ConsoleConfig, lookup: L) -> ArgotResult<ConsoleConfig>
where
    L: Fn(&str) -> Option<String>,
{
    if let Some(prompt) = lookup("ARGOT_PROMPT") {
        config.prompt = prompt;
    }

    if let Some(prefix) = lookup("ARGOT_COMMAND_PREFIX") {
        config.command_prefix = if prefix.is_empty() { None } else { Some(prefix) };
    }

    if let Some(value) = lookup("ARGOT_CASE_INSENSITIVE") {
        config.case_insensitive = value
            .parse()
            .map_err(|_| ArgotError::config(format!("Invalid ARGOT_CASE_INSENSITIVE value: {}", value)))?;
    }

    if let Some(value) = lookup("ARGOT_HISTORY_SIZE") {
        config.history_size = value
            .parse()
            .map_err(|_| ArgotError::config(format!("Invalid ARGOT_HISTORY_SIZE value: {}", value)))?;
    }

    if let Some(level) = lookup("ARGOT_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Some(format) = lookup("ARGOT_LOG_FORMAT") {
        config.logging.format = format;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let config = apply_env_overrides(
            ConsoleConfig::default(),
            env(&[
                ("ARGOT_PROMPT", "% "),
                ("ARGOT_COMMAND_PREFIX", "/"),
                ("ARGOT_CASE_INSENSITIVE", "true"),
                ("ARGOT_LOG_LEVEL", "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.prompt, "% ");
        assert_eq!(config.command_prefix.as_deref(), Some("/"));
        assert!(config.case_insensitive);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_empty_prefix_clears() {
        let base = ConsoleConfig {
            command_prefix: Some("!".to_string()),
            ..Default::default()
        };
        let config = apply_env_overrides(base, env(&[("ARGOT_COMMAND_PREFIX", "")])).unwrap();
        assert!(config.command_prefix.is_none());
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let err = apply_env_overrides(
            ConsoleConfig::default(),
            env(&[("ARGOT_CASE_INSENSITIVE", "maybe")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("ARGOT_CASE_INSENSITIVE"));
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = apply_env_overrides(ConsoleConfig::default(), env(&[])).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }
}
