//! Console configuration

use serde::{Deserialize, Serialize};

use super::logging_config::LoggingConfig;

/// Console configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prompt shown by interactive front ends
    pub prompt: String,
    /// Prefix stripped from lines before the command name is read, e.g. "/"
    pub command_prefix: Option<String>,
    /// Whether command names are matched ignoring case
    pub case_insensitive: bool,
    /// Number of lines a front end should keep in its history
    pub history_size: usize,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            command_prefix: None,
            case_insensitive: false,
            history_size: 100,
            logging: LoggingConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Merge with another console config; non-default values win
    pub fn merge(&mut self, other: ConsoleConfig) {
        let defaults = ConsoleConfig::default();

        if other.prompt != defaults.prompt {
            self.prompt = other.prompt;
        }

        if other.command_prefix.is_some() {
            self.command_prefix = other.command_prefix;
        }

        if other.case_insensitive {
            self.case_insensitive = true;
        }

        if other.history_size != defaults.history_size {
            self.history_size = other.history_size;
        }

        self.logging.merge(other.logging);
    }
}
