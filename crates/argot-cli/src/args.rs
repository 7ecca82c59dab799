//! CLI argument definitions using clap

use argot_core::ConsoleConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "argot")]
#[command(about = "Argot - typed command console")]
#[command(
    long_about = r#"Argot - typed command console

USAGE:
  argot                          # Start interactive mode
  argot run "<line>"             # Execute a single line
  argot commands                 # List available commands

LINE GRAMMAR:
  words separated by whitespace, "quoted strings" with \" and \\ escapes,
  [ vectors ] of values, nested to any depth"#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML or JSON)
    #[arg(long, env = "ARGOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Prompt shown before each interactive line
    #[arg(long)]
    pub prompt: Option<String>,

    /// Prefix stripped from each line before the command name, e.g. "/"
    #[arg(long)]
    pub command_prefix: Option<String>,

    /// Match command names regardless of case
    #[arg(long)]
    pub ignore_case: bool,

    /// Number of lines kept by the `history` command (0 disables it)
    #[arg(long)]
    pub history_size: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings given as flags, with defaults for the rest
    pub fn overrides(&self) -> ConsoleConfig {
        let defaults = ConsoleConfig::default();
        ConsoleConfig {
            prompt: self.prompt.clone().unwrap_or(defaults.prompt),
            command_prefix: self.command_prefix.clone(),
            case_insensitive: self.ignore_case,
            history_size: self.history_size.unwrap_or(defaults.history_size),
            logging: defaults.logging,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive console (default)
    Interactive,

    /// Execute a single command line and exit
    Run {
        /// The line to execute, e.g. "repeat hi 3"
        line: String,
    },

    /// List all available commands
    Commands,
}
