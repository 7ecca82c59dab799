//! Command registry
//!
//! Maps names to commands and routes raw lines to them. The first
//! whitespace-delimited token of a line selects the command; the rest of
//! the line is handed to that command unchanged.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::error::{ArgotError, ArgotResult};
use crate::value::is_plain_whitespace;

use super::arg_list::ArgList;
use super::command::{Command, CommandBase};
use super::handler::{CommandOutput, Handler, IntoOutput};

/// Registry of named commands.
///
/// Every command sits behind its own lock: one invocation per command is in
/// flight at a time, while different commands may run concurrently.
pub struct CommandRegistry {
    /// Registered commands by lookup key
    commands: BTreeMap<String, Mutex<Box<dyn CommandBase>>>,
    /// Console configuration
    config: ConsoleConfig,
}

impl CommandRegistry {
    /// Create an empty registry with default configuration
    pub fn new() -> Self {
        Self::with_config(ConsoleConfig::default())
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: ConsoleConfig) -> Self {
        Self {
            commands: BTreeMap::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Register a command, rejecting invalid and duplicate names
    pub fn register<C>(&mut self, command: C) -> ArgotResult<()>
    where
        C: CommandBase + 'static,
    {
        validate_name(command.name())?;
        let key = self.key(command.name());
        if self.commands.contains_key(&key) {
            return Err(ArgotError::duplicate_command(command.name()));
        }

        debug!(
            command = command.name(),
            arguments = command.argument_count(),
            "registered command"
        );
        self.commands.insert(key, Mutex::new(Box::new(command)));
        Ok(())
    }

    /// Register a command, replacing any existing one with the same name
    pub fn register_or_replace<C>(&mut self, command: C) -> ArgotResult<()>
    where
        C: CommandBase + 'static,
    {
        validate_name(command.name())?;
        let key = self.key(command.name());
        if self.commands.insert(key, Mutex::new(Box::new(command))).is_some() {
            debug!("replaced existing command");
        }
        Ok(())
    }

    /// Build a [`Command`] from its parts and register it
    pub fn register_command<F, S, Out>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
        args: S,
    ) -> ArgotResult<()>
    where
        S: ArgList + Send + 'static,
        F: Handler<S::Values, Out> + Send + 'static,
        Out: IntoOutput + 'static,
    {
        self.register(Command::new(name, description, handler, args))
    }

    /// Parse a raw line and dispatch it to the named command.
    ///
    /// A blank line produces no output. The configured prefix, if any, is
    /// stripped before the name is read.
    pub fn run(&self, line: &str) -> ArgotResult<CommandOutput> {
        let line = self.strip_prefix(line.trim_start_matches(is_plain_whitespace));
        if line.trim_matches(is_plain_whitespace).is_empty() {
            return Ok(CommandOutput::None);
        }

        let (name, rest) = match line.find(is_plain_whitespace) {
            Some(index) => line.split_at(index),
            None => (line, ""),
        };

        let entry = self
            .commands
            .get(&self.key(name))
            .ok_or_else(|| ArgotError::unknown_command(name))?;

        debug!(command = name, "dispatching command");
        let mut command = entry.lock();
        command.invoke(rest).map_err(|err| {
            debug!(command = name, error = %err, "command failed");
            ArgotError::from(err)
        })
    }

    /// Help text for one command
    pub fn help(&self, name: &str) -> ArgotResult<String> {
        self.commands
            .get(&self.key(name))
            .map(|entry| entry.lock().help())
            .ok_or_else(|| ArgotError::unknown_command(name))
    }

    /// Help text for every command, ordered by name
    pub fn help_all(&self) -> String {
        self.commands
            .values()
            .map(|entry| entry.lock().help())
            .collect()
    }

    /// Description of one command
    pub fn description(&self, name: &str) -> Option<String> {
        self.commands
            .get(&self.key(name))
            .map(|entry| entry.lock().description().to_string())
    }

    /// Number of declared arguments of one command
    pub fn argument_count(&self, name: &str) -> Option<usize> {
        self.commands
            .get(&self.key(name))
            .map(|entry| entry.lock().argument_count())
    }

    /// Registered names, ordered
    pub fn names(&self) -> Vec<String> {
        self.commands
            .values()
            .map(|entry| entry.lock().name().to_string())
            .collect()
    }

    /// Command names starting with `prefix`, for autocomplete
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        let prefix = self.strip_prefix(prefix.trim_start_matches(is_plain_whitespace));
        let prefix = self.key(prefix);
        self.commands
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, entry)| entry.lock().name().to_string())
            .collect()
    }

    /// Check if a command exists
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&self.key(name))
    }

    /// Remove a command, returning whether it existed
    pub fn remove(&mut self, name: &str) -> bool {
        self.commands.remove(&self.key(name)).is_some()
    }

    /// Remove every command
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Get command count
    pub fn count(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Lookup key for `name` under the configured case rule
    pub fn key(&self, name: &str) -> String {
        if self.config.case_insensitive {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }

    fn strip_prefix<'a>(&self, line: &'a str) -> &'a str {
        match self.config.command_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => line.strip_prefix(prefix).unwrap_or(line),
            _ => line,
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

/// Names must be a single non-empty token to be reachable from a line
fn validate_name(name: &str) -> ArgotResult<()> {
    if name.is_empty() {
        return Err(ArgotError::invalid_command_name(name, "name is empty"));
    }
    if name.chars().any(is_plain_whitespace) {
        return Err(ArgotError::invalid_command_name(
            name,
            "name contains whitespace",
        ));
    }
    Ok(())
}
