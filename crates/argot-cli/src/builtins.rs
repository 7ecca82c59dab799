//! Demo command set for the console

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use argot_core::{Arg, ArgotResult, CommandOutput, CommandRegistry, ConsoleConfig};
use parking_lot::{Mutex, RwLock};

use crate::console::CliConsole;

/// Largest count `repeat` accepts
const MAX_REPEAT: u32 = 1000;

/// Name and help text of every registered command, keyed by lookup key
type HelpIndex = Arc<RwLock<BTreeMap<String, (String, String)>>>;

/// Lines entered so far, oldest first, bounded by `history_size`
type History = Arc<Mutex<VecDeque<String>>>;

/// Registry populated with the demo commands, plus the state they share
pub struct DemoConsole {
    registry: CommandRegistry,
    exit: Arc<AtomicBool>,
    history: History,
    history_size: usize,
}

impl DemoConsole {
    /// Build the registry and register every demo command
    pub fn new(config: ConsoleConfig) -> ArgotResult<Self> {
        let history_size = config.history_size;
        let case_insensitive = config.case_insensitive;
        let mut registry = CommandRegistry::with_config(config);
        let exit = Arc::new(AtomicBool::new(false));
        let history: History = Arc::default();
        let index: HelpIndex = Arc::default();

        register_help(&mut registry, index.clone(), case_insensitive)?;
        register_history(&mut registry, history.clone())?;
        register_demo(&mut registry, exit.clone())?;

        // Help renders from a snapshot so it never locks the registry it lives in.
        let mut help = index.write();
        for name in registry.names() {
            let text = registry.help(&name)?;
            help.insert(registry.key(&name), (name, text));
        }
        drop(help);

        Ok(Self {
            registry,
            exit,
            history,
            history_size,
        })
    }

    /// The underlying registry
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Whether `exit` has been run
    pub fn should_exit(&self) -> bool {
        self.exit.load(Ordering::SeqCst)
    }

    /// Run one line and print its outcome; returns false on failure
    pub fn execute(&self, line: &str, console: &CliConsole) -> bool {
        self.record(line);
        match self.registry.run(line) {
            Ok(CommandOutput::Text(text)) => {
                console.output(&text);
                true
            }
            Ok(CommandOutput::None) => true,
            Err(e) => {
                console.error(&e.to_string());
                false
            }
        }
    }

    /// Remember a non-blank line, dropping the oldest past `history_size`
    fn record(&self, line: &str) {
        if self.history_size == 0 || line.trim().is_empty() {
            return;
        }
        let mut history = self.history.lock();
        while history.len() >= self.history_size {
            history.pop_front();
        }
        history.push_back(line.to_string());
    }
}

fn register_help(
    registry: &mut CommandRegistry,
    index: HelpIndex,
    case_insensitive: bool,
) -> ArgotResult<()> {
    let help_index = index.clone();
    registry.register_command(
        "help",
        "Show help for one command, or for all commands",
        move |command: String| -> Result<String, String> {
            let help = help_index.read();
            if command.is_empty() {
                return Ok(help
                    .values()
                    .map(|(_, text)| text.as_str())
                    .collect::<String>()
                    .trim_end()
                    .to_string());
            }
            let key = if case_insensitive {
                command.to_lowercase()
            } else {
                command.clone()
            };
            help.get(&key)
                .map(|(_, text)| text.trim_end().to_string())
                .ok_or_else(|| format!("no command named '{}'", command))
        },
        (Arg::with_default("command", String::new()),),
    )?;

    registry.register_command(
        "commands",
        "List the names of all commands",
        move || {
            index
                .read()
                .values()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        },
        (),
    )
}

fn register_history(registry: &mut CommandRegistry, history: History) -> ArgotResult<()> {
    registry.register_command(
        "history",
        "List the lines entered so far, oldest first",
        move || {
            history
                .lock()
                .iter()
                .enumerate()
                .map(|(i, line)| format!("{:>4}  {}", i + 1, line))
                .collect::<Vec<_>>()
                .join("\n")
        },
        (),
    )
}

fn register_demo(registry: &mut CommandRegistry, exit: Arc<AtomicBool>) -> ArgotResult<()> {
    registry.register_command(
        "echo",
        "Print the given text",
        |text: String| text,
        (Arg::<String>::new("text"),),
    )?;

    registry.register_command(
        "sum",
        "Add up a vector of numbers",
        |values: Vec<f64>| values.iter().sum::<f64>().to_string(),
        (Arg::<Vec<f64>>::new("values"),),
    )?;

    registry.register_command(
        "repeat",
        "Repeat text a number of times",
        |text: String, times: u32| -> Result<String, String> {
            if times > MAX_REPEAT {
                return Err(format!("times must be at most {}", MAX_REPEAT));
            }
            Ok(std::iter::repeat_n(text.as_str(), times as usize)
                .collect::<Vec<_>>()
                .join(" "))
        },
        (Arg::<String>::new("text"), Arg::with_default("times", 2u32)),
    )?;

    registry.register_command(
        "matrix",
        "Print a matrix of integers with row sums",
        |rows: Vec<Vec<i32>>| -> Result<String, String> {
            if rows.is_empty() {
                return Err("matrix has no rows".to_string());
            }
            let lines: Vec<String> = rows
                .iter()
                .map(|row| {
                    let cells: Vec<String> = row.iter().map(|v| format!("{:>6}", v)).collect();
                    format!("{} | {:>6}", cells.join(""), row.iter().map(|&v| i64::from(v)).sum::<i64>())
                })
                .collect();
            Ok(lines.join("\n"))
        },
        (Arg::<Vec<Vec<i32>>>::new("rows"),),
    )?;

    registry.register_command(
        "exit",
        "Leave the console",
        move || exit.store(true, Ordering::SeqCst),
        (),
    )
}
