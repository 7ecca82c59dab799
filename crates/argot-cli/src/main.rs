//! Argot CLI application
//!
//! An interactive console over the Argot command engine, wired to a small
//! set of demo commands.
//!
//! ```bash
//! argot                          # Start interactive mode
//! argot run "sum [1 2 3.5]"      # Execute one line and exit
//! argot commands                 # List available commands
//! ```
//!
//! Set `RUST_LOG=debug` for verbose logging.

mod args;
mod builtins;
mod console;
mod interactive;
mod logging;

use clap::Parser;

use crate::args::{Cli, Commands};
use crate::builtins::DemoConsole;
use crate::console::CliConsole;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = argot_core::load_config_with_overrides(cli.config.as_deref(), cli.overrides())?;
    logging::init(&config.logging, cli.verbose);

    let demo = DemoConsole::new(config)?;
    let console = CliConsole::new(cli.verbose);

    match cli.command {
        Some(Commands::Run { line }) => {
            if !demo.execute(&line, &console) {
                std::process::exit(1);
            }
        }
        Some(Commands::Commands) => {
            console.print_header("Commands");
            for name in demo.registry().names() {
                let description = demo.registry().description(&name).unwrap_or_default();
                console.print_command(&name, &description);
            }
        }
        Some(Commands::Interactive) | None => interactive::run(&demo, &console).await?,
    }

    Ok(())
}
