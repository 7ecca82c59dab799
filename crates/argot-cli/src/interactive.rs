//! Interactive console loop

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::builtins::DemoConsole;
use crate::console::CliConsole;

/// Read lines from stdin and dispatch them until EOF or `exit`
pub async fn run(demo: &DemoConsole, console: &CliConsole) -> anyhow::Result<()> {
    let prompt = demo.registry().config().prompt.clone();
    console.info("Type 'help' for a list of commands, 'exit' to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("stdin closed");
            println!();
            break;
        };

        demo.execute(&line, console);
        if demo.should_exit() {
            break;
        }
    }

    Ok(())
}
