//! # Inventory Dashboard
//!
//! Terminal front end for the inventory API.
//!
//! ## Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse --api-url (or INVENTORY_API_URL)                              │
//! │  2. Fetch "All Products" and render                                     │
//! │  3. Loop: read a line → Command → Dashboard operation → render          │
//! │  4. `quit` or EOF ends the session                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod command;
mod terminal;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use inventory_client::{Dashboard, ProductClient, Prompt, DEFAULT_API_URL};
use inventory_core::expiry::today;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::command::{Command, ParseError, HELP};
use crate::terminal::TerminalPrompt;

/// Terminal dashboard for the inventory expiry tracker.
#[derive(Debug, Parser)]
#[command(name = "inventory-dashboard", version, about)]
struct Args {
    /// Products collection URL of the inventory API.
    #[arg(long, env = "INVENTORY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing();

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    let mut dashboard = Dashboard::new(ProductClient::new(args.api_url), TerminalPrompt);

    runtime.block_on(dashboard.refresh());
    println!("{}", dashboard.render(today()));
    println!("Type `help` for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("writing prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading command")? == 0 {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                println!("{}", HELP);
                continue;
            }
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        debug!(?command, "Executing");
        runtime.block_on(execute(&mut dashboard, command));
        println!("{}", dashboard.render(today()));
    }

    Ok(())
}

/// Applies one command to the dashboard. Failures are alerted by the
/// dashboard itself.
async fn execute<P: Prompt>(dashboard: &mut Dashboard<P>, command: Command) {
    match command {
        Command::Filter(view) => {
            dashboard.set_filter(view).await;
        }
        Command::Refresh => {
            dashboard.refresh().await;
        }
        Command::Search(term) => dashboard.search(term),
        Command::Sort(field) => dashboard.sort_by(field),
        Command::Next => {
            dashboard.next_page();
        }
        Command::Previous => {
            dashboard.previous_page();
        }
        Command::FormField(field, value) => dashboard.set_form_field(field, value),
        Command::Submit => {
            dashboard.submit_form().await;
        }
        Command::Edit(id) => {
            dashboard.start_edit(id);
        }
        Command::EditField(field, value) => {
            dashboard.set_edit_field(field, value);
        }
        Command::Save => {
            dashboard.save_edit().await;
        }
        Command::Cancel => dashboard.cancel_edit(),
        Command::Delete(id) => {
            dashboard.delete(id).await;
        }
        // Handled by the input loop
        Command::Help | Command::Quit => {}
    }
}

/// Initializes the tracing subscriber on stderr so logs stay out of the table.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
