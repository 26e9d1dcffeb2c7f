//! Stdin/stdout implementation of [`Prompt`].

use std::io::{self, BufRead, Write};

use inventory_client::Prompt;

/// Alerts print to stdout; confirmations read a y/N line from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        println!("⚠️  {}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
