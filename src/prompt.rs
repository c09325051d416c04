/// Interactive mint address prompt.
use std::io::{self, IsTerminal};

use console::{Term, style};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use tracing::debug;

use crate::mint::MintAddress;

/// Question shown when `--mint` is missing.
pub const MINT_QUESTION: &str = "Enter Solana token mint address:";

/// Line-oriented question/answer channel.
pub trait Prompter {
    /// Ask `message` and return the raw answer.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if no answer can be read.
    fn ask(&mut self, message: &str) -> io::Result<String>;

    /// Tell the user why the last answer was refused.
    fn reject(&mut self, reason: &str);
}

/// Prompter on the controlling terminal (renders on stderr).
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        if !io::stdin().is_terminal() {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "no mint address given and stdin is not a terminal; pass --mint <address>",
            ));
        }

        let prompt = message.trim_end_matches(':');
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&Term::stderr())
            .map_err(io::Error::other)
    }

    fn reject(&mut self, reason: &str) {
        let _ = Term::stderr().write_line(&format!("{} {reason}", style(">>").red().for_stderr()));
    }
}

/// Ask for a mint address until a valid one is entered.
///
/// Empty and malformed answers are rejected and the question is repeated.
///
/// # Errors
///
/// Returns the prompter's I/O error (e.g. EOF or no terminal).
pub fn read_mint_address(prompter: &mut dyn Prompter) -> io::Result<MintAddress> {
    loop {
        let answer = prompter.ask(MINT_QUESTION)?;
        match answer.parse::<MintAddress>() {
            Ok(mint) => return Ok(mint),
            Err(err) => {
                debug!(error = %err, "rejected prompt answer");
                prompter.reject(&err.to_string());
            }
        }
    }
}
