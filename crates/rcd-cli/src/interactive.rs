//! Console prompt for the dry-run confirmation
//!
//! A terminal gets a dialoguer line editor. Piped stdin is read line by
//! line, so scripts can answer the prompt.

use std::io::{IsTerminal, StdinLock};

use colored::Colorize;
use dialoguer::Input;
use rcd_core::{Prompt, ReaderPrompt};

/// Terminal prompt backed by dialoguer.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Option<String> {
        println!("{}", message.bold());
        // An aborted prompt counts as end of input
        Input::<String>::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .ok()
    }
}

/// The prompt matching how stdin is attached.
pub enum ConsolePrompt {
    Terminal(TerminalPrompt),
    Piped(ReaderPrompt<StdinLock<'static>>),
}

impl ConsolePrompt {
    pub fn detect() -> Self {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            Self::Terminal(TerminalPrompt)
        } else {
            Self::Piped(ReaderPrompt::new(stdin.lock()))
        }
    }
}

impl Prompt for ConsolePrompt {
    fn ask(&mut self, message: &str) -> Option<String> {
        match self {
            Self::Terminal(prompt) => prompt.ask(message),
            Self::Piped(prompt) => prompt.ask(message),
        }
    }
}
