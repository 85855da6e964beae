//! Operator confirmation between dry run and real transfer

use std::io::{BufRead, Write};

/// What the operator chose after the dry run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Run the real transfer with the dry-run arguments
    Continue,
    /// Run the real transfer asking per file
    Interactive,
    /// Skip the real transfer
    Decline,
}

impl Confirmation {
    /// Interpret one line of operator input; `None` is end of input.
    pub fn parse(input: Option<&str>) -> Self {
        let Some(input) = input else {
            return Self::Decline;
        };
        match input.trim().to_lowercase().as_str() {
            "" | "c" | "continue" => Self::Continue,
            "i" | "interactive" => Self::Interactive,
            _ => Self::Decline,
        }
    }
}

/// Source of operator answers.
pub trait Prompt {
    /// Show `message` and wait for one line. `None` means no more input.
    fn ask(&mut self, message: &str) -> Option<String>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, message: &str) -> Option<String> {
        (**self).ask(message)
    }
}

/// Reads answers line by line from any buffered reader.
///
/// Used for piped stdin, where a terminal prompt is unavailable.
pub struct ReaderPrompt<R> {
    reader: R,
}

impl<R: BufRead> ReaderPrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for ReaderPrompt<R> {
    fn ask(&mut self, message: &str) -> Option<String> {
        println!("{}", message);
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}
