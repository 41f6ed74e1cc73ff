pub mod command;
pub mod run;

use std::collections::HashMap;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::domain::Contact;
use crate::skill::{Dialog, DialogData, Prompter};

/// Prompts on a terminal. Answers given as flags are used without asking.
pub struct TerminalPrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    prefilled: HashMap<Dialog, String>,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prefilled: HashMap::new(),
        }
    }

    /// Answers `dialog` with `answer` when it is present.
    pub fn prefill(mut self, dialog: Dialog, answer: Option<String>) -> Self {
        if let Some(answer) = answer {
            self.prefilled.insert(dialog, answer);
        }
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}") {
            debug!(error = %e, "failed to write prompt");
        }
    }

    // None on EOF, read errors and blank lines.
    fn read_answer(&mut self) -> Option<String> {
        if let Err(e) = write!(self.output, "> ").and_then(|()| self.output.flush()) {
            debug!(error = %e, "failed to write prompt");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()).filter(|l| !l.is_empty()),
            Err(e) => {
                debug!(error = %e, "failed to read answer");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn get_response(&mut self, dialog: Dialog) -> Option<String> {
        if let Some(answer) = self.prefilled.remove(&dialog) {
            return Some(answer);
        }
        self.say(dialog.text());
        self.read_answer()
    }

    /// Accepts the option itself or its number in the printed list.
    fn ask_selection(&mut self, options: &[String], dialog: Dialog) -> Option<String> {
        self.say(dialog.text());
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("{:>3}. {option}", i + 1));
        }

        let answer = self.read_answer()?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => Some(options[n - 1].clone()),
            _ => Some(answer),
        }
    }

    fn ask_yesno(&mut self, dialog: Dialog, data: &DialogData) -> Option<bool> {
        self.say(&format!("{} (y/n)", dialog.render(data)));
        let answer = self.read_answer()?.to_lowercase();
        Some(answer == "y" || answer == "yes")
    }

    fn speak(&mut self, dialog: Dialog, data: &DialogData) {
        self.say(&dialog.render(data));
    }
}

pub fn display_contact(index: usize, contact: &Contact) -> String {
    format!(
        "{index:>3}. {:<20} {:<30} {:<15}",
        contact.name, contact.email, contact.phone
    )
}
