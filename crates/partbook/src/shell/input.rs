//! Validated console input primitives.
//!
//! Every primitive re-prompts until it gets acceptable input, so callers
//! never see a validation failure. The prompter is generic over its reader
//! and writer, which keeps the loops unit-testable with in-memory streams.

use std::io::{self, BufRead, Write};

/// Interactive prompter over a line-based input stream.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream fails.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            // Input stream closed; let the shell wind down.
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim().to_string())
    }

    /// Read non-empty text, re-prompting until valid.
    ///
    /// Leading and trailing whitespace is trimmed. When `allow_digits` is
    /// false the text must not contain decimal digits.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying stream fails or closes.
    pub fn read_text(&mut self, prompt: &str, allow_digits: bool) -> io::Result<String> {
        loop {
            let entry = self.prompt_line(prompt)?;
            if entry.is_empty() {
                self.say("Error: input must not be empty.")?;
                continue;
            }
            if !allow_digits && entry.chars().any(|c| c.is_ascii_digit()) {
                self.say("Error: digits are not allowed in this field.")?;
                continue;
            }
            return Ok(entry);
        }
    }

    /// Read a floating-point number, re-prompting until valid.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying stream fails or closes.
    pub fn read_number(&mut self, prompt: &str) -> io::Result<f32> {
        loop {
            let entry = self.prompt_line(prompt)?;
            match entry.parse::<f32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Error: please enter a valid number.")?,
            }
        }
    }

    /// Read a menu choice in `1..=max`, re-prompting until valid.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying stream fails or closes.
    pub fn read_choice(&mut self, prompt: &str, max: u32) -> io::Result<u32> {
        loop {
            let entry = self.prompt_line(prompt)?;
            match entry.parse::<u32>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
                _ => self.say(&format!(
                    "Invalid option. Please enter a number between 1 and {max}."
                ))?,
            }
        }
    }

    /// Ask a yes/no question; `1` means yes, anything else no.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying stream fails or closes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let choice = self.read_choice(&format!("{prompt}\nYes(1) No(2): "), 2)?;
        Ok(choice == 1)
    }
}
