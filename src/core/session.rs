use crate::domain::model::MenuChoice;
use crate::domain::ports::Cipher;
use crate::utils::error::Result;
use crate::utils::validation::parse_shift;
use std::io::{BufRead, Write};

const SHIFT_PROMPT: &str = "Enter shift (integer, e.g., 3 or -2): ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub encoded: usize,
    pub decoded: usize,
    pub invalid_inputs: usize,
}

/// Interactive Encode/Decode/Exit loop.
///
/// Invalid menu choices and non-integer shifts are answered with a message
/// and the same prompt again. End of input ends the session.
pub struct Session<C: Cipher, R: BufRead, W: Write> {
    cipher: C,
    input: R,
    output: W,
    summary: SessionSummary,
}

impl<C: Cipher, R: BufRead, W: Write> Session<C, R, W> {
    pub fn new(cipher: C, input: R, output: W) -> Self {
        Self {
            cipher,
            input,
            output,
            summary: SessionSummary::default(),
        }
    }

    pub fn run(&mut self) -> Result<SessionSummary> {
        loop {
            let Some(choice) = self.menu_choice()? else {
                tracing::debug!("Input closed at menu");
                break;
            };

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Goodbye!")?;
                break;
            }

            let Some(message) = self.read_line("Enter your message: ")? else {
                break;
            };
            let Some(shift) = self.read_shift()? else {
                break;
            };

            if choice == MenuChoice::Decode {
                let result = self.cipher.decode(&message, shift);
                writeln!(self.output, "Decoded message: {}", result)?;
                self.summary.decoded += 1;
            } else {
                let result = self.cipher.encode(&message, shift);
                writeln!(self.output, "Encoded message: {}", result)?;
                self.summary.encoded += 1;
            }
            tracing::debug!(?choice, shift, chars = message.chars().count(), "Handled request");
        }

        self.output.flush()?;
        Ok(self.summary)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn menu_choice(&mut self) -> Result<Option<MenuChoice>> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Secret Code Generator ===")?;
        writeln!(self.output, "[E] Encode a message")?;
        writeln!(self.output, "[D] Decode a message")?;
        writeln!(self.output, "[X] Exit")?;

        loop {
            let Some(raw) = self.read_line("Choose an option (E/D/X): ")? else {
                return Ok(None);
            };
            match raw.parse::<MenuChoice>() {
                Ok(choice) => return Ok(Some(choice)),
                Err(e) => {
                    tracing::debug!("Rejected menu input: {}", e);
                    self.summary.invalid_inputs += 1;
                    writeln!(self.output, "{}", e.user_friendly_message())?;
                }
            }
        }
    }

    fn read_shift(&mut self) -> Result<Option<i64>> {
        loop {
            let Some(raw) = self.read_line(SHIFT_PROMPT)? else {
                return Ok(None);
            };
            match parse_shift(&raw) {
                Ok(shift) => return Ok(Some(shift)),
                Err(e) => {
                    tracing::debug!("Rejected shift input: {}", e);
                    self.summary.invalid_inputs += 1;
                    writeln!(self.output, "{}", e.user_friendly_message())?;
                }
            }
        }
    }

    /// Returns `None` at end of input. Only the line terminator is stripped;
    /// bytes that are not UTF-8 become U+FFFD instead of ending the session.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
