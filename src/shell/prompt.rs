//! Line-oriented prompts that keep asking until the answer is usable.
//!
//! Each helper writes its message, reads one line, and re-prompts with a hint
//! on bad input. Running out of input surfaces as [`InputClosed`] so the
//! session can end cleanly instead of looping forever.

use crate::plate::Plate;
use anyhow::{Context, Result};
use std::fmt;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

const BLANK_HINT: &str = "This field cannot be left blank";
const PLATE_PROMPT: &str = "Enter the vehicle plate (e.g. 1234BCD):";
const PLATE_HINT: &str = "The plate format is not correct.\n\
Four digits followed by three consonants of the English alphabet are required (e.g. 1234BCD)";
const RANGE_HINT: &str = "That is not a number within the allowed range. Try again";

/// The input stream ended before a prompt got an answer.
#[derive(Debug, Error)]
#[error("input closed")]
pub struct InputClosed;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `message` followed by a newline.
    pub fn say(&mut self, message: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{message}").context("writing to console")?;
        Ok(())
    }

    /// Write an already newline-terminated block (records, listings).
    pub fn show(&mut self, block: impl fmt::Display) -> Result<()> {
        write!(self.output, "{block}").context("writing to console")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.output.flush().context("flushing console")
    }

    fn read_line(&mut self) -> Result<String> {
        self.flush()?;
        let mut raw = Vec::new();
        let bytes = self
            .input
            .read_until(b'\n', &mut raw)
            .context("reading console input")?;
        if bytes == 0 {
            return Err(InputClosed.into());
        }
        // Undecodable bytes become U+FFFD and fail validation like any other typo.
        Ok(String::from_utf8_lossy(&raw).trim().to_string())
    }

    /// Ask for free text, re-prompting while the answer is blank.
    pub fn read_text(&mut self, message: &str) -> Result<String> {
        loop {
            self.say(message)?;
            let line = self.read_line()?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.say(BLANK_HINT)?;
        }
    }

    /// Ask for a plate, uppercasing the answer and re-prompting while it
    /// does not match the plate format.
    pub fn read_plate(&mut self) -> Result<Plate> {
        loop {
            let text = self.read_text(PLATE_PROMPT)?;
            match text.parse::<Plate>() {
                Ok(plate) => return Ok(plate),
                Err(err) => {
                    debug!(%err, "plate rejected");
                    self.say(PLATE_HINT)?;
                }
            }
        }
    }

    /// Ask for an integer in `min..=max`, re-prompting on anything else.
    pub fn read_choice(&mut self, message: &str, min: u32, max: u32) -> Result<u32> {
        loop {
            self.say(message)?;
            let line = self.read_line()?;
            match line.parse::<u32>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                _ => self.say(RANGE_HINT)?,
            }
        }
    }
}
