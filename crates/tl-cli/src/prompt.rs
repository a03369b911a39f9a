//! Line-based prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use crate::session::SessionError;

/// Separator printed before each question.
const SEPARATOR: &str = "\n*******";

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const SPINNER_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Cosmetic "Loading..." animation shown between prompts.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    duration: Duration,
}

impl Spinner {
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Animates for the configured duration, then clears the line.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.duration.is_zero() {
            return Ok(());
        }
        let started = Instant::now();
        for frame in SPINNER_FRAMES.iter().cycle() {
            let elapsed = started.elapsed();
            if elapsed >= self.duration {
                break;
            }
            write!(out, "\r{frame} Loading...")?;
            out.flush()?;
            thread::sleep(SPINNER_FRAME_INTERVAL.min(self.duration - elapsed));
        }
        write!(out, "\r{:12}\r", "")?;
        out.flush()
    }
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    spinner: Spinner,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W, spinner: Spinner) -> Self {
        Self {
            input,
            output,
            spinner,
        }
    }

    /// Prints `question`, then reads one trimmed line.
    ///
    /// Fails with [`SessionError::EndOfInput`] once input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<String, SessionError> {
        write!(self.output, "{question}\n> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(SessionError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Prints a line of output.
    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    /// Prints raw text without a trailing newline.
    pub fn print(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        write!(self.output, "{}", text.as_ref())
    }

    /// Runs the spinner and prints the question separator.
    pub fn pause(&mut self) -> io::Result<()> {
        self.spinner.run(&mut self.output)?;
        self.separator()
    }

    /// Prints the question separator.
    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.output, "{SEPARATOR}")
    }

    /// Consumes the prompter, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
