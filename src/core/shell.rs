//! Interactive prompt loop around the cipher.
//!
//! The shell walks a fixed sequence of prompts (mode, source, shift, then a
//! message or a filename), processes the request and asks whether to go
//! again. Bad answers are reported and asked again; only an explicit "no"
//! ends the session.

use crate::core::cipher;
use crate::core::file_adapter::{FileAdapter, FileOutcome};
use crate::domain::model::{Mode, Payload, Request, Shift, Source};
use crate::domain::ports::Storage;
use crate::utils::error::{CipherError, Result};
use crate::utils::validation::{parse_confirmation, parse_mode, parse_shift, parse_source};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MODE_PROMPT: &str = "Would you like to encrypt (e) or decrypt (d): ";
const SOURCE_PROMPT: &str = "Would you like to read from a file (f) or the console (c)? ";
const FILE_PROMPT: &str = "Enter a filename: ";
const REPEAT_PROMPT: &str = "Would you like to encrypt or decrypt another message? (y/n): ";

/// Line-based prompt/response over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show `prompt` and read one answer without its line terminator.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CipherError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Ask until `parse` accepts the answer. Recoverable errors are shown
    /// to the user and the prompt is repeated.
    pub fn prompt_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Rejected answer {:?}: {}", answer, e);
                    self.say(&e.user_friendly_message())?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    SelectMode,
    SelectSource { mode: Mode },
    SelectShift { mode: Mode, source: Source },
    ReadConsoleMessage { mode: Mode, shift: Shift },
    SelectFile { mode: Mode, shift: Shift },
    Process(Request),
    AskRepeat,
    Terminate,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub cycles: usize,
    pub files_written: usize,
}

pub struct Shell<R, W, S: Storage> {
    console: Console<R, W>,
    storage: S,
    output_path: PathBuf,
    banner: bool,
}

impl<R: BufRead, W: Write, S: Storage> Shell<R, W, S> {
    pub fn new(console: Console<R, W>, storage: S, output_path: impl Into<PathBuf>) -> Self {
        Self {
            console,
            storage,
            output_path: output_path.into(),
            banner: true,
        }
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    fn welcome(&mut self) -> Result<()> {
        self.console.say("Welcome to the Caesar Cipher")?;
        self.console
            .say("\nThis program encrypts and decrypts text with the Caesar Cipher.\n")
    }

    /// Run prompts until the user declines another round.
    pub fn run(&mut self) -> Result<SessionSummary> {
        if self.banner {
            self.welcome()?;
        }

        let mut summary = SessionSummary::default();
        let mut state = State::SelectMode;

        loop {
            tracing::trace!("Shell state: {:?}", state);
            state = match state {
                State::SelectMode => {
                    let mode = self.console.prompt_until(MODE_PROMPT, parse_mode)?;
                    State::SelectSource { mode }
                }
                State::SelectSource { mode } => {
                    let source = self.console.prompt_until(SOURCE_PROMPT, parse_source)?;
                    State::SelectShift { mode, source }
                }
                State::SelectShift { mode, source } => {
                    let prompt = format!(
                        "What is the shift number ({}-{}): ",
                        Shift::MIN,
                        Shift::MAX
                    );
                    let shift = self.console.prompt_until(&prompt, parse_shift)?;
                    match source {
                        Source::Console => State::ReadConsoleMessage { mode, shift },
                        Source::File => State::SelectFile { mode, shift },
                    }
                }
                State::ReadConsoleMessage { mode, shift } => {
                    let prompt = format!("What message would you like to {}: ", mode.verb());
                    let message = self.console.read_line(&prompt)?;
                    State::Process(Request {
                        mode,
                        shift,
                        payload: Payload::Message(message),
                    })
                }
                State::SelectFile { mode, shift } => {
                    let storage = &self.storage;
                    let path = self.console.prompt_until(FILE_PROMPT, |answer| {
                        let path = PathBuf::from(answer.trim());
                        storage.probe(&path).map(|_| path)
                    })?;
                    State::Process(Request {
                        mode,
                        shift,
                        payload: Payload::File(path),
                    })
                }
                State::Process(request) => {
                    self.process(&request, &mut summary)?;
                    summary.cycles += 1;
                    State::AskRepeat
                }
                State::AskRepeat => {
                    if self.console.prompt_until(REPEAT_PROMPT, parse_confirmation)? {
                        State::SelectMode
                    } else {
                        self.console.say("Thanks for using the program.")?;
                        State::Terminate
                    }
                }
                State::Terminate => {
                    tracing::info!(
                        "Session finished after {} cycles, {} files written",
                        summary.cycles,
                        summary.files_written
                    );
                    return Ok(summary);
                }
            };
        }
    }

    fn process(&mut self, request: &Request, summary: &mut SessionSummary) -> Result<()> {
        tracing::debug!("Processing {} with shift {}", request.mode, request.shift);

        match &request.payload {
            Payload::Message(message) => {
                let result = cipher::apply(message, request.shift, request.mode);
                self.console.say(&result)
            }
            Payload::File(path) => {
                let outcome = FileAdapter::new(&self.storage, &self.output_path).run(
                    path,
                    request.mode,
                    request.shift,
                );
                match outcome {
                    FileOutcome::Written { path, .. } => {
                        summary.files_written += 1;
                        let notice = format!("Output written to {}", path.display());
                        self.console.say(&notice)
                    }
                    FileOutcome::Empty => {
                        let notice = format!("{} has no lines, nothing written.", path.display());
                        self.console.say(&notice)
                    }
                    FileOutcome::Failed(e) => self.console.say(&e.user_friendly_message()),
                }
            }
        }
    }
}
