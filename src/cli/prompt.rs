//! Interactive prompts used by the download flow.
//!
//! The flow only talks to the [`Prompt`] trait, so it can run against the
//! terminal ([`StdioPrompt::stdio`]), a scripted reader in tests, or no input
//! at all ([`AssumeYes`]).

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use anyhow::{Context, Result};

/// Source of answers to the questions asked before a download.
pub trait Prompt {
    /// Ask a yes/no question. Only an explicit `y` counts as yes.
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Ask for a line of free text, returned trimmed.
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Prompt that writes questions to `writer` and reads answers line by line
/// from `reader`.
#[derive(Debug)]
pub struct StdioPrompt<R, W> {
    reader: R,
    writer: W,
}

impl StdioPrompt<StdinLock<'static>, Stdout> {
    /// Prompt bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioPrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompt, returning the writer (used by tests to inspect output).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_answer(&mut self) -> Result<String> {
        self.writer.flush().context("Failed to flush prompt")?;

        // End of input reads as an empty answer.
        let mut input = String::new();
        self.reader
            .read_line(&mut input)
            .context("Failed to read user input")?;

        Ok(input.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for StdioPrompt<R, W> {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        writeln!(self.writer, "{message} [y/n]").context("Failed to write prompt")?;
        let answer = self.read_answer()?;
        Ok(answer.to_lowercase() == "y")
    }

    fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{message}: ").context("Failed to write prompt")?;
        self.read_answer()
    }
}

/// Prompt that confirms everything without reading input (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        println!("{message} [y/n] y");
        Ok(true)
    }

    /// Never reached after `confirm`; an empty answer means "no path".
    fn ask(&mut self, _message: &str) -> Result<String> {
        Ok(String::new())
    }
}
