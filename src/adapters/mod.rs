// Adapters layer: concrete implementations of the domain ports.

use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Real terminal backed by stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let bytes = std::io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )
            .into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Non-interactive console: answers each read from a fixed script and
/// records every line written. Used by the test suites to drive whole
/// sessions without a terminal.
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(script: &[&str]) -> Self {
        Self {
            input: script.iter().map(|line| line.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn output(&self) -> Vec<&str> {
        self.output.iter().map(String::as_str).collect()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String> {
        self.input.pop_front().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "script exhausted").into()
        })
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
