use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Prints `text_line` in text mode, or `json_value` pretty-printed in json
    /// mode.
    pub fn emit<T: Serialize + ?Sized>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        let mut stdout = io::stdout().lock();
        match self.mode {
            OutputMode::Text => writeln!(stdout, "{text_line}")?,
            OutputMode::Json => {
                let payload = serde_json::to_string_pretty(json_value)?;
                writeln!(stdout, "{payload}")?;
            }
        }
        Ok(())
    }
}
