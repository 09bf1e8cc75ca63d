pub mod text;

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

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(text_line),
            OutputMode::Json => print_json(json_value),
        }
    }

    /// Whole documents: YAML for people, JSON for scripts.
    pub fn emit_document<T: Serialize>(&self, value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_yaml(value),
            OutputMode::Json => print_json(value),
        }
    }

    pub fn emit_list(&self, empty_text: &str, items: &[String]) -> AppResult<()> {
        match self.mode {
            OutputMode::Text if items.is_empty() => text::print_line(empty_text),
            OutputMode::Text => {
                for item in items {
                    text::print_line(item)?;
                }
                Ok(())
            }
            OutputMode::Json => print_json(&items),
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}
