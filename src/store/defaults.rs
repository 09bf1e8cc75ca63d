//! The `DEFAULT_PROFILE` marker: a single `default=<name>` line.

use thiserror::Error;

const MARKER_KEY: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("malformed marker line `{0}`")]
    Malformed(String),
    #[error("unexpected marker key `{0}`")]
    UnknownKey(String),
}

/// Name recorded in a marker file. An empty name means no default.
pub fn parse_marker(contents: &str) -> Result<Option<String>, MarkerError> {
    let line = contents.lines().next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut parts = line.split('=');
    let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MarkerError::Malformed(line.to_string()));
    };

    if key.trim() != MARKER_KEY {
        return Err(MarkerError::UnknownKey(key.trim().to_string()));
    }

    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(value.to_string()))
}

pub fn render_marker(name: Option<&str>) -> String {
    format!("{MARKER_KEY}={}\n", name.unwrap_or_default())
}
