use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{kind} profile `{name}` not found")]
    NotFound { kind: &'static str, name: String },
    #[error("{0} already exists")]
    AlreadyExists(String),
    #[error("no default {0} profile is set")]
    NoDefaultProfile(&'static str),
    #[error("invalid astroprofile reference `{name}`: {reason}")]
    InvalidReference { name: String, reason: String },
    #[error("horizon file error: {0}")]
    Horizon(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
