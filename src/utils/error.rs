use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("invalid format: {value} (must be one of: text, json, markdown)")]
    InvalidFormat { value: String },

    #[error("count must be 1-100, got {value}")]
    InvalidCount { value: i64 },

    #[error("no quotes available")]
    NoQuotes,

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::InvalidFormat { .. } | AppError::InvalidCount { .. } => {
            eprintln!("Error: {}", OutputStyle::error(&err.to_string()));
            eprintln!("{}", OutputStyle::muted("Run 'quotes --help' for usage."));
        }
        AppError::NoQuotes | AppError::Io(_) => {
            eprintln!("Error: {}", OutputStyle::error(&err.to_string()));
        }
    }
}
