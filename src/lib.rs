//! quotes - print randomly selected motivational quotes
//!
//! This library provides quote loading, seeded selection and the text,
//! JSON and Markdown formatters behind the `quotes` command.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;
pub mod storage;
pub mod utils;

// Re-export core types for easier use
pub use crate::core::{
    data::{Quote, QuoteSource, QuoteStore},
    selector::{select_many, select_random},
};
pub use config::QuoteConfig;
pub use utils::error::{AppError, AppResult};
pub use utils::format::{OutputFormat, format_json, format_markdown, format_text};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
