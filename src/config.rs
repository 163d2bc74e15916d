use crate::cli::Cli;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::OutputFormat;
use chrono::Utc;
use std::path::PathBuf;

pub const OVERRIDE_FILE_NAME: &str = ".quotes.json";
pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 100;

/// Validated settings for a single run, built once from the parsed flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    pub format: OutputFormat,
    pub count: usize,
    pub seed: Option<i64>,
}

impl QuoteConfig {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        Self::new(&cli.format, cli.count, cli.seed)
    }

    pub fn new(format: &str, count: i64, seed: Option<i64>) -> AppResult<Self> {
        let format = format.parse::<OutputFormat>().map_err(|_| AppError::InvalidFormat {
            value: format.to_string(),
        })?;

        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(AppError::InvalidCount { value: count });
        }

        Ok(Self {
            format,
            count: count as usize,
            seed,
        })
    }

    /// The explicit seed, or the current time in nanoseconds when none was given.
    pub fn base_seed(&self) -> i64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

fn time_seed() -> i64 {
    let now = Utc::now();
    // Nanoseconds overflow i64 after 2262.
    now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp_micros())
}

/// `~/.quotes.json`, or `None` when no home directory can be determined
pub fn override_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(OVERRIDE_FILE_NAME))
}
