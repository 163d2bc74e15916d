use crate::config::override_file_path;
use crate::core::data::{Quote, QuoteSource, QuoteStore};
use crate::core::defaults::default_quotes;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Reasons an override file was not used. Never shown to the user.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("{path} contains no quotes")]
    Empty { path: String },
}

/// Reads and parses an override file in one pass.
pub fn read_override(path: &Path) -> Result<Vec<Quote>, StoreError> {
    let display = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Unreadable {
        path: display.clone(),
        source,
    })?;

    let quotes: Vec<Quote> =
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: display.clone(),
            source,
        })?;

    if quotes.is_empty() {
        return Err(StoreError::Empty { path: display });
    }

    Ok(quotes)
}

impl QuoteStore {
    /// The compiled-in quote list.
    pub fn defaults() -> Self {
        QuoteStore::new(default_quotes(), QuoteSource::Defaults)
    }

    /// Loads `~/.quotes.json`, falling back to the defaults.
    pub fn load() -> Self {
        match override_file_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no home directory, using default quotes");
                Self::defaults()
            }
        }
    }

    /// Loads quotes from `path`, falling back to the defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        match read_override(path) {
            Ok(quotes) => {
                debug!(path = %path.display(), count = quotes.len(), "loaded override quotes");
                QuoteStore::new(quotes, QuoteSource::Override(path.to_path_buf()))
            }
            Err(reason) => {
                debug!(%reason, "using default quotes");
                Self::defaults()
            }
        }
    }
}
