//! Core domain layer
//!
//! This module contains the quote data structures, the built-in quote list
//! and the seeded selector that together form the heart of the application.

pub mod data;
pub mod defaults;
pub mod selector;

// Re-export for easier access
pub use data::{Quote, QuoteSource, QuoteStore};
pub use selector::{SplitMix64, select_many, select_random};
