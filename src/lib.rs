//! # adsref - Personal ADS reference manager
//!
//! Keeps BibTeX records from the NASA Astrophysics Data System in a local
//! SQLite table, keyed by bibcode.
//!
//! adsref provides:
//! - A single-table record store with add/remove/search/list/export
//! - A narrow fetcher seam with a blocking ADS implementation
//! - TOML configuration for the database path and lookup endpoint

pub mod bibcode;
pub mod storage;
pub mod fetcher;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use bibcode::Bibcode;
pub use fetcher::{AdsFetcher, RecordFetcher};
pub use storage::RecordStore;

/// Result type alias for adsref operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for adsref operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid bibcode: {0:?} (expected 19 characters)")]
    InvalidCode(String),

    #[error(
        "Unable to retrieve the record {bibcode}, possibly because of a wrong bibcode \
         or unavailability of the ADS server ({reason})"
    )]
    Fetch { bibcode: String, reason: String },

    #[error("Unrecognizable record\n{0}")]
    UnrecognizableRecord(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
