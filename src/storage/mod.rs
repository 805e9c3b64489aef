//! Storage Layer - SQLite-backed persistence
//!
//! A single table holds every record:
//! - ads_refs(bibcode, record)

pub mod schema;
pub mod sqlite;

pub use sqlite::{RecordStore, DEFAULT_EXPORT_FILE};
