//! Remote record lookup
//!
//! [`RecordFetcher`] is the only thing the store knows about the network.
//! [`AdsFetcher`] talks to the ADS bib_query endpoint; closures can stand in
//! for it when the record is already at hand.

pub mod ads;

pub use ads::{AdsFetcher, DEFAULT_DB_KEY, DEFAULT_ENDPOINT};

use crate::bibcode::Bibcode;
use crate::{Error, Result};

/// Source of BibTeX records for bibcodes not yet in the store
pub trait RecordFetcher {
    /// Retrieve the record text for `bibcode`
    fn fetch(&self, bibcode: &Bibcode) -> Result<String>;
}

impl<F> RecordFetcher for F
where
    F: Fn(&Bibcode) -> Result<String>,
{
    fn fetch(&self, bibcode: &Bibcode) -> Result<String> {
        self(bibcode)
    }
}

/// Cut a response down to the record: everything from the first `@` on.
pub fn extract_record(response: &str) -> Result<String> {
    match response.find('@') {
        Some(idx) => Ok(response[idx..].to_string()),
        None => Err(Error::UnrecognizableRecord(response.to_string())),
    }
}
