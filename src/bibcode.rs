//! Bibcode - the 19-character ADS identifier used as the record key
//!
//! Format: `YYYYJJJJJVVVVMPPPPA`, e.g. `2016ApJ...816...52C`.
//! Only the length is checked; the character classes are left to ADS.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of characters in every bibcode
pub const BIBCODE_LEN: usize = 19;

/// A bibcode whose length has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bibcode(String);

impl Bibcode {
    /// Validate a raw code
    pub fn parse(code: &str) -> Result<Self> {
        if code.chars().count() != BIBCODE_LEN {
            return Err(Error::InvalidCode(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bibcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Bibcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Bibcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
