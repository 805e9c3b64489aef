//! SQLite storage implementation

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::schema;
use crate::bibcode::Bibcode;
use crate::fetcher::RecordFetcher;
use crate::Result;

/// File written by [`RecordStore::export_all`] when no path is given
pub const DEFAULT_EXPORT_FILE: &str = "ref.bib";

/// SQLite-backed store mapping bibcodes to BibTeX records.
///
/// Holds one connection for its whole lifetime; the connection is closed
/// when the store is dropped, or explicitly through [`RecordStore::close`].
/// Statements run in autocommit mode, so every mutation is on disk before
/// the call returns. Not meant to be shared across threads.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open a database file.
    ///
    /// A missing file is created together with the table and its index.
    /// An existing file is used as-is.
    pub fn open(path: &Path) -> Result<Self> {
        let fresh = !path.exists();
        let conn = Connection::open(path)?;
        let store = Self { conn };
        if fresh {
            tracing::debug!("Creating record database at {}", path.display());
            store.initialize_schema()?;
        } else {
            tracing::debug!("Opening record database at {}", path.display());
        }
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Close the connection, reporting any error SQLite raises on close
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    // ========== Record Operations ==========

    /// Look up the record stored for `code`
    pub fn search(&self, code: &str) -> Result<Option<String>> {
        let bibcode = Bibcode::parse(code)?;
        self.get_record(&bibcode)
    }

    /// Fetch and store the record for `code` unless it is already present.
    ///
    /// Returns `false` without calling the fetcher when the record exists.
    /// A fetch error is returned as-is and nothing is written.
    pub fn add<F>(&self, code: &str, fetcher: &F) -> Result<bool>
    where
        F: RecordFetcher + ?Sized,
    {
        let bibcode = Bibcode::parse(code)?;
        if self.get_record(&bibcode)?.is_some() {
            tracing::debug!("Record {} already stored", bibcode);
            return Ok(false);
        }

        let record = fetcher.fetch(&bibcode)?;
        self.conn.execute(
            "INSERT INTO ads_refs (bibcode, record) VALUES (?1, ?2)",
            params![bibcode.as_str(), record],
        )?;
        tracing::info!("Stored record {} ({} bytes)", bibcode, record.len());
        Ok(true)
    }

    /// Delete the record for `code`. Returns `false` when there was none.
    pub fn remove(&self, code: &str) -> Result<bool> {
        let bibcode = Bibcode::parse(code)?;
        let deleted = self
            .conn
            .execute("DELETE FROM ads_refs WHERE bibcode = ?1", [bibcode.as_str()])?;
        if deleted > 0 {
            tracing::info!("Removed record {}", bibcode);
        }
        Ok(deleted > 0)
    }

    /// Every stored `(bibcode, record)` pair, in the order SQLite returns the rows
    pub fn records(&self) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare("SELECT bibcode, record FROM ads_refs")?;
        let records = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<(String, String)>>>()?;
        Ok(records)
    }

    /// Count all records
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM ads_refs", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Write every record into one file, back to back.
    ///
    /// `None` writes to [`DEFAULT_EXPORT_FILE`] in the working directory.
    /// The file is created or truncated. Rows come out in whatever order
    /// SQLite yields them. Returns the number of records written.
    pub fn export_all(&self, path: Option<&Path>) -> Result<usize> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_EXPORT_FILE));
        let mut stmt = self.conn.prepare("SELECT record FROM ads_refs")?;
        let mut rows = stmt.query([])?;

        let mut writer = BufWriter::new(File::create(path)?);
        let mut written = 0;
        while let Some(row) = rows.next()? {
            let record: String = row.get(0)?;
            writer.write_all(record.as_bytes())?;
            written += 1;
        }
        writer.flush()?;

        tracing::info!("Exported {} records to {}", written, path.display());
        Ok(written)
    }

    fn get_record(&self, bibcode: &Bibcode) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT record FROM ads_refs WHERE bibcode = ?1",
                [bibcode.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }
}
