//! Database schema definitions

/// SQL to create the records table
pub const CREATE_REFS_TABLE: &str = r#"
CREATE TABLE ads_refs (
    bibcode TEXT UNIQUE,
    record TEXT
)
"#;

/// SQL to create the bibcode index
pub const CREATE_BIBCODE_INDEX: &str =
    "CREATE INDEX ads_refs_bibcode_index ON ads_refs(bibcode)";

/// Get all schema creation statements, run once on a fresh database
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_REFS_TABLE, CREATE_BIBCODE_INDEX]
}
