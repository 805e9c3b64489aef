use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct RecordRow {
    #[tabled(rename = "Bibcode")]
    pub bibcode: String,
    #[tabled(rename = "Entry")]
    pub entry: String,
}

impl RecordRow {
    /// Row for a stored record, showing the `@TYPE{key` head of the entry
    pub fn new(bibcode: &str, record: &str) -> Self {
        let head = record
            .split_once(',')
            .map(|(head, _)| head)
            .unwrap_or(record)
            .trim();
        Self {
            bibcode: bibcode.to_string(),
            entry: head.to_string(),
        }
    }
}

pub fn record_table(rows: &[RecordRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_uses_entry_head() {
        let row = RecordRow::new("2016ApJ...816...52C", "@ARTICLE{2016ApJ...816...52C,\n   author = {X}\n}\n");
        assert_eq!(row.entry, "@ARTICLE{2016ApJ...816...52C");
    }

    #[test]
    fn test_table_contains_rows() {
        let rows = vec![RecordRow::new("2016ApJ...816...52C", "@ARTICLE{a, b}")];
        let table = record_table(&rows);
        assert!(table.contains("Bibcode"));
        assert!(table.contains("2016ApJ...816...52C"));
        assert!(table.contains("@ARTICLE{a"));
        assert!(record_table(&[]).is_empty());
    }
}
