//! Raw tabular data as decoded from a CSV byte stream.
//!
//! The first row is header names, every following row is one record. Cells
//! stay untyped strings here; coercion happens in the ranking pipeline.

use podium_common::error::{PodiumError, Result};

/// One fetched table, no schema guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Decode CSV text into a table.
    ///
    /// Rows shorter than the header are allowed; missing cells read back as
    /// blank through [`RawTable::cell`]. A body that is not CSV at all (for
    /// example the HTML interstitial a non-public sheet serves) is a fetch
    /// failure.
    pub fn from_csv(text: &str) -> Result<Self> {
        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            return Err(PodiumError::Fetch("source returned an empty body".to_string()));
        }
        if trimmed.starts_with('<') {
            return Err(PodiumError::Fetch(
                "source returned HTML, not CSV (is the sheet link-accessible?)".to_string(),
            ));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Cell at (row, column), blank when the row is shorter than the header.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_headers_and_rows() {
        let table = RawTable::from_csv("Team_Name,Game_1\nAlpha,10\nBravo,20\n").unwrap();
        assert_eq!(table.headers, vec!["Team_Name", "Game_1"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), "Alpha");
        assert_eq!(table.cell(1, 1), "20");
    }

    #[test]
    fn test_short_rows_read_blank() {
        let table = RawTable::from_csv("Team_Name,Game_1,Game_2\nAlpha,10\n").unwrap();
        assert_eq!(table.cell(0, 1), "10");
        assert_eq!(table.cell(0, 2), "");
    }

    #[test]
    fn test_quoted_cells() {
        let table = RawTable::from_csv("Team Name,Game 1\n\"Alpha, the first\",5\n").unwrap();
        assert_eq!(table.cell(0, 0), "Alpha, the first");
    }

    #[test]
    fn test_html_body_rejected() {
        let err = RawTable::from_csv("<!DOCTYPE html><html>sign in</html>").unwrap_err();
        assert!(matches!(err, PodiumError::Fetch(_)));
    }

    #[test]
    fn test_empty_body_rejected() {
        let err = RawTable::from_csv("   \n").unwrap_err();
        assert!(matches!(err, PodiumError::Fetch(_)));
    }

    #[test]
    fn test_header_only_is_zero_rows() {
        let table = RawTable::from_csv("Team_Name,Game_1\n").unwrap();
        assert_eq!(table.row_count(), 0);
    }
}
