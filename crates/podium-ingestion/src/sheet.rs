//! Published-spreadsheet CSV export client.
//!
//! The leaderboard lives on the first sheet of a link-accessible document;
//! the CSV export URL is derived from the document id. No authentication:
//! a sheet that is not public comes back as HTML and is reported as a
//! fetch failure by the decoder.

use std::time::Duration;

use podium_common::error::Result;
use tracing::info;

use crate::table::RawTable;

const EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

#[derive(Debug, Clone)]
pub struct SheetClient {
    client: reqwest::Client,
}

impl SheetClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::ClientBuilder::new().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// CSV export URL for the first sheet of a document.
    /// For another tab, append `&gid=<tab_gid>`.
    pub fn csv_export_url(sheet_id: &str) -> String {
        format!("{EXPORT_BASE}/{sheet_id}/export?format=csv")
    }

    /// Fetch the export URL and decode the body as a raw table.
    pub async fn fetch_table(&self, url: &str) -> Result<RawTable> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let table = RawTable::from_csv(&body)?;
        info!(n_rows = table.row_count(), n_cols = table.headers.len(), "Fetched score sheet");
        Ok(table)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
