//! The monthly aggregate export.

use climate_obs::{error::Result, Table};

/// A (filename, content) pair handed to the browser or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    /// Comma-separated text with a header row
    pub content: Vec<u8>,
}

impl Download {
    /// Serialize an already-loaded table. The table is never re-read from disk.
    pub fn from_table(filename: &str, table: &Table) -> Result<Download> {
        Ok(Download {
            filename: filename.to_string(),
            content: table.to_csv()?,
        })
    }

    pub fn content_str(&self) -> &str {
        // content is produced by the csv writer from UTF-8 cells
        std::str::from_utf8(&self.content).unwrap_or_default()
    }
}
