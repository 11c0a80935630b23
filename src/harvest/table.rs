//! Pure table data core: snapshots as read from the page, record
//! construction, and de-duplicating accumulation. Nothing in here touches
//! the browser, so the harvesting logic is testable against synthetic
//! tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Key under which a row's identifier attribute is stored in its record
pub const ROW_ID_KEY: &str = "_row_id";

/// One harvested row: column header mapped to trimmed cell text, in header
/// order, plus the `_row_id` entry when the source row carried one
pub type Record = IndexMap<String, String>;

/// One table row as read from the page, before headers are applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRow {
    /// Cell texts in column order
    pub cells: Vec<String>,

    /// The row's `data-id` attribute. `None` means the attribute is
    /// genuinely absent, not that reading it failed.
    #[serde(default)]
    pub row_id: Option<String>,
}

/// The table as rendered at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Header cell texts, possibly blank
    pub headers: Vec<String>,

    /// Body rows
    pub rows: Vec<RawRow>,
}

/// Synthesized name for a column whose header cell is blank or missing.
/// Column indices are 1-based.
fn synthesized_header(index: usize) -> String {
    format!("col_{}", index + 1)
}

impl TableSnapshot {
    /// Header names with blanks replaced by synthesized `col_<n>` names
    pub fn effective_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let trimmed = h.trim();
                if trimmed.is_empty() { synthesized_header(i) } else { trimmed.to_string() }
            })
            .collect()
    }

    /// Build one record per row. Cells beyond the header list get
    /// synthesized column names; rows shorter than the header list simply
    /// omit the trailing keys.
    pub fn records(&self) -> Vec<Record> {
        let headers = self.effective_headers();

        self.rows
            .iter()
            .map(|row| {
                let mut record = Record::new();
                for (i, cell) in row.cells.iter().enumerate() {
                    let key = headers.get(i).cloned().unwrap_or_else(|| synthesized_header(i));
                    record.insert(key, cell.trim().to_string());
                }
                // An empty id carries no identity; treat it like a missing
                // attribute so the cell-tuple fallback applies
                if let Some(id) = row.row_id.as_deref().filter(|id| !id.is_empty()) {
                    record.insert(ROW_ID_KEY.to_string(), id.to_string());
                }
                record
            })
            .collect()
    }
}

/// De-duplication key for one record, stable within a run.
///
/// Known limitation carried from the upstream behavior: when no row id is
/// present the key is the full cell tuple, so two genuinely distinct rows
/// that render identically collapse into one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    /// The row exposed a stable identifier
    RowId(String),

    /// Fallback: every cell value in header order
    Cells(Vec<String>),
}

impl DedupKey {
    /// Derive the key for a record given the effective header list
    pub fn for_record(record: &Record, headers: &[String]) -> Self {
        match record.get(ROW_ID_KEY) {
            Some(id) => DedupKey::RowId(id.clone()),
            None => DedupKey::Cells(
                headers.iter().map(|h| record.get(h).cloned().unwrap_or_default()).collect(),
            ),
        }
    }
}

/// Accumulates records across pages, dropping rows already seen in this run
#[derive(Debug, Default)]
pub struct Accumulator {
    seen: HashSet<DedupKey>,
    records: Vec<Record>,
}

impl Accumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one snapshot, returning how many of its rows were new
    pub fn absorb(&mut self, snapshot: &TableSnapshot) -> usize {
        let headers = snapshot.effective_headers();
        let mut added = 0;

        for record in snapshot.records() {
            let key = DedupKey::for_record(&record, &headers);
            if self.seen.insert(key) {
                self.records.push(record);
                added += 1;
            } else {
                log::debug!("Dropping re-rendered row (already seen this run)");
            }
        }

        added
    }

    /// Number of distinct records accumulated so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been accumulated yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the accumulator, yielding the records in first-seen order
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
