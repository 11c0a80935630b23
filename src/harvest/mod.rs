//! Table harvesting: infinite-scroll expansion, per-page snapshot
//! extraction, de-duplicating accumulation, and pagination.
//!
//! The loop terminates on two independent signals: the scroll phase stops
//! after [`MAX_IDLE_SCROLL_CYCLES`] consecutive scrolls without row growth,
//! and the page loop stops when no enabled "next page" candidate resolves.

pub mod table;

pub use table::{Accumulator, DedupKey, RawRow, Record, ROW_ID_KEY, TableSnapshot};

use crate::browser::BrowserSession;
use crate::error::{HarvestError, Result};
use crate::{locator, selectors};
use std::time::Duration;

/// Consecutive no-growth scroll cycles treated as "no more content"
pub const MAX_IDLE_SCROLL_CYCLES: u32 = 3;

/// Pause after each scroll so lazily loaded rows can arrive
const SCROLL_WAIT_MS: u64 = 400;

/// Extra pause after a successful "next page" click, on top of settling
const NEXT_PAGE_GRACE_MS: u64 = 300;

/// In-page script producing a JSON `TableSnapshot`
const EXTRACT_TABLE_JS: &str = include_str!("extract_table.js");

/// Counts the table's body rows (header row excluded when there is no tbody)
const ROW_COUNT_JS: &str = r#"
    (function () {
        const table = document.querySelector("table");
        if (!table) { return 0; }
        const body = table.querySelectorAll("tbody tr").length;
        if (body > 0) { return body; }
        return Math.max(table.querySelectorAll("tr").length - 1, 0);
    })()
"#;

const SCROLL_TO_BOTTOM_JS: &str = "window.scrollBy(0, document.body.scrollHeight); true";

/// Harvest every row of the revealed product table, across infinite scroll
/// and pagination, de-duplicated for the whole run
pub fn harvest_full_table(session: &BrowserSession) -> Result<Vec<Record>> {
    log::info!("Harvesting table");

    // The table must exist before anything else is attempted
    locator::resolve_first(session.tab(), selectors::TABLE, session.timeouts().element)
        .ok_or_else(|| HarvestError::ElementNotFound("product table".to_string()))?;

    // Scroll expansion is best effort; a page without infinite scroll just
    // burns the idle cycles and moves on
    if let Err(e) = scroll_to_exhaustion(session) {
        log::warn!("Infinite-scroll expansion failed, continuing with visible rows: {}", e);
    }

    let mut accumulator = Accumulator::new();
    let mut page_no = 1usize;

    loop {
        let snapshot = extract_snapshot(session)?;
        let page_rows = snapshot.rows.len();
        accumulator.absorb(&snapshot);
        log::info!("Collected {} rows from page {} ({} total)", page_rows, page_no, accumulator.len());

        if !click_next_page(session) {
            break;
        }
        page_no += 1;
    }

    log::info!("Done. Total rows collected: {}", accumulator.len());
    Ok(accumulator.into_records())
}

/// Read the table as currently rendered
pub fn extract_snapshot(session: &BrowserSession) -> Result<TableSnapshot> {
    session.evaluate_json::<TableSnapshot>(EXTRACT_TABLE_JS)
}

/// Tracks consecutive scroll cycles that produced no row growth
#[derive(Debug, Default)]
struct IdleCounter {
    last: Option<u64>,
    idle: u32,
}

impl IdleCounter {
    fn new() -> Self {
        Self::default()
    }

    /// Record an observed row count. Returns true once the count has been
    /// unchanged for [`MAX_IDLE_SCROLL_CYCLES`] consecutive observations.
    fn observe(&mut self, count: u64) -> bool {
        self.idle = if self.last == Some(count) { self.idle + 1 } else { 0 };
        self.last = Some(count);
        self.idle >= MAX_IDLE_SCROLL_CYCLES
    }
}

/// Repeatedly scroll to the bottom until the row count stops growing for
/// [`MAX_IDLE_SCROLL_CYCLES`] consecutive cycles
fn scroll_to_exhaustion(session: &BrowserSession) -> Result<()> {
    let mut counter = IdleCounter::new();

    loop {
        let current = body_row_count(session)?;
        if counter.observe(current) {
            log::debug!("Infinite scroll exhausted at {} rows", current);
            return Ok(());
        }

        if session.evaluate(SCROLL_TO_BOTTOM_JS).is_err() {
            log::debug!("Scroll script failed, treating as idle cycle");
        }
        std::thread::sleep(Duration::from_millis(SCROLL_WAIT_MS));
    }
}

fn body_row_count(session: &BrowserSession) -> Result<u64> {
    let value = session.evaluate(ROW_COUNT_JS)?;
    Ok(value.and_then(|v| v.as_u64()).unwrap_or(0))
}

/// Try each "next page" candidate in order, skipping disabled controls.
/// Returns false when no candidate can be clicked, which ends the harvest.
fn click_next_page(session: &BrowserSession) -> bool {
    for candidate in selectors::NEXT_PAGE {
        let Some(element) = candidate.find(session.tab()) else {
            continue;
        };

        if locator::is_disabled(&element) {
            log::debug!("Next-page candidate {} is disabled, skipping", candidate.as_str());
            continue;
        }

        if element.click().is_err() {
            continue;
        }

        session.settle();
        std::thread::sleep(Duration::from_millis(NEXT_PAGE_GRACE_MS));
        return true;
    }

    false
}
