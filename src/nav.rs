//! The fixed click path that reveals the hidden product table.
//!
//! Each step is located by an exact-text match first with a looser text
//! fallback. There are no retries beyond the candidate list: a step that
//! cannot be resolved is fatal, because nothing downstream can proceed
//! without it.

use crate::browser::BrowserSession;
use crate::error::{HarvestError, Result};
use crate::locator::{Locator, resolve_first};
use crate::selectors;

/// Click through Open Options → Inventory → Access Detailed View →
/// Show Full Product Table, settling after each step
pub fn open_product_table(session: &BrowserSession) -> Result<()> {
    log::info!("Opening hidden product table path");

    let steps: [(&str, &[Locator]); 4] = [
        ("Open Options", selectors::OPEN_OPTIONS),
        ("Inventory tab", selectors::INVENTORY_TAB),
        ("Access Detailed View", selectors::ACCESS_DETAILED_VIEW),
        ("Show Full Product Table", selectors::SHOW_FULL_TABLE),
    ];

    for (name, candidates) in steps {
        click_step(session, name, candidates)?;
    }

    log::info!("Product table should now be visible");
    Ok(())
}

fn click_step(session: &BrowserSession, name: &str, candidates: &[Locator]) -> Result<()> {
    let element = resolve_first(session.tab(), candidates, session.timeouts().element)
        .ok_or_else(|| HarvestError::ElementNotFound(format!("navigation control '{}'", name)))?;

    element
        .click()
        .map_err(|e| HarvestError::NavigationFailed(format!("failed to click '{}': {}", name, e)))?;

    session.settle();
    log::debug!("Clicked '{}'", name);
    Ok(())
}
