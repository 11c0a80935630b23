//! Optional final step: submit a value through the "Submit Script" page.

use crate::browser::BrowserSession;
use crate::error::{HarvestError, Result};
use crate::{locator, selectors};

/// Open the "Submit Script" page (directly by link, or via the menu),
/// fill the free-text field and submit
pub fn submit_value(session: &BrowserSession, value: &str) -> Result<()> {
    log::info!("Navigating to 'Submit Script' page");

    let timeouts = session.timeouts().clone();

    if !locator::try_click(session.tab(), selectors::SUBMIT_SCRIPT_LINK, timeouts.candidate) {
        // Fallback route: open the menu first, then the link
        let via_menu = locator::try_click(session.tab(), selectors::MENU_BUTTON, timeouts.candidate)
            && locator::try_click(session.tab(), selectors::SUBMIT_SCRIPT_LINK, timeouts.element);
        if !via_menu {
            return Err(HarvestError::ElementNotFound(
                "'Submit Script' page link, update the navigation selectors".to_string(),
            ));
        }
    }

    session.settle();

    if !locator::try_fill(session.tab(), selectors::SUBMIT_VALUE_FIELDS, value, timeouts.candidate) {
        return Err(HarvestError::ElementNotFound(
            "value field on the 'Submit Script' page".to_string(),
        ));
    }

    if !locator::try_click(session.tab(), selectors::SUBMIT_FORM_BUTTONS, timeouts.candidate) {
        return Err(HarvestError::ElementNotFound(
            "submit button on the 'Submit Script' page".to_string(),
        ));
    }

    session.settle();
    log::info!("Submission attempted, check the UI for confirmation");
    Ok(())
}
