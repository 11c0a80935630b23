//! Ordered-fallback element location.
//!
//! A logical UI control is described by a prioritized slice of [`Locator`]
//! candidates. Resolution walks the slice in order, giving each candidate a
//! uniform short-circuit timeout; the first one that matches wins. This
//! replaces ad-hoc per-call exception catching with one explicit mechanism.

use headless_chrome::{Element, Tab};
use std::time::{Duration, Instant};

/// How often a pending candidate is re-probed while its timeout runs down
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// One way of locating a logical UI element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// CSS selector
    Css(&'static str),

    /// XPath expression (used where text or role-like matching is needed,
    /// which CSS cannot express)
    XPath(&'static str),
}

impl Locator {
    /// The raw selector string, for log messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Locator::Css(s) => s,
            Locator::XPath(s) => s,
        }
    }

    /// Probe for the element once, without waiting
    pub fn find<'a>(&self, tab: &'a Tab) -> Option<Element<'a>> {
        match self {
            Locator::Css(s) => tab.find_element(s).ok(),
            Locator::XPath(s) => tab.find_element_by_xpath(s).ok(),
        }
    }
}

/// Resolve the first matching candidate, giving each one up to
/// `per_candidate` before moving on to the next
pub fn resolve_first<'a>(tab: &'a Tab, candidates: &[Locator], per_candidate: Duration) -> Option<Element<'a>> {
    for candidate in candidates {
        let deadline = Instant::now() + per_candidate;
        loop {
            if let Some(element) = candidate.find(tab) {
                log::debug!("Resolved candidate {}", candidate.as_str());
                return Some(element);
            }
            if Instant::now() >= deadline {
                break;
            }
            std::thread::sleep(POLL_INTERVAL);
        }
        log::debug!("Candidate {} did not resolve, trying next", candidate.as_str());
    }

    None
}

/// Fill the first resolving candidate with `value`. Returns false when the
/// whole list is exhausted or typing fails.
pub fn try_fill(tab: &Tab, candidates: &[Locator], value: &str, per_candidate: Duration) -> bool {
    match resolve_first(tab, candidates, per_candidate) {
        Some(element) => {
            // Focus first so typing lands in the field
            let _ = element.click();
            element.type_into(value).is_ok()
        }
        None => false,
    }
}

/// Click the first resolving candidate. Returns false when the whole list
/// is exhausted or the click fails.
pub fn try_click(tab: &Tab, candidates: &[Locator], per_candidate: Duration) -> bool {
    match resolve_first(tab, candidates, per_candidate) {
        Some(element) => element.click().is_ok(),
        None => false,
    }
}

/// Whether an element carries a `disabled` (or `aria-disabled="true"`)
/// attribute. Best effort: a failed attribute read counts as enabled.
pub fn is_disabled(element: &Element<'_>) -> bool {
    let Ok(Some(attributes)) = element.get_attributes() else {
        return false;
    };

    // Attributes come back as a flat [name, value, name, value, ...] list
    attributes
        .chunks_exact(2)
        .any(|pair| pair[0] == "disabled" || (pair[0] == "aria-disabled" && pair[1] == "true"))
}
