//! Login detection and the login flow itself.

use crate::browser::BrowserSession;
use crate::config::Credentials;
use crate::error::{HarvestError, Result};
use crate::{locator, selectors};
use std::time::Duration;

/// Short probe window for the authenticated-only marker; kept well below
/// the element timeout so a logged-out page fails the probe quickly
const MARKER_PROBE_MS: u64 = 1_500;

/// Heuristic: does the page show authenticated-only UI?
pub fn is_authenticated(session: &BrowserSession) -> bool {
    locator::resolve_first(
        session.tab(),
        selectors::AUTH_MARKERS,
        Duration::from_millis(MARKER_PROBE_MS),
    )
    .is_some()
}

/// Log in through the form unless the session already carries an
/// authenticated state
pub fn login_if_needed(session: &BrowserSession, credentials: &Credentials) -> Result<()> {
    if is_authenticated(session) {
        log::info!("Session looks active, skipping login");
        return Ok(());
    }

    log::info!("No active session detected, attempting login");

    // Some layouts hide the form behind a login link/button; clicking one
    // is best effort, its absence just means the form is already shown
    if locator::try_click(session.tab(), selectors::LOGIN_OPENERS, Duration::ZERO) {
        session.settle();
    }

    let per_candidate = session.timeouts().candidate;

    if !locator::try_fill(session.tab(), selectors::USERNAME_FIELDS, &credentials.username, per_candidate) {
        return Err(HarvestError::AuthenticationFailed(
            "could not locate a username field, update the selector list".to_string(),
        ));
    }

    if !locator::try_fill(session.tab(), selectors::PASSWORD_FIELDS, &credentials.password, per_candidate) {
        return Err(HarvestError::AuthenticationFailed(
            "could not locate a password field, update the selector list".to_string(),
        ));
    }

    if !locator::try_click(session.tab(), selectors::LOGIN_SUBMIT_BUTTONS, per_candidate) {
        return Err(HarvestError::AuthenticationFailed(
            "could not find a login submit button".to_string(),
        ));
    }

    session.settle();

    if !is_authenticated(session) {
        return Err(HarvestError::AuthenticationFailed(
            "not authenticated after submitting the login form".to_string(),
        ));
    }

    log::info!("Login successful");
    Ok(())
}
