//! Run configuration: target, credentials, paths and timeouts.
//!
//! Everything that used to be ambient state (env lookups, module-level
//! timeout constants) is collected here into immutable structs that get
//! passed into each phase explicitly.

use crate::error::{HarvestError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable consulted when `--username` is absent
pub const USERNAME_ENV: &str = "IDEN_USERNAME";

/// Environment variable consulted when `--password` is absent
pub const PASSWORD_ENV: &str = "IDEN_PASSWORD";

/// Default challenge URL
pub const DEFAULT_BASE_URL: &str = "https://hiring.idenhq.com/challenge";

/// Default session-state file path
pub const DEFAULT_SESSION_STATE: &str = "storage/session_state.json";

/// Default output file path
pub const DEFAULT_OUTPUT: &str = "products.json";

/// Default timeout for a single element to appear
pub const DEFAULT_ELEMENT_TIMEOUT_MS: u64 = 15_000;

/// Timeout for page navigations
pub const NAV_TIMEOUT_MS: u64 = 20_000;

/// Short timeout given to each candidate in an ordered-fallback list
pub const CANDIDATE_TIMEOUT_MS: u64 = 2_000;

/// Delay after a navigation before the page is considered settled.
/// CDP has no direct network-idle signal, so a fixed quiet period stands in.
pub const SETTLE_DELAY_MS: u64 = 500;

/// Login username and password, from flags or environment
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Resolve credentials: explicit values win, otherwise fall back to
    /// `IDEN_USERNAME` / `IDEN_PASSWORD`. Missing either is a fatal error.
    pub fn resolve(username: Option<String>, password: Option<String>) -> Result<Self> {
        let username = username.or_else(|| non_empty_env(USERNAME_ENV));
        let password = password.or_else(|| non_empty_env(PASSWORD_ENV));

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(HarvestError::MissingCredentials {
                username_var: USERNAME_ENV,
                password_var: PASSWORD_ENV,
            }),
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// The two timeout tiers used throughout the run, plus the short
/// per-candidate timeout for fallback selector lists
#[derive(Debug, Clone)]
pub struct Timeouts {
    /// Wait for a single required element
    pub element: Duration,

    /// Wait for a page navigation to complete
    pub navigation: Duration,

    /// Wait given to each candidate selector before trying the next
    pub candidate: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            element: Duration::from_millis(DEFAULT_ELEMENT_TIMEOUT_MS),
            navigation: Duration::from_millis(NAV_TIMEOUT_MS),
            candidate: Duration::from_millis(CANDIDATE_TIMEOUT_MS),
        }
    }
}

impl Timeouts {
    /// Timeouts with a custom element timeout, keeping the other tiers
    pub fn with_element_ms(element_ms: u64) -> Self {
        Self { element: Duration::from_millis(element_ms), ..Self::default() }
    }
}

/// Immutable configuration for one full run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Challenge URL to open
    pub base_url: String,

    /// Login credentials
    pub credentials: Credentials,

    /// Path of the persisted session-state blob
    pub session_state: PathBuf,

    /// Path of the output JSON document
    pub output: PathBuf,

    /// Run the browser without a visible window
    pub headless: bool,

    /// Custom Chrome/Chromium executable, if any
    pub chrome_path: Option<PathBuf>,

    /// Value to submit on the "Submit Script" page, if any
    pub submit_value: Option<String>,

    /// Timeout tiers
    pub timeouts: Timeouts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_credentials() {
        let creds = Credentials::resolve(Some("user".into()), Some("pass".into())).unwrap();
        assert_eq!(creds.username, "user");
        assert_eq!(creds.password, "pass");
    }

    #[test]
    fn test_resolve_missing_password_is_fatal() {
        // Clear the env fallback so the test is hermetic either way
        unsafe { std::env::remove_var(PASSWORD_ENV) };
        let result = Credentials::resolve(Some("user".into()), None);
        assert!(matches!(result, Err(HarvestError::MissingCredentials { .. })));
    }

    #[test]
    fn test_default_timeouts() {
        let timeouts = Timeouts::default();
        assert_eq!(timeouts.element, Duration::from_millis(15_000));
        assert_eq!(timeouts.navigation, Duration::from_millis(20_000));
        assert_eq!(timeouts.candidate, Duration::from_millis(2_000));
    }

    #[test]
    fn test_with_element_ms_keeps_other_tiers() {
        let timeouts = Timeouts::with_element_ms(5_000);
        assert_eq!(timeouts.element, Duration::from_millis(5_000));
        assert_eq!(timeouts.navigation, Duration::from_millis(NAV_TIMEOUT_MS));
    }
}
