//! Central place for selector candidate lists so they're easy to tweak if
//! the UI changes. Exact-text XPath stands in for accessible role+name
//! matching, with looser text matches as fallbacks.

use crate::locator::Locator;
use crate::locator::Locator::{Css, XPath};

/// Elements that only render for an authenticated session
pub const AUTH_MARKERS: &[Locator] = &[
    XPath("//button[normalize-space()='Open Options']"),
    XPath("//*[normalize-space(text())='Logout' or normalize-space(text())='Sign out' or normalize-space(text())='Profile' or normalize-space(text())='Account']"),
];

/// Controls that reveal the login form when the page starts logged out
pub const LOGIN_OPENERS: &[Locator] = &[
    XPath("//*[normalize-space(text())='Log in']"),
    XPath("//*[normalize-space(text())='Login']"),
    XPath("//button[normalize-space()='Login']"),
    XPath("//a[contains(normalize-space(), 'Login')]"),
    XPath("//a[contains(normalize-space(), 'Sign in')]"),
    XPath("//*[normalize-space(text())='Sign in']"),
];

/// Login form username/email field
pub const USERNAME_FIELDS: &[Locator] = &[
    Css("input[name='email']"),
    Css("input[name='username']"),
    Css("input[type='email']"),
    Css("input[autocomplete='username']"),
    XPath("//label[contains(., 'Email')]/following::input[1]"),
    XPath("//label[contains(., 'Username')]/following::input[1]"),
];

/// Login form password field
pub const PASSWORD_FIELDS: &[Locator] = &[
    Css("input[name='password']"),
    Css("input[type='password']"),
    Css("input[autocomplete='current-password']"),
    XPath("//label[contains(., 'Password')]/following::input[1]"),
];

/// Login form submit control
pub const LOGIN_SUBMIT_BUTTONS: &[Locator] = &[
    XPath("//button[contains(normalize-space(), 'Sign in')]"),
    XPath("//button[contains(normalize-space(), 'Log in')]"),
    Css("button[type='submit']"),
    Css("input[type='submit']"),
];

/// Step 1 of the hidden path: open the settings/options panel
pub const OPEN_OPTIONS: &[Locator] = &[
    XPath("//button[normalize-space()='Open Options']"),
    XPath("//button[contains(normalize-space(), 'Open Options')]"),
];

/// Step 2: select the Inventory tab
pub const INVENTORY_TAB: &[Locator] = &[
    XPath("//*[@role='tab' and normalize-space()='Inventory']"),
    XPath("//*[normalize-space(text())='Inventory']"),
];

/// Step 3: open the detailed view
pub const ACCESS_DETAILED_VIEW: &[Locator] = &[
    XPath("//button[normalize-space()='Access Detailed View']"),
    XPath("//button[contains(normalize-space(), 'Access Detailed View')]"),
];

/// Step 4: reveal the full product table
pub const SHOW_FULL_TABLE: &[Locator] = &[
    XPath("//button[normalize-space()='Show Full Product Table']"),
    XPath("//button[contains(normalize-space(), 'Show Full Product Table')]"),
];

/// The harvested table itself
pub const TABLE: &[Locator] = &[Css("table")];

/// Pagination "next page" control; disabled matches are skipped in code
pub const NEXT_PAGE: &[Locator] = &[
    XPath("//button[contains(normalize-space(), 'Next')]"),
    XPath("//a[contains(normalize-space(), 'Next')]"),
    Css("[aria-label='Next']"),
    XPath("//*[contains(@class, 'pagination')]//*[normalize-space(text())='Next']"),
];

/// Link to the optional "Submit Script" page
pub const SUBMIT_SCRIPT_LINK: &[Locator] = &[XPath("//a[normalize-space()='Submit Script']")];

/// Menu button used as a fallback route to the "Submit Script" link
pub const MENU_BUTTON: &[Locator] = &[XPath("//button[normalize-space()='Menu']")];

/// Free-text field on the "Submit Script" page
pub const SUBMIT_VALUE_FIELDS: &[Locator] = &[
    Css("input[name='repository']"),
    Css("input[name='repo']"),
    Css("input[placeholder*='GitHub']"),
    XPath("//label[contains(., 'GitHub')]/following::input[1]"),
    XPath("//label[contains(., 'Repository')]/following::input[1]"),
];

/// Submit control on the "Submit Script" page
pub const SUBMIT_FORM_BUTTONS: &[Locator] = &[
    XPath("//button[normalize-space()='Submit']"),
    XPath("//button[contains(normalize-space(), 'Submit')]"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_lists_are_non_empty() {
        for list in [
            AUTH_MARKERS,
            LOGIN_OPENERS,
            USERNAME_FIELDS,
            PASSWORD_FIELDS,
            LOGIN_SUBMIT_BUTTONS,
            OPEN_OPTIONS,
            INVENTORY_TAB,
            ACCESS_DETAILED_VIEW,
            SHOW_FULL_TABLE,
            TABLE,
            NEXT_PAGE,
            SUBMIT_SCRIPT_LINK,
            MENU_BUTTON,
            SUBMIT_VALUE_FIELDS,
            SUBMIT_FORM_BUTTONS,
        ] {
            assert!(!list.is_empty());
        }
    }

    #[test]
    fn test_primary_nav_candidates_match_exact_text() {
        // The first candidate of each nav step is the strict, role-like match
        assert_eq!(OPEN_OPTIONS[0].as_str(), "//button[normalize-space()='Open Options']");
        assert!(INVENTORY_TAB[0].as_str().contains("@role='tab'"));
    }
}
