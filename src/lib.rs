//! # iden-harvest
//!
//! Automation for the IdenHQ hiring challenge via Chrome DevTools Protocol
//! (CDP): authenticate (reusing a persisted session where possible), click
//! through the fixed menu path that reveals the hidden product table,
//! harvest every row across infinite scroll and pagination with
//! de-duplication, write the result as `{count, products}` JSON, and
//! optionally submit a value on the "Submit Script" page.
//!
//! ## CLI
//!
//! ```bash
//! export IDEN_USERNAME=you@example.com
//! export IDEN_PASSWORD=secret
//! cargo run -- --output products.json
//!
//! # Watch the browser while debugging
//! cargo run -- --headed
//! ```
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use iden_harvest::{Credentials, RunConfig, Timeouts, runner};
//!
//! # fn main() -> iden_harvest::Result<()> {
//! let config = RunConfig {
//!     base_url: iden_harvest::config::DEFAULT_BASE_URL.to_string(),
//!     credentials: Credentials::resolve(None, None)?,
//!     session_state: "storage/session_state.json".into(),
//!     output: "products.json".into(),
//!     headless: true,
//!     chrome_path: None,
//!     submit_value: None,
//!     timeouts: Timeouts::default(),
//! };
//! runner::run(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: browser session management and launch configuration
//! - [`config`]: run configuration, credentials, timeout tiers
//! - [`locator`]: ordered-fallback element location
//! - [`selectors`]: the candidate selector lists for every UI control
//! - [`auth`]: login detection and the login flow
//! - [`nav`]: the fixed click path revealing the product table
//! - [`harvest`]: scroll/pagination harvesting and the pure table core
//! - [`output`]: the `{count, products}` JSON document
//! - [`submit`]: the optional "Submit Script" form
//! - [`runner`]: the linear pipeline gluing the phases together

pub mod auth;
pub mod browser;
pub mod config;
pub mod error;
pub mod harvest;
pub mod locator;
pub mod nav;
pub mod output;
pub mod runner;
pub mod selectors;
pub mod submit;

pub use browser::{BrowserSession, LaunchOptions};
pub use config::{Credentials, RunConfig, Timeouts};
pub use error::{HarvestError, Result};
pub use harvest::{Record, TableSnapshot};
pub use output::HarvestReport;
