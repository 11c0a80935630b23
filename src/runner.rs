//! The linear pipeline: one run from launch to written output.
//!
//! Session bootstrap → login if needed → navigate the hidden path →
//! harvest → write JSON → optional submission. Sequential and blocking
//! throughout; the first fatal error aborts the run.

use crate::browser::{BrowserSession, LaunchOptions};
use crate::config::RunConfig;
use crate::error::Result;
use crate::output::HarvestReport;
use crate::{auth, harvest, nav, output, submit};

/// Execute one full run against the configured target
pub fn run(config: &RunConfig) -> Result<()> {
    let options = LaunchOptions::new()
        .headless(config.headless)
        .chrome_path(config.chrome_path.clone());

    let session = BrowserSession::launch(options, config.timeouts.clone())?;

    if config.session_state.exists() {
        // A stale or corrupt blob is not fatal, the login flow covers it
        if let Err(e) = session.load_session_state(&config.session_state) {
            log::warn!("Ignoring unusable session state: {}", e);
        }
    }

    log::info!("Opening {}", config.base_url);
    session.goto(&config.base_url)?;
    session.settle();

    auth::login_if_needed(&session, &config.credentials)?;
    session.save_session_state(&config.session_state)?;

    nav::open_product_table(&session)?;
    let records = harvest::harvest_full_table(&session)?;

    let report = HarvestReport::new(records);
    output::write_report(&config.output, &report)?;

    if let Some(value) = &config.submit_value {
        submit::submit_value(&session, value)?;
        log::info!("Submitted value: {}", value);
    }

    // Persist again so cookies refreshed during the run survive it
    session.save_session_state(&config.session_state)?;
    session.close()?;

    log::info!("Done");
    Ok(())
}
