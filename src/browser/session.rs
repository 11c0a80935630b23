use crate::{browser::config::LaunchOptions,
            config::{SETTLE_DELAY_MS, Timeouts},
            error::{HarvestError, Result}};
use headless_chrome::protocol::cdp::Network::CookieParam;
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, path::Path, sync::Arc, time::Duration};

/// Browser session owning a Chrome/Chromium instance and the single page
/// the whole run drives. All actions are sequential and blocking.
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The one tab the pipeline operates on
    tab: Arc<Tab>,

    /// Timeout tiers for element waits and navigations
    timeouts: Timeouts,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions, timeouts: Timeouts) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // A full harvest can sit on one page for a while; keep the browser's
        // idle timeout well above anything a paginated table will need
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).map_err(|e| HarvestError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| HarvestError::LaunchFailed(format!("Failed to create tab: {}", e)))?;
        tab.set_default_timeout(timeouts.element);

        Ok(Self { browser, tab, timeouts })
    }

    /// The page this run operates on
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Timeout tiers in effect for this session
    pub fn timeouts(&self) -> &Timeouts {
        &self.timeouts
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate the page to a URL and wait for the navigation to complete
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| HarvestError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| HarvestError::NavigationFailed(format!("Navigation timeout for {}: {}", url, e)))?;

        Ok(())
    }

    /// Let the page settle after a click or navigation.
    ///
    /// CDP exposes no network-idle signal, so this waits for any pending
    /// navigation and then a fixed quiet period. Best effort: a page that
    /// never navigated is not an error here.
    pub fn settle(&self) {
        let _ = self.tab.wait_until_navigated();
        std::thread::sleep(Duration::from_millis(SETTLE_DELAY_MS));
    }

    /// Evaluate a JavaScript expression on the page and return its value
    pub fn evaluate(&self, expression: &str) -> Result<Option<serde_json::Value>> {
        let result = self
            .tab
            .evaluate(expression, false)
            .map_err(|e| HarvestError::EvaluationFailed(e.to_string()))?;

        Ok(result.value)
    }

    /// Evaluate a JavaScript expression that returns a JSON string, and
    /// deserialize that string into `T`
    pub fn evaluate_json<T: serde::de::DeserializeOwned>(&self, expression: &str) -> Result<T> {
        let value = self
            .evaluate(expression)?
            .ok_or_else(|| HarvestError::EvaluationFailed("No value returned from script".to_string()))?;

        // The script returns a JSON string, so parse the string first
        let json_str: String = serde_json::from_value(value)
            .map_err(|e| HarvestError::EvaluationFailed(format!("Script did not return a string: {}", e)))?;

        serde_json::from_str(&json_str)
            .map_err(|e| HarvestError::EvaluationFailed(format!("Failed to parse script result: {}", e)))
    }

    /// Persist the session-state blob (the context's cookie set) to a file,
    /// creating parent directories as needed. The blob is written verbatim
    /// and never interpreted.
    pub fn save_session_state(&self, path: &Path) -> Result<()> {
        let cookies = self
            .tab
            .get_cookies()
            .map_err(|e| HarvestError::SessionState(format!("Failed to read cookies: {}", e)))?;

        let blob = serde_json::to_string_pretty(&cookies)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, blob)?;

        log::debug!("Saved session state to {}", path.display());
        Ok(())
    }

    /// Load a previously persisted session-state blob and hand it back to
    /// the browser context unchanged
    pub fn load_session_state(&self, path: &Path) -> Result<()> {
        let blob = std::fs::read_to_string(path)?;

        let cookies: Vec<CookieParam> = serde_json::from_str(&blob)
            .map_err(|e| HarvestError::SessionState(format!("Unreadable session state blob: {}", e)))?;

        self.tab
            .set_cookies(cookies)
            .map_err(|e| HarvestError::SessionState(format!("Failed to restore cookies: {}", e)))?;

        log::info!("Restored session state from {}", path.display());
        Ok(())
    }

    /// Close the browser by closing all its tabs
    pub fn close(&self) -> Result<()> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| HarvestError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        for tab in tabs {
            let _ = tab.close(false); // Ignore errors on individual tab closes
        }
        Ok(())
    }
}
