//! Headless Chrome session used for login and page loading.
//!
//! One browser process, one tab, strictly sequential use. Dropping the
//! client shuts the Chrome process down, so the session is released on
//! every exit path, error paths included.

use headless_chrome::{Browser, Element, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ScrapeError;
use crate::helpers::poll_until;
use crate::loader::ScrollPage;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for the headless browser.
#[derive(Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,
    pub disable_images: bool,
    pub user_agent: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            disable_images: true, // Faster loading
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
            ),
        }
    }
}

/// An authenticated-capable browsing session: one Chrome process, one tab.
pub struct BrowserClient {
    tab: Arc<Tab>,
    // Keeps the Chrome process alive for the lifetime of the session.
    _browser: Browser,
}

impl BrowserClient {
    /// Create a session with default configuration.
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_config(BrowserConfig::default())
    }

    /// Create a session with custom configuration.
    pub fn with_config(config: BrowserConfig) -> Result<Self, ScrapeError> {
        // Store owned strings first for lifetime management
        let images_arg = config
            .disable_images
            .then(|| "--blink-settings=imagesEnabled=false".to_string());
        let user_agent_arg = config
            .user_agent
            .as_ref()
            .map(|ua| format!("--user-agent={}", ua));

        let mut args: Vec<&OsStr> = vec![
            OsStr::new("--disable-blink-features=AutomationControlled"),
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--no-sandbox"),
        ];
        if let Some(ref img) = images_arg {
            args.push(OsStr::new(img));
        }
        if let Some(ref ua) = user_agent_arg {
            args.push(OsStr::new(ua));
        }

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .args(args)
            .build()
            .map_err(|e| ScrapeError::Browser(format!("Invalid launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| ScrapeError::Browser(format!("Failed to launch Chrome: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::Browser(format!("Failed to open tab: {}", e)))?;

        Ok(Self { tab, _browser: browser })
    }

    /// Navigate the session tab to a URL and wait for the navigation to
    /// complete.
    pub fn navigate(&self, url: &str) -> Result<(), ScrapeError> {
        log::info!("Navigating to: {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| ScrapeError::Browser(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| ScrapeError::Browser(format!("Navigation timeout for {}: {}", url, e)))?;

        Ok(())
    }

    fn wait_for_element(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<Element<'_>, ScrapeError> {
        poll_until(POLL_INTERVAL, timeout, || {
            self.tab.find_element(selector).ok()
        })
        .ok_or_else(|| ScrapeError::Timeout(format!("element {}", selector)))
    }

    /// Wait for an input matching `selector`, then type `text` into it.
    pub fn type_into(
        &self,
        selector: &str,
        text: &str,
        timeout: Duration,
    ) -> Result<(), ScrapeError> {
        let element = self.wait_for_element(selector, timeout)?;
        element
            .type_into(text)
            .map_err(|e| ScrapeError::Browser(format!("Failed to type into {}: {}", selector, e)))?;
        Ok(())
    }

    /// Wait for an element matching the XPath query, then click it.
    pub fn click_xpath(&self, query: &str, timeout: Duration) -> Result<(), ScrapeError> {
        let element = poll_until(POLL_INTERVAL, timeout, || {
            self.tab.find_element_by_xpath(query).ok()
        })
        .ok_or_else(|| ScrapeError::Timeout(format!("element {}", query)))?;

        element
            .click()
            .map_err(|e| ScrapeError::Browser(format!("Failed to click {}: {}", query, e)))?;
        Ok(())
    }

    /// Wait for the presence of an element matching a CSS selector.
    pub fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), ScrapeError> {
        self.wait_for_element(selector, timeout).map(|_| ())
    }

    /// Measure the current document height.
    pub fn page_height(&self) -> Result<u64, ScrapeError> {
        let result = self
            .tab
            .evaluate("document.body.scrollHeight", false)
            .map_err(|e| ScrapeError::Browser(format!("Failed to measure page height: {}", e)))?;

        result
            .value
            .and_then(|v| v.as_f64())
            .map(|h| h as u64)
            .ok_or_else(|| {
                ScrapeError::Browser("scrollHeight did not evaluate to a number".to_string())
            })
    }

    /// Scroll to the bottom of the page to trigger lazy loading.
    pub fn scroll_to_bottom(&self) -> Result<(), ScrapeError> {
        self.tab
            .evaluate("window.scrollTo(0, document.body.scrollHeight);", false)
            .map_err(|e| ScrapeError::Browser(format!("Scroll failed: {}", e)))?;
        Ok(())
    }

    /// Get the full rendered HTML of the page.
    pub fn get_html(&self) -> Result<String, ScrapeError> {
        self.tab
            .get_content()
            .map_err(|e| ScrapeError::Browser(format!("Failed to extract page HTML: {}", e)))
    }
}

impl ScrollPage for BrowserClient {
    fn scroll_to_bottom(&self) -> Result<(), ScrapeError> {
        BrowserClient::scroll_to_bottom(self)
    }

    fn content_height(&self) -> Result<u64, ScrapeError> {
        self.page_height()
    }

    fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), ScrapeError> {
        BrowserClient::wait_for_selector(self, selector, timeout)
    }
}

impl Drop for BrowserClient {
    fn drop(&mut self) {
        // Chrome shuts down when the Browser handle is dropped.
        log::debug!("Browser session closed");
    }
}
