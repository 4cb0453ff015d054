use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::browser_client::BrowserConfig;
use crate::loader::LoaderConfig;

/// Optional settings loaded from `config.toml` in the working directory.
/// Every field has a default matching the stock behavior, so the file is
/// only needed to override something (e.g. running Chrome headful to watch
/// a scrape).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserSettings,
    #[serde(default)]
    pub timing: TimingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrowserSettings {
    #[serde(default = "default_true")]
    pub headless: bool,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Disable images in the browser (faster loading)
    #[serde(default = "default_true")]
    pub disable_images: bool,

    /// Override the browser user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimingSettings {
    /// Max wait for login form fields and the post-login marker, seconds
    #[serde(default = "default_element_wait")]
    pub element_wait_secs: u64,

    /// Grace period after opening the post page, seconds
    #[serde(default = "default_initial_settle")]
    pub initial_settle_secs: u64,

    /// Wait after each scroll for lazy content injection, seconds
    #[serde(default = "default_settle_delay")]
    pub settle_delay_secs: u64,

    /// Max wait for the comments container once the page is stable, seconds
    #[serde(default = "default_comments_wait")]
    pub comments_wait_secs: u64,

    /// Upper bound on scroll growth cycles; 0 disables the cap
    #[serde(default = "default_max_scroll_cycles")]
    pub max_scroll_cycles: usize,
}

fn default_true() -> bool {
    true
}
fn default_window_width() -> u32 {
    1920
}
fn default_window_height() -> u32 {
    1080
}
fn default_element_wait() -> u64 {
    10
}
fn default_initial_settle() -> u64 {
    5
}
fn default_settle_delay() -> u64 {
    3
}
fn default_comments_wait() -> u64 {
    20
}
fn default_max_scroll_cycles() -> usize {
    50
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            disable_images: true,
            user_agent: None,
        }
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            element_wait_secs: 10,
            initial_settle_secs: 5,
            settle_delay_secs: 3,
            comments_wait_secs: 20,
            max_scroll_cycles: 50,
        }
    }
}

impl Config {
    /// Load `config.toml` if present and well-formed, otherwise defaults.
    pub fn load() -> Self {
        let path = Path::new("config.toml");
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(cfg) = toml::from_str::<Config>(&content) {
                    return cfg;
                }
            }
        }
        Self::default()
    }

    pub fn browser_config(&self) -> BrowserConfig {
        BrowserConfig {
            headless: self.browser.headless,
            window_width: self.browser.window_width,
            window_height: self.browser.window_height,
            disable_images: self.browser.disable_images,
            user_agent: self
                .browser
                .user_agent
                .clone()
                .or_else(|| BrowserConfig::default().user_agent),
        }
    }

    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            initial_settle: Duration::from_secs(self.timing.initial_settle_secs),
            settle_delay: Duration::from_secs(self.timing.settle_delay_secs),
            marker_timeout: Duration::from_secs(self.timing.comments_wait_secs),
            max_scroll_cycles: self.timing.max_scroll_cycles,
        }
    }

    pub fn element_wait(&self) -> Duration {
        Duration::from_secs(self.timing.element_wait_secs)
    }
}
