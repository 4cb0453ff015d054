//! Scroll-to-exhaustion loading of the comment list.
//!
//! LinkedIn injects comments lazily as the viewport approaches the bottom of
//! the page; there is no "give me all comments" hook. Exhaustion is detected
//! empirically: scroll, let the page settle, re-measure the document height,
//! and stop once two consecutive measurements are equal.

use std::time::Duration;

use crate::error::ScrapeError;

/// Marker whose presence means the comment section finished loading.
pub const COMMENTS_LIST_SELECTOR: &str = "div.comments-comments-list";

/// The surface the loading loop drives. Implemented by the live browser
/// session; tests substitute a fake so the loop runs without Chrome.
pub trait ScrollPage {
    fn scroll_to_bottom(&self) -> Result<(), ScrapeError>;
    fn content_height(&self) -> Result<u64, ScrapeError>;
    fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), ScrapeError>;
}

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Grace period after navigating to the post, before the first measure.
    pub initial_settle: Duration,
    /// Wait after each scroll for asynchronous content injection.
    pub settle_delay: Duration,
    /// Bounded wait for [`COMMENTS_LIST_SELECTOR`] once the height is stable.
    pub marker_timeout: Duration,
    /// Upper bound on growth cycles. A page whose height keeps changing due
    /// to unrelated dynamic content would otherwise never reach a fixed
    /// point. 0 disables the cap.
    pub max_scroll_cycles: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            initial_settle: Duration::from_secs(5),
            settle_delay: Duration::from_secs(3),
            marker_timeout: Duration::from_secs(20),
            max_scroll_cycles: 50,
        }
    }
}

/// Scroll until the document height stops growing, then wait for the
/// comments container to be present.
///
/// Returns the number of growth cycles observed (cycles whose height
/// measurement exceeded the previous one). If the comments container never
/// appears within `marker_timeout`, the run is aborted with a timeout; there
/// is no partial-load fallback.
pub fn load_all_comments(
    page: &impl ScrollPage,
    config: &LoaderConfig,
) -> Result<usize, ScrapeError> {
    std::thread::sleep(config.initial_settle);

    let mut last_height = page.content_height()?;
    let mut growth_cycles = 0usize;

    loop {
        if config.max_scroll_cycles != 0 && growth_cycles >= config.max_scroll_cycles {
            log::warn!(
                "Page height still changing after {} scroll cycles; proceeding with the comments loaded so far",
                config.max_scroll_cycles
            );
            break;
        }

        page.scroll_to_bottom()?;
        std::thread::sleep(config.settle_delay);

        let new_height = page.content_height()?;
        if new_height == last_height {
            break;
        }
        last_height = new_height;
        growth_cycles += 1;
    }

    page.wait_for_selector(COMMENTS_LIST_SELECTOR, config.marker_timeout)?;
    Ok(growth_cycles)
}
