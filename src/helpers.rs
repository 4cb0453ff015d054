//! Small utilities shared across the scraper:
//! - post URL validation
//! - the bounded polling primitive backing every wait site

use regex::Regex;
use std::time::{Duration, Instant};

/// Check that a URL points at a LinkedIn post.
///
/// Accepts URLs starting with `https://www.linkedin.com/posts/` followed by
/// at least one word or hyphen character. Anything else (feed updates,
/// plain http, other hosts) is rejected before any browser activity.
pub fn validate_url(url: &str) -> bool {
    let pattern = Regex::new(r"^https://www\.linkedin\.com/posts/[\w-]+").unwrap();
    pattern.is_match(url)
}

/// Poll `probe` every `interval` until it yields a value or `max_wait`
/// elapses. The probe runs once immediately, so a zero `max_wait` still
/// gives it one chance.
///
/// Returns `None` on timeout; callers decide how to surface that.
pub fn poll_until<T>(
    interval: Duration,
    max_wait: Duration,
    mut probe: impl FnMut() -> Option<T>,
) -> Option<T> {
    let start = Instant::now();
    loop {
        if let Some(value) = probe() {
            return Some(value);
        }
        if start.elapsed() >= max_wait {
            return None;
        }
        std::thread::sleep(interval);
    }
}
