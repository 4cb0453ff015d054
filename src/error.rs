use thiserror::Error;

/// Errors that can occur during a scrape run.
///
/// Per-comment extraction failures are deliberately not represented here:
/// they are collected as diagnostics in the extraction report and never
/// abort the run. Everything below is fatal.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Timed out waiting for: {0}")]
    Timeout(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}
