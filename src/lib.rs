// Library interface for linkedin_comment_scraper
// This allows integration tests to exercise the scraper components

pub mod auth;
pub mod browser_client;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod helpers;
pub mod loader;
pub mod models;
