use std::io::{self, Write};
use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

use linkedin_comment_scraper::browser_client::BrowserClient;
use linkedin_comment_scraper::config::Config;
use linkedin_comment_scraper::error::ScrapeError;
use linkedin_comment_scraper::models::CommentRecord;
use linkedin_comment_scraper::{auth, export, extractor, helpers, loader};

fn main() {
    init_logging();

    let config = Config::load();

    let email = prompt("Enter your LinkedIn email: ");
    let password = prompt("Enter your LinkedIn password: ");
    let post_url = prompt("Enter the LinkedIn post URL: ");

    if !helpers::validate_url(&post_url) {
        println!("Invalid LinkedIn post URL. Please ensure the URL is correct and try again.");
        return;
    }

    let records = match scrape_comments(&config, &post_url, &email, &password) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Scrape failed: {}", e);
            std::process::exit(1);
        }
    };

    match export::finish_run(&records, Path::new(export::OUTPUT_FILE)) {
        Ok(outcome) => print!("{}", outcome),
        Err(e) => {
            log::error!("Failed to write {}: {}", export::OUTPUT_FILE, e);
            std::process::exit(1);
        }
    }
}

/// Run the scrape pipeline: login, load the post, extract comments.
///
/// The browser session is dropped on every exit path of this function,
/// which shuts the Chrome process down even when a step fails.
fn scrape_comments(
    config: &Config,
    post_url: &str,
    email: &str,
    password: &str,
) -> Result<Vec<CommentRecord>, ScrapeError> {
    let browser = BrowserClient::with_config(config.browser_config())?;

    auth::login(&browser, email, password, config.element_wait())?;

    browser.navigate(post_url)?;
    let growth_cycles = loader::load_all_comments(&browser, &config.loader_config())?;
    log::info!("Comment list stable after {} growth cycles", growth_cycles);

    let html = browser.get_html()?;
    let report = extractor::extract_comments(&html);
    for failure in &report.failures {
        log::warn!("Failed to parse a comment due to: {}", failure);
    }

    Ok(report.records)
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    io::stdout().flush().expect("Failed to flush stdout");

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input.trim().to_string()
}

fn init_logging() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .unwrap();

    log4rs::init_config(config).unwrap();
}
