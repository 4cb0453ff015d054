//! Extraction of comment records from a fully-loaded page snapshot.
//!
//! Best-effort with per-item isolation: a comment item missing any required
//! sub-element is dropped with a diagnostic, never emitted partially, and
//! never aborts the rest of the batch.

use scraper::{ElementRef, Html, Selector};

use crate::models::CommentRecord;

const COMMENT_ITEM: &str = "article.comments-comment-item";
const ACTOR_LINK: &str = "a.comments-post-meta__actor-link";
const META_BLOCK: &str = "div.comments-post-meta";
const HEADLINE: &str = "span.comments-post-meta__headline";
const MAIN_CONTENT: &str = "span.comments-comment-item__main-content";

/// Outcome of one extraction pass: records in document order, plus one
/// diagnostic per skipped item.
#[derive(Debug)]
pub struct ExtractionReport {
    pub records: Vec<CommentRecord>,
    pub failures: Vec<String>,
}

/// Extract all comment records from rendered page HTML.
///
/// Never fails as a whole; malformed items end up in
/// [`ExtractionReport::failures`].
pub fn extract_comments(html: &str) -> ExtractionReport {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse(COMMENT_ITEM).unwrap();

    let mut records = Vec::new();
    let mut failures = Vec::new();

    for (index, item) in document.select(&item_selector).enumerate() {
        match extract_one(item) {
            Ok(record) => records.push(record),
            Err(reason) => failures.push(format!("comment item {}: {}", index + 1, reason)),
        }
    }

    ExtractionReport { records, failures }
}

fn extract_one(item: ElementRef) -> Result<CommentRecord, String> {
    let actor_link = select_first(item, ACTOR_LINK)?;
    let profile_url = actor_link
        .value()
        .attr("href")
        .ok_or_else(|| format!("missing href on {}", ACTOR_LINK))?
        .to_string();

    // The meta block text carries the display name followed by a UI label
    // starting with "View" ("View X's profile"). Splitting on that literal
    // is brittle and locale-specific, but it is the known working behavior.
    let meta = select_first(item, META_BLOCK)?;
    let full_text = collect_text(meta);
    let name = full_text
        .split("View")
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    let position = collect_text(select_first(item, HEADLINE)?);
    let comment_text = collect_text(select_first(item, MAIN_CONTENT)?);

    Ok(CommentRecord {
        name,
        profile_url,
        position,
        comment_text,
    })
}

fn select_first<'a>(item: ElementRef<'a>, selector: &str) -> Result<ElementRef<'a>, String> {
    let parsed = Selector::parse(selector).unwrap();
    item.select(&parsed)
        .next()
        .ok_or_else(|| format!("missing {}", selector))
}

fn collect_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
