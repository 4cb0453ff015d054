//! Extractor tests against synthetic page snapshots.

use linkedin_comment_scraper::extractor::extract_comments;

fn valid_item(name: &str, url: &str, position: &str, text: &str) -> String {
    format!(
        r#"<article class="comments-comment-item">
            <div class="comments-post-meta">
                <a class="comments-post-meta__actor-link" href="{url}">
                    {name}View {name}&#x27;s profile
                </a>
                <span class="comments-post-meta__headline">{position}</span>
            </div>
            <span class="comments-comment-item__main-content">{text}</span>
        </article>"#
    )
}

fn page(items: &[String]) -> String {
    format!(
        r#"<html><body>
            <div class="comments-comments-list">{}</div>
        </body></html>"#,
        items.join("\n")
    )
}

#[test]
fn extracts_all_fields_from_a_well_formed_item() {
    let html = page(&[valid_item(
        "Ada Lovelace",
        "https://www.linkedin.com/in/ada",
        "Analyst Engine Programmer",
        "Great post!",
    )]);

    let report = extract_comments(&html);
    assert!(report.failures.is_empty());
    assert_eq!(report.records.len(), 1);

    let record = &report.records[0];
    assert_eq!(record.name, "Ada Lovelace");
    assert_eq!(record.profile_url, "https://www.linkedin.com/in/ada");
    assert_eq!(record.position, "Analyst Engine Programmer");
    assert_eq!(record.comment_text, "Great post!");
}

#[test]
fn preserves_document_order() {
    let html = page(&[
        valid_item("First", "https://a", "P1", "one"),
        valid_item("Second", "https://b", "P2", "two"),
        valid_item("Third", "https://c", "P3", "three"),
    ]);

    let report = extract_comments(&html);
    let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

#[test]
fn skips_malformed_items_and_keeps_the_rest() {
    // Three valid items interleaved with two malformed ones.
    let missing_headline = r#"<article class="comments-comment-item">
        <div class="comments-post-meta">
            <a class="comments-post-meta__actor-link" href="https://x">XView</a>
        </div>
        <span class="comments-comment-item__main-content">body</span>
    </article>"#
        .to_string();

    let missing_href = r#"<article class="comments-comment-item">
        <div class="comments-post-meta">
            <a class="comments-post-meta__actor-link">YView</a>
            <span class="comments-post-meta__headline">P</span>
        </div>
        <span class="comments-comment-item__main-content">body</span>
    </article>"#
        .to_string();

    let html = page(&[
        valid_item("One", "https://a", "P1", "t1"),
        missing_headline,
        valid_item("Two", "https://b", "P2", "t2"),
        missing_href,
        valid_item("Three", "https://c", "P3", "t3"),
    ]);

    let report = extract_comments(&html);

    assert_eq!(report.records.len(), 3);
    assert_eq!(report.failures.len(), 2);
    let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["One", "Two", "Three"]);

    // Diagnostics name what was missing
    assert!(report.failures[0].contains("comments-post-meta__headline"));
    assert!(report.failures[1].contains("href"));
}

#[test]
fn missing_body_or_actor_link_drops_the_item() {
    let missing_body = r#"<article class="comments-comment-item">
        <div class="comments-post-meta">
            <a class="comments-post-meta__actor-link" href="https://x">XView</a>
            <span class="comments-post-meta__headline">P</span>
        </div>
    </article>"#
        .to_string();

    let missing_link = r#"<article class="comments-comment-item">
        <div class="comments-post-meta">
            <span class="comments-post-meta__headline">P</span>
        </div>
        <span class="comments-comment-item__main-content">body</span>
    </article>"#
        .to_string();

    let report = extract_comments(&page(&[missing_body, missing_link]));
    assert!(report.records.is_empty());
    assert_eq!(report.failures.len(), 2);
}

#[test]
fn name_heuristic_strips_the_view_profile_label() {
    // Meta text is "<name>View <name>'s profile"; the name is whatever
    // precedes the literal "View", trimmed.
    let html = page(&[valid_item("Grace Hopper", "https://g", "RADM", "hi")]);
    let report = extract_comments(&html);
    assert_eq!(report.records[0].name, "Grace Hopper");
}

#[test]
fn empty_document_yields_nothing() {
    let report = extract_comments("<html><body></body></html>");
    assert!(report.records.is_empty());
    assert!(report.failures.is_empty());
}
