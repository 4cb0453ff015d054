//! CSV export tests using temp files.

use std::fs;
use std::path::PathBuf;

use linkedin_comment_scraper::export::{finish_run, render_summary, save_to_csv};
use linkedin_comment_scraper::models::CommentRecord;

fn record(name: &str, url: &str, position: &str, text: &str) -> CommentRecord {
    CommentRecord {
        name: name.to_string(),
        profile_url: url.to_string(),
        position: position.to_string(),
        comment_text: text.to_string(),
    }
}

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "linkedin_comments_test_{}_{}.csv",
        tag,
        std::process::id()
    ))
}

#[test]
fn writes_header_plus_one_row_per_record() {
    let records = vec![
        record("A", "https://a", "P1", "one"),
        record("B", "https://b", "P2", "two"),
        record("C", "https://c", "P3", "three"),
    ];
    let path = temp_path("rows");

    save_to_csv(&records, &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), records.len() + 1);
    assert_eq!(lines[0], "Name,LinkedIn URL,Position,Comment Text");

    fs::remove_file(&path).unwrap();
}

#[test]
fn ascii_records_round_trip_through_the_file() {
    let records = vec![
        record("Ada", "https://www.linkedin.com/in/ada", "Programmer", "nice"),
        record("Bob", "https://www.linkedin.com/in/bob", "Engineer", "thanks for sharing"),
    ];
    let path = temp_path("roundtrip");

    save_to_csv(&records, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let read_back: Vec<CommentRecord> = reader
        .records()
        .map(|row| {
            let row = row.unwrap();
            record(&row[0], &row[1], &row[2], &row[3])
        })
        .collect();

    assert_eq!(read_back, records);
    fs::remove_file(&path).unwrap();
}

#[test]
fn fields_with_commas_stay_intact() {
    let records = vec![record(
        "Eve",
        "https://e",
        "Director, Engineering",
        "agreed, well put",
    )];
    let path = temp_path("commas");

    save_to_csv(&records, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[2], "Director, Engineering");
    assert_eq!(&row[3], "agreed, well put");

    fs::remove_file(&path).unwrap();
}

#[test]
fn empty_run_reports_notice_and_never_touches_the_file() {
    let path = temp_path("empty");

    let outcome = finish_run(&[], &path).unwrap();
    assert_eq!(outcome, "No comments were found.");
    assert!(!path.exists());
}

#[test]
fn summary_is_numbered_and_counts_records() {
    let records = vec![
        record("A", "https://a", "P1", "one"),
        record("B", "https://b", "P2", "two"),
    ];

    let summary = render_summary(&records);
    assert!(summary.starts_with("Scraped comments (2):"));
    assert!(summary.contains("1. --- Comment Details ---"));
    assert!(summary.contains("2. --- Comment Details ---"));
    assert!(summary.contains("Name: A"));
    assert!(summary.contains("LinkedIn URL: https://b"));
    assert!(summary.contains("Comment: two"));
}
