//! CSV export and console reporting for a finished run.

use std::path::Path;

use crate::error::ScrapeError;
use crate::models::CommentRecord;

/// Fixed, working-directory-relative output file.
pub const OUTPUT_FILE: &str = "linkedin_comments.csv";

/// Write the records to `path`: one header row, then one row per record,
/// in the column order defined on [`CommentRecord`].
///
/// Callers must guarantee a non-empty slice; see [`finish_run`] for the
/// guarded entry point.
pub fn save_to_csv(records: &[CommentRecord], path: &Path) -> Result<(), ScrapeError> {
    debug_assert!(!records.is_empty());

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Conclude a run: export to CSV when there is at least one record, and
/// return the console text describing the outcome. An empty record list
/// never touches the filesystem.
pub fn finish_run(records: &[CommentRecord], path: &Path) -> Result<String, ScrapeError> {
    if records.is_empty() {
        return Ok("No comments were found.".to_string());
    }

    save_to_csv(records, path)?;
    log::info!("Wrote {} comments to {}", records.len(), path.display());

    let mut out = format!("Comments have been saved to '{}'.\n", path.display());
    out.push_str(&render_summary(records));
    Ok(out)
}

/// Numbered human-readable listing of every record.
pub fn render_summary(records: &[CommentRecord]) -> String {
    let mut out = format!("Scraped comments ({}):\n", records.len());
    for (index, record) in records.iter().enumerate() {
        out.push_str(&format!("\n{}. --- Comment Details ---\n", index + 1));
        out.push_str(&format!("Name: {}\n", record.name));
        out.push_str(&format!("LinkedIn URL: {}\n", record.profile_url));
        out.push_str(&format!("Position: {}\n", record.position));
        out.push_str(&format!("Comment: {}\n", record.comment_text));
    }
    out
}
