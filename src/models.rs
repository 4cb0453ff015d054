use serde::Serialize;

/// One extracted comment. All four fields are plain text; a comment item
/// missing any of them is skipped entirely rather than emitted partially.
///
/// The serde renames define the canonical CSV column order and header names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "LinkedIn URL")]
    pub profile_url: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Comment Text")]
    pub comment_text: String,
}
