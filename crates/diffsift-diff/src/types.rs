//! Type definitions for diff cleaning

use serde::Serialize;

/// Marker text git emits after the last line of a file without a trailing newline
pub const NO_NEWLINE_MARKER: &str = "No newline at end of file";

/// Classification of a single unified diff line by its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    FileHeader,
    Index,
    OldFile,
    NewFile,
    HunkHeader,
    Context,
    Removal,
    Addition,
    NoNewlineMarker,
    OtherMarker,
    Unknown,
}

impl DiffLineKind {
    /// Classify a line. Header prefixes win over `-`/`+`, so `--- a/x` is
    /// an old-file marker rather than a removal.
    pub fn classify(line: &str) -> Self {
        if line.starts_with("diff ") {
            DiffLineKind::FileHeader
        } else if line.starts_with("index ") {
            DiffLineKind::Index
        } else if line.starts_with("--- ") {
            DiffLineKind::OldFile
        } else if line.starts_with("+++ ") {
            DiffLineKind::NewFile
        } else if line.starts_with("@@") {
            DiffLineKind::HunkHeader
        } else if line.starts_with(' ') {
            DiffLineKind::Context
        } else if line.starts_with('-') {
            DiffLineKind::Removal
        } else if line.starts_with('+') {
            DiffLineKind::Addition
        } else if line.starts_with('\\') {
            if line.contains(NO_NEWLINE_MARKER) {
                DiffLineKind::NoNewlineMarker
            } else {
                DiffLineKind::OtherMarker
            }
        } else {
            DiffLineKind::Unknown
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(
            self,
            DiffLineKind::FileHeader
                | DiffLineKind::Index
                | DiffLineKind::OldFile
                | DiffLineKind::NewFile
                | DiffLineKind::HunkHeader
        )
    }

    pub fn is_change(&self) -> bool {
        matches!(self, DiffLineKind::Removal | DiffLineKind::Addition)
    }
}

/// Strip the one-character diff marker from a line
pub fn line_content(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.as_str()
}

/// Type of change a file section of a git diff describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
    Renamed,
}

impl ChangeType {
    pub fn as_str(&self) -> &str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Deleted => "deleted",
            ChangeType::Modified => "modified",
            ChangeType::Renamed => "renamed",
        }
    }
}

/// One `diff --git` section of a multi-file diff
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub old_path: Option<String>,
    pub new_path: Option<String>,
    pub change_type: ChangeType,
    /// Every line of the section, including its `diff --git` header
    pub lines: Vec<String>,
}

impl FileDiff {
    pub fn path(&self) -> &str {
        self.new_path
            .as_deref()
            .or(self.old_path.as_deref())
            .unwrap_or("unknown")
    }

    pub fn has_hunks(&self) -> bool {
        self.lines
            .iter()
            .any(|line| DiffLineKind::classify(line) == DiffLineKind::HunkHeader)
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Why a cleaning run produced the output it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanOutcome {
    /// Input was empty or whitespace only
    Empty,
    /// Every change reduced to a line-ending or trailing-whitespace difference
    LineEndingOnly,
    /// Filtering left no additions or removals inside any hunk
    NoMeaningfulContent,
    /// Real changes remain
    Cleaned,
}

impl CleanOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            CleanOutcome::Empty => "empty",
            CleanOutcome::LineEndingOnly => "line_ending_only",
            CleanOutcome::NoMeaningfulContent => "no_meaningful_content",
            CleanOutcome::Cleaned => "cleaned",
        }
    }
}

/// Summary of a single cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub outcome: CleanOutcome,
    pub input_lines: usize,
    pub output_lines: usize,
    /// Change lines removed by the line-ending filter
    pub dropped_lines: usize,
    /// Removal/addition pairs demoted to context lines
    pub collapsed_pairs: usize,
    pub cleaned: String,
}

/// Per-file entry of a per-file cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub change_type: ChangeType,
    pub outcome: CleanOutcome,
    pub kept: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headers_before_changes() {
        assert_eq!(
            DiffLineKind::classify("diff --git a/x b/x"),
            DiffLineKind::FileHeader
        );
        assert_eq!(
            DiffLineKind::classify("index 123..456 100644"),
            DiffLineKind::Index
        );
        assert_eq!(DiffLineKind::classify("--- a/x"), DiffLineKind::OldFile);
        assert_eq!(DiffLineKind::classify("+++ b/x"), DiffLineKind::NewFile);
        assert_eq!(
            DiffLineKind::classify("@@ -1,2 +1,2 @@ fn main()"),
            DiffLineKind::HunkHeader
        );
    }

    #[test]
    fn test_classify_body_lines() {
        assert_eq!(DiffLineKind::classify(" ctx"), DiffLineKind::Context);
        assert_eq!(DiffLineKind::classify("-old"), DiffLineKind::Removal);
        assert_eq!(DiffLineKind::classify("-"), DiffLineKind::Removal);
        assert_eq!(DiffLineKind::classify("+new"), DiffLineKind::Addition);
        assert_eq!(DiffLineKind::classify("---x"), DiffLineKind::Removal);
        assert_eq!(
            DiffLineKind::classify("\\ No newline at end of file"),
            DiffLineKind::NoNewlineMarker
        );
        assert_eq!(
            DiffLineKind::classify("\\ something else"),
            DiffLineKind::OtherMarker
        );
        assert_eq!(DiffLineKind::classify(""), DiffLineKind::Unknown);
        assert_eq!(
            DiffLineKind::classify("similarity index 100%"),
            DiffLineKind::Unknown
        );
    }

    #[test]
    fn test_line_content_strips_marker() {
        assert_eq!(line_content("-  x  "), "  x  ");
        assert_eq!(line_content("+"), "");
        assert_eq!(line_content(""), "");
    }

    #[test]
    fn test_change_type_strings() {
        assert_eq!(ChangeType::Added.as_str(), "added");
        assert_eq!(ChangeType::Deleted.as_str(), "deleted");
        assert_eq!(ChangeType::Modified.as_str(), "modified");
        assert_eq!(ChangeType::Renamed.as_str(), "renamed");
    }

    #[test]
    fn test_file_diff_path_prefers_new() {
        let file = FileDiff {
            old_path: Some("old.txt".to_string()),
            new_path: Some("new.txt".to_string()),
            change_type: ChangeType::Renamed,
            lines: vec!["diff --git a/old.txt b/new.txt".to_string()],
        };
        assert_eq!(file.path(), "new.txt");
        assert!(!file.has_hunks());
    }
}
