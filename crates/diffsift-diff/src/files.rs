//! Splitting a multi-file git diff and cleaning each file section on its own

use super::processor::clean_diff_with_report;
use super::types::{ChangeType, CleanOutcome, FileDiff, FileReport};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Extended header lines that change the file itself, not its content
const FILE_METADATA_PREFIXES: &[&str] = &[
    "rename ",
    "copy ",
    "old mode",
    "new mode",
    "new file mode",
    "deleted file mode",
];

static DIFF_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^diff --git a/(.*?) b/(.*?)$").expect("diff header pattern is valid")
});

/// Split git diff content into one [`FileDiff`] per `diff --git` section.
///
/// Lines before the first section header are not part of any file.
pub fn split_file_diffs(diff_content: &str) -> Vec<FileDiff> {
    split_sections(diff_content).1
}

fn split_sections(diff_content: &str) -> (Vec<String>, Vec<FileDiff>) {
    let mut preamble = Vec::new();
    let mut files: Vec<FileDiff> = Vec::new();

    for line in diff_content.split('\n') {
        if line.starts_with("diff --git") {
            files.push(start_file(line));
            continue;
        }

        match files.last_mut() {
            Some(file) => {
                if line.starts_with("new file mode") {
                    file.change_type = ChangeType::Added;
                } else if line.starts_with("deleted file mode") {
                    file.change_type = ChangeType::Deleted;
                } else if line.starts_with("rename from") || line.starts_with("rename to") {
                    file.change_type = ChangeType::Renamed;
                }
                file.lines.push(line.to_string());
            }
            None => preamble.push(line.to_string()),
        }
    }

    (preamble, files)
}

fn start_file(header: &str) -> FileDiff {
    let (old_path, new_path) = match DIFF_HEADER_RE.captures(header.trim_end_matches('\r')) {
        Some(captures) => (
            captures.get(1).map(|m| m.as_str().to_string()),
            captures.get(2).map(|m| m.as_str().to_string()),
        ),
        None => (None, None),
    };

    FileDiff {
        old_path,
        new_path,
        change_type: ChangeType::Modified,
        lines: vec![header.to_string()],
    }
}

/// Header lines of a section up to its first file marker or hunk, when
/// they record a rename, copy or mode change.
fn metadata_header(file: &FileDiff) -> Option<String> {
    let header: Vec<&str> = file
        .lines
        .iter()
        .map(String::as_str)
        .take_while(|line| !line.starts_with("--- ") && !line.starts_with("@@"))
        .collect();
    let changes_file = header.iter().any(|line| {
        FILE_METADATA_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
    });
    changes_file.then(|| header.join("\n"))
}

/// Clean every file section independently and drop the ones left empty.
///
/// Sections without hunks (renames, mode changes, binary files) carry no
/// line content to clean and are kept verbatim. A section whose hunks are
/// all noise keeps its rename/mode header. Input without any `diff --git`
/// header is cleaned as a single section.
pub fn clean_file_diffs(diff_content: &str) -> (String, Vec<FileReport>) {
    let body = diff_content.strip_suffix('\n').unwrap_or(diff_content);
    let (preamble, files) = split_sections(body);

    if files.is_empty() {
        let report = clean_diff_with_report(diff_content);
        let file = FileReport {
            path: "unknown".to_string(),
            change_type: ChangeType::Modified,
            outcome: report.outcome,
            kept: !report.cleaned.is_empty(),
        };
        return (report.cleaned, vec![file]);
    }

    let mut kept = Vec::new();
    let preamble = preamble.join("\n");
    if !preamble.trim().is_empty() {
        kept.push(preamble);
    }

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        let (cleaned, outcome) = if file.has_hunks() {
            let report = clean_diff_with_report(&file.text());
            let cleaned = if report.cleaned.is_empty() {
                metadata_header(file).unwrap_or_default()
            } else {
                report.cleaned
            };
            (cleaned, report.outcome)
        } else {
            (file.text(), CleanOutcome::Cleaned)
        };

        let is_kept = !cleaned.trim().is_empty();
        debug!(
            path = file.path(),
            outcome = outcome.as_str(),
            kept = is_kept,
            "cleaned file section"
        );
        if is_kept {
            kept.push(cleaned);
        }
        reports.push(FileReport {
            path: file.path().to_string(),
            change_type: file.change_type,
            outcome,
            kept: is_kept,
        });
    }

    let mut result = kept.join("\n");
    if !result.is_empty() && diff_content.ends_with('\n') {
        result.push('\n');
    }

    (result, reports)
}
