//! Whole-diff classification: line-ending-only detection, file identity
//! short-circuit and the meaningful-content check

use super::filter::filter_line_ending_only_changes;
use super::line_ending::{is_line_ending_equivalent, normalize_line_endings};
use super::types::{line_content, DiffLineKind};
use tracing::debug;

/// Whether every change in `unified_diff` is a line-ending or
/// trailing-whitespace difference.
///
/// Pairing is diff-wide and positional: each removal is matched with the
/// first addition not yet matched that follows it. Any removal without a
/// partner, any addition reached before a removal, or any mismatching pair
/// makes the diff a real change. A diff with no changes counts only when it
/// carries a "No newline at end of file" marker.
pub fn is_only_line_ending_diff(unified_diff: &str) -> bool {
    let mut changes = Vec::new();
    let mut has_no_newline_marker = false;

    for line in unified_diff.split('\n') {
        match DiffLineKind::classify(line) {
            DiffLineKind::Removal | DiffLineKind::Addition => changes.push(line),
            DiffLineKind::NoNewlineMarker => has_no_newline_marker = true,
            _ => {}
        }
    }

    if changes.is_empty() {
        return has_no_newline_marker;
    }

    let mut consumed = vec![false; changes.len()];
    // Every addition before this index has already been matched.
    let mut search_from = 0;

    for i in 0..changes.len() {
        if consumed[i] {
            continue;
        }

        let removed = changes[i];
        if !removed.starts_with('-') {
            return false;
        }

        let start = search_from.max(i + 1);
        let partner = (start..changes.len()).find(|&j| changes[j].starts_with('+'));
        let Some(j) = partner else {
            return false;
        };

        if !is_line_ending_equivalent(line_content(removed), line_content(changes[j])) {
            return false;
        }

        consumed[j] = true;
        search_from = j + 1;
    }

    true
}

/// Empty string when both file bodies match after line-ending
/// normalization, otherwise `unified_diff` unchanged.
pub fn normalize_unified_diff(
    unified_diff: &str,
    original_content: &str,
    new_content: &str,
) -> String {
    if normalize_line_endings(original_content) == normalize_line_endings(new_content) {
        debug!("file contents identical after line-ending normalization");
        return String::new();
    }
    unified_diff.to_string()
}

/// Whether no addition or removal survives the line-ending filter inside
/// any hunk. Blank input and header-only input count as empty.
pub fn has_no_meaningful_diff_content(unified_diff: &str) -> bool {
    if unified_diff.trim().is_empty() {
        return true;
    }

    let lines: Vec<&str> = unified_diff.split('\n').collect();
    let filtered = filter_line_ending_only_changes(&lines);

    let mut in_hunk = false;
    for line in &filtered {
        match DiffLineKind::classify(line) {
            DiffLineKind::HunkHeader => in_hunk = true,
            DiffLineKind::FileHeader => in_hunk = false,
            kind if kind.is_change() && in_hunk => return false,
            _ => {}
        }
    }

    true
}
