//! Core diff cleaning pipeline

use super::collapse::run_collapse;
use super::detect::{has_no_meaningful_diff_content, is_only_line_ending_diff};
use super::files::clean_file_diffs;
use super::filter::run_filter;
use super::types::{CleanOutcome, CleanReport, FileReport};
use serde::Serialize;
use std::io::{self, Read, Write};
use tracing::{debug, info};

/// Options for stream processing
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Clean each `diff --git` section separately and drop emptied files
    pub per_file: bool,
    /// Emit a JSON report instead of the cleaned diff
    pub json: bool,
}

/// Clean a diff read from `reader` and write the result to `writer`
pub fn process_diff<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    options: &CleanOptions,
) -> io::Result<()> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    if options.per_file {
        let (cleaned, files) = clean_file_diffs(&input);
        info!(
            files = files.len(),
            kept = files.iter().filter(|f| f.kept).count(),
            "cleaned diff per file"
        );
        if options.json {
            write_json(&mut writer, &PerFileReport { cleaned, files })?;
        } else {
            write!(writer, "{}", cleaned)?;
        }
    } else {
        let report = clean_diff_with_report(&input);
        info!(outcome = report.outcome.as_str(), "cleaned diff");
        if options.json {
            write_json(&mut writer, &report)?;
        } else {
            write!(writer, "{}", report.cleaned)?;
        }
    }

    writer.flush()
}

#[derive(Serialize)]
struct PerFileReport {
    cleaned: String,
    files: Vec<FileReport>,
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(io::Error::other)?;
    writeln!(writer)
}

/// Remove line-ending and whitespace-only noise from a unified diff.
///
/// Returns an empty string when nothing but noise remains.
pub fn clean_diff(unified_diff: &str) -> String {
    clean_diff_with_report(unified_diff).cleaned
}

/// Same decisions as [`clean_diff`], with the outcome and line counters
pub fn clean_diff_with_report(unified_diff: &str) -> CleanReport {
    let input_lines = if unified_diff.is_empty() {
        0
    } else {
        unified_diff.split('\n').count()
    };
    let empty =
        |outcome: CleanOutcome, dropped_lines: usize, collapsed_pairs: usize| CleanReport {
            outcome,
            input_lines,
            output_lines: 0,
            dropped_lines,
            collapsed_pairs,
            cleaned: String::new(),
        };

    if unified_diff.trim().is_empty() {
        return empty(CleanOutcome::Empty, 0, 0);
    }

    if is_only_line_ending_diff(unified_diff) {
        debug!("diff contains only line-ending changes");
        return empty(CleanOutcome::LineEndingOnly, 0, 0);
    }

    let lines: Vec<&str> = unified_diff.split('\n').collect();
    let (filtered, dropped_lines) = run_filter(&lines);
    let (collapsed, collapsed_pairs) = run_collapse(&filtered);
    let cleaned = collapsed.join("\n");

    if has_no_meaningful_diff_content(&cleaned) {
        debug!(
            dropped_lines,
            collapsed_pairs, "no meaningful content left after filtering"
        );
        return empty(
            CleanOutcome::NoMeaningfulContent,
            dropped_lines,
            collapsed_pairs,
        );
    }

    CleanReport {
        outcome: CleanOutcome::Cleaned,
        input_lines,
        output_lines: collapsed.len(),
        dropped_lines,
        collapsed_pairs,
        cleaned,
    }
}
