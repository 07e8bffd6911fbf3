//! Unified diff cleaning
//!
//! Proposed edits often arrive as unified diffs polluted by line-ending
//! conversion (CRLF vs LF) and trailing-whitespace churn. This crate
//! classifies such diffs and strips the noise while keeping every real
//! change and every structural line (headers, hunk markers, context).
//!
//! The pipeline behind [`clean_diff`]:
//!
//! 1. [`is_only_line_ending_diff`] rejects wholesale line-ending diffs
//! 2. [`filter_line_ending_only_changes`] drops equivalent change groups per hunk
//! 3. [`combine_identical_trimmed_lines`] demotes indentation-only pairs to context
//! 4. [`has_no_meaningful_diff_content`] catches diffs emptied by the passes above
//!
//! Every function is total: malformed input degrades to "keep everything".

mod collapse;
mod detect;
mod files;
mod filter;
mod line_ending;
mod processor;
mod types;

pub use collapse::combine_identical_trimmed_lines;
pub use detect::{has_no_meaningful_diff_content, is_only_line_ending_diff, normalize_unified_diff};
pub use files::{clean_file_diffs, split_file_diffs};
pub use filter::filter_line_ending_only_changes;
pub use line_ending::{is_line_ending_equivalent, normalize_line_endings};
pub use processor::{clean_diff, clean_diff_with_report, process_diff, CleanOptions};
pub use types::{
    ChangeType, CleanOutcome, CleanReport, DiffLineKind, FileDiff, FileReport, NO_NEWLINE_MARKER,
};
