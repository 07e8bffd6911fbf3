//! Hunk-level removal of line-ending-only change pairs

use super::line_ending::is_line_ending_equivalent;
use super::types::{line_content, DiffLineKind};
use tracing::{debug, trace};

/// Drop removal/addition groups whose lines differ only by line endings or
/// trailing whitespace, keeping every structural line.
pub fn filter_line_ending_only_changes<S: AsRef<str>>(diff_lines: &[S]) -> Vec<String> {
    run_filter(diff_lines).0
}

/// Filtered lines plus the number of change lines dropped
pub(crate) fn run_filter<S: AsRef<str>>(diff_lines: &[S]) -> (Vec<String>, usize) {
    let mut filter = LineEndingFilter::new(diff_lines.len());
    for line in diff_lines {
        filter.push(line.as_ref());
    }
    filter.finish()
}

/// Single-pass state for the filter. The pending lists hold the original
/// line text; emission sources from them directly.
struct LineEndingFilter<'a> {
    output: Vec<String>,
    removed: Vec<&'a str>,
    added: Vec<&'a str>,
    in_hunk: bool,
    dropped: usize,
}

impl<'a> LineEndingFilter<'a> {
    fn new(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            removed: Vec::new(),
            added: Vec::new(),
            in_hunk: false,
            dropped: 0,
        }
    }

    fn push(&mut self, line: &'a str) {
        let kind = DiffLineKind::classify(line);
        match kind {
            DiffLineKind::Removal => self.removed.push(line),
            DiffLineKind::Addition => self.added.push(line),
            // Pure noise; must not split an in-progress group
            DiffLineKind::NoNewlineMarker => {
                trace!(in_hunk = self.in_hunk, "dropping no-newline marker");
            }
            _ => {
                self.flush();
                match kind {
                    DiffLineKind::HunkHeader => self.in_hunk = true,
                    DiffLineKind::FileHeader => self.in_hunk = false,
                    _ => {}
                }
                self.output.push(line.to_string());
            }
        }
    }

    fn flush(&mut self) {
        if self.removed.is_empty() && self.added.is_empty() {
            return;
        }

        let droppable = !self.removed.is_empty()
            && self.removed.len() == self.added.len()
            && self
                .removed
                .iter()
                .zip(&self.added)
                .all(|(old, new)| is_line_ending_equivalent(line_content(old), line_content(new)));

        if droppable {
            debug!(
                pairs = self.removed.len(),
                in_hunk = self.in_hunk,
                "dropping line-ending-only change group"
            );
            self.dropped += self.removed.len() + self.added.len();
        } else {
            trace!(
                removed = self.removed.len(),
                added = self.added.len(),
                "keeping change group"
            );
            self.output
                .extend(self.removed.iter().map(|line| line.to_string()));
            self.output.extend(self.added.iter().map(|line| line.to_string()));
        }

        self.removed.clear();
        self.added.clear();
    }

    fn finish(mut self) -> (Vec<String>, usize) {
        self.flush();
        (self.output, self.dropped)
    }
}
