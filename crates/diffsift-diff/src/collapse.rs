//! Demote adjacent removal/addition pairs that only differ by surrounding whitespace

use super::types::line_content;
use tracing::trace;

/// Replace each `-` line immediately followed by a `+` line with equal
/// trimmed content by a single context line carrying the removal's text.
pub fn combine_identical_trimmed_lines<S: AsRef<str>>(diff_lines: &[S]) -> Vec<String> {
    run_collapse(diff_lines).0
}

/// Collapsed lines plus the number of pairs demoted to context
pub(crate) fn run_collapse<S: AsRef<str>>(diff_lines: &[S]) -> (Vec<String>, usize) {
    let mut result = Vec::with_capacity(diff_lines.len());
    let mut collapsed = 0;
    let mut i = 0;

    while i < diff_lines.len() {
        let line = diff_lines[i].as_ref();
        let next = diff_lines.get(i + 1).map(|next| next.as_ref());

        if let Some(next) = next {
            if is_trimmed_pair(line, next) {
                trace!(line = i, "collapsing whitespace-only pair");
                result.push(format!(" {}", line_content(line)));
                collapsed += 1;
                i += 2;
                continue;
            }
        }

        result.push(line.to_string());
        i += 1;
    }

    (result, collapsed)
}

// Prefix-only check: this pass knows nothing about headers or hunks.
fn is_trimmed_pair(removed: &str, added: &str) -> bool {
    removed.starts_with('-')
        && added.starts_with('+')
        && line_content(removed).trim() == line_content(added).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_indentation_change() {
        let result = combine_identical_trimmed_lines(&["-  x  ", "+x", " y"]);
        assert_eq!(result, vec!["   x  ", " y"]);
    }

    #[test]
    fn test_keeps_removal_side_content() {
        let result = combine_identical_trimmed_lines(&["-\tfoo()", "+    foo()"]);
        assert_eq!(result, vec![" \tfoo()"]);
    }

    #[test]
    fn test_ignores_non_adjacent_pairs() {
        let lines = vec!["-x", " ctx", "+x"];
        assert_eq!(combine_identical_trimmed_lines(&lines), lines);
    }

    #[test]
    fn test_ignores_addition_then_removal() {
        let lines = vec!["+x", "-x"];
        assert_eq!(combine_identical_trimmed_lines(&lines), lines);
    }

    #[test]
    fn test_keeps_real_changes() {
        let lines = vec!["-x", "+y"];
        assert_eq!(combine_identical_trimmed_lines(&lines), lines);
    }

    #[test]
    fn test_only_first_of_block_pairs_with_addition() {
        let (result, collapsed) = run_collapse(&["-a", "-b", "+b", "+a"]);
        assert_eq!(result, vec!["-a", " b", "+a"]);
        assert_eq!(collapsed, 1);
    }

    #[test]
    fn test_file_markers_never_collapse() {
        let lines = vec!["--- a/file", "+++ a/file"];
        assert_eq!(combine_identical_trimmed_lines(&lines), lines);
    }

    #[test]
    fn test_empty_input() {
        let lines: Vec<&str> = Vec::new();
        assert!(combine_identical_trimmed_lines(&lines).is_empty());
    }
}
