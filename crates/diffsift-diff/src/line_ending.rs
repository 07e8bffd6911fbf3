//! Line terminator normalization

/// Replace every `\r\n` and every lone `\r` with `\n`.
///
/// `\r\n` is collapsed first; doing the lone `\r` pass first would turn
/// each `\r\n` into `\n\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Whether two line contents differ only by line terminators or trailing whitespace
pub fn is_line_ending_equivalent(left: &str, right: &str) -> bool {
    normalize_line_endings(left).trim_end() == normalize_line_endings(right).trim_end()
}
