//! Extraction of `[file:line]` tags from log payloads.

/// Split a leading source-location tag off a raw log payload.
///
/// A payload produced by location-aware logging macros starts with
/// `[<file>:<digits>]` followed by a single delimiter character. When that
/// shape is present, returns the text between the brackets and the payload
/// with the tag (and delimiter) removed; otherwise returns `None` and the
/// payload untouched.
///
/// The digits are matched by scanning *backward* from the closing bracket
/// and requiring a `:` right before them. A payload that merely starts with
/// an unrelated bracketed token (`"[WARN] disk full"`) therefore keeps its
/// bracket: there are no digits directly before the `]`, so the colon check
/// fails and the text passes through unchanged.
pub fn split_source_location(raw: &str) -> (Option<&str>, &str) {
    let bytes = raw.as_bytes();
    if bytes.first() != Some(&b'[') {
        return (None, raw);
    }
    let Some(close) = raw.find(']') else {
        return (None, raw);
    };

    let mut digits_start = close;
    while digits_start > 1 && bytes[digits_start - 1].is_ascii_digit() {
        digits_start -= 1;
    }
    if digits_start == close || bytes[digits_start - 1] != b':' {
        return (None, raw);
    }

    let location = &raw[1..close];

    // Skip the closing bracket plus the single delimiter character after it.
    // The skip is lossy: the delimiter is assumed, not checked, matching the
    // producing macros' `"[{file}:{line}] {message}"` shape.
    let mut rest = close + 1;
    if let Some(delimiter) = raw[rest..].chars().next() {
        rest += delimiter.len_utf8();
    }
    (Some(location), &raw[rest..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_split_off() {
        let (source, message) = split_source_location("[foo.cpp:42] hello world");
        assert_eq!(source, Some("foo.cpp:42"));
        assert_eq!(message, "hello world");
    }

    #[test]
    fn test_rust_path_with_line() {
        let (source, message) = split_source_location("[src/net/peer.rs:1031] dial failed");
        assert_eq!(source, Some("src/net/peer.rs:1031"));
        assert_eq!(message, "dial failed");
    }

    #[test]
    fn test_bracketed_word_is_not_a_tag() {
        // No digits before the closing bracket.
        let raw = "[WARN] disk full";
        assert_eq!(split_source_location(raw), (None, raw));
    }

    #[test]
    fn test_digits_without_colon_rejected() {
        let raw = "[1234] queue depth";
        assert_eq!(split_source_location(raw), (None, raw));
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(split_source_location(""), (None, ""));
    }

    #[test]
    fn test_empty_brackets() {
        assert_eq!(split_source_location("[]"), (None, "[]"));
    }

    #[test]
    fn test_unclosed_bracket() {
        let raw = "[main.rs:10 missing close";
        assert_eq!(split_source_location(raw), (None, raw));
    }

    #[test]
    fn test_no_leading_bracket() {
        let raw = "plain message [x.rs:3]";
        assert_eq!(split_source_location(raw), (None, raw));
    }

    #[test]
    fn test_tag_with_no_remainder() {
        let (source, message) = split_source_location("[x.rs:3]");
        assert_eq!(source, Some("x.rs:3"));
        assert_eq!(message, "");
    }

    #[test]
    fn test_delimiter_skip_is_utf8_safe() {
        let (source, message) = split_source_location("[x.rs:3]\u{2192}after");
        assert_eq!(source, Some("x.rs:3"));
        assert_eq!(message, "after");
    }

    #[test]
    fn test_colon_only_file_part() {
        // Degenerate but well-formed: empty file name before the colon.
        let (source, message) = split_source_location("[:42] odd");
        assert_eq!(source, Some(":42"));
        assert_eq!(message, "odd");
    }
}
