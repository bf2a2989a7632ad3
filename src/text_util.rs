//! Text cleanup shared by ingestion, chunking, retrieval and rendering.

/// Clean up extracted page text.
///
/// - NUL bytes become a space
/// - runs of spaces and tabs collapse to a single space
/// - three or more consecutive newlines collapse to exactly two
/// - leading and trailing whitespace is trimmed
///
/// # Examples
///
/// ```
/// use docbrief::text_util::normalize_text;
///
/// assert_eq!(normalize_text("  a\t\t b\n\n\n\nc  "), "a b\n\nc");
/// ```
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_blank = false;
    let mut newlines = 0usize;

    for c in text.chars() {
        let c = if c == '\0' { ' ' } else { c };
        match c {
            ' ' | '\t' => {
                newlines = 0;
                if !in_blank {
                    out.push(' ');
                    in_blank = true;
                }
            }
            '\n' => {
                in_blank = false;
                newlines += 1;
                if newlines <= 2 {
                    out.push('\n');
                }
            }
            _ => {
                in_blank = false;
                newlines = 0;
                out.push(c);
            }
        }
    }

    out.trim().to_string()
}

/// Split text into lowercase retrieval terms.
///
/// Everything outside `[a-z0-9-]` after lowercasing acts as a separator, so
/// hyphenated compounds such as `d-dimer` survive as one term while other
/// punctuation is dropped. No stemming and no stopword removal.
///
/// # Examples
///
/// ```
/// use docbrief::text_util::tokenize;
///
/// assert_eq!(tokenize("Check D-dimer, SpO2!"), ["check", "d-dimer", "spo2"]);
/// assert!(tokenize("???").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| {
            !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Return at most the first `max_chars` characters of `text`.
///
/// Counts chars, not bytes, so multi-byte text is never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_replaces_nul_and_collapses_blanks() {
        assert_eq!(normalize_text("a\0\0b"), "a b");
        assert_eq!(normalize_text("a \t \tb"), "a b");
    }

    #[test]
    fn normalize_caps_blank_lines() {
        assert_eq!(normalize_text("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_text("a\n\nb"), "a\n\nb");
        assert_eq!(normalize_text("a\nb"), "a\nb");
    }

    #[test]
    fn normalize_only_counts_adjacent_newlines() {
        // A space between newlines breaks the run.
        assert_eq!(normalize_text("a\n \n\n\nb"), "a\n \n\nb");
    }

    #[test]
    fn normalize_trims_and_handles_empty() {
        assert_eq!(normalize_text("\n\n  hello \n"), "hello");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \t\0\n "), "");
    }

    #[test]
    fn tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Acute Chest-Pain: ECG (12-lead)."),
            ["acute", "chest-pain", "ecg", "12-lead"]
        );
    }

    #[test]
    fn tokenize_keeps_duplicates_in_order() {
        assert_eq!(tokenize("cough, fever, cough"), ["cough", "fever", "cough"]);
    }

    #[test]
    fn tokenize_drops_non_ascii_letters() {
        assert_eq!(tokenize("naïve café"), ["na", "ve", "caf"]);
    }

    #[test]
    fn tokenize_empty_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("?!.,;").is_empty());
    }

    #[test]
    fn collapse_whitespace_joins_lines() {
        assert_eq!(collapse_whitespace("  a \n\n b\tc  "), "a b c");
    }

    #[test]
    fn truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("日本語テキスト", 2), "日本");
        assert_eq!(truncate_chars("", 5), "");
    }
}
