/// Splits `text` into maximal runs of non-space characters, separated by
/// one or more ASCII spaces. Empty tokens are never emitted. Unlike
/// `str::split_whitespace`, only the ASCII space character (`' '`) acts as
/// a separator — a tab or newline embedded in a token is left in place and
/// will later fail [`validate_word`].
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Validates a raw token per the engine's shared rule: no control bytes
/// (`< 0x20`), not exactly `"-"`, and no `"--"` prefix. Applied before any
/// minus-prefix stripping, in both ingestion and query parsing.
pub fn validate_word(word: &str) -> bool {
    let no_control_bytes = word.bytes().all(|b| b >= 0x20);
    no_control_bytes && word != "-" && !word.starts_with("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_ascii_space_runs() {
        assert_eq!(tokenize("cat  in   the city"), vec!["cat", "in", "the", "city"]);
    }

    #[test]
    fn drops_empty_tokens_from_leading_trailing_spaces() {
        assert_eq!(tokenize("  hello world  "), vec!["hello", "world"]);
    }

    #[test]
    fn tab_is_not_a_separator() {
        assert_eq!(tokenize("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn valid_words() {
        assert!(validate_word("reading"));
        assert!(validate_word("-help"));
        assert!(validate_word("a-b"));
    }

    #[test]
    fn invalid_bare_minus() {
        assert!(!validate_word("-"));
    }

    #[test]
    fn invalid_double_minus_prefix() {
        assert!(!validate_word("--help"));
    }

    #[test]
    fn invalid_control_byte() {
        assert!(!validate_word("a\tb"));
    }
}
