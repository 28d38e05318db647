use crate::error::{Error, Result};
use crate::query::ast::Query;
use crate::stopwords::StopWords;
use crate::term::Term;
use crate::tokenizer::{tokenize, validate_word};

/// Parses raw query strings into [`Query`] values. Query-side terms are
/// built directly (see [`Term::new`]) rather than through the engine's
/// shared interner, so parsing never requires a write lock on it.
///
/// Algorithm: tokenize on ASCII spaces; validate every raw token; classify
/// by a leading `-` (stripping it); drop a token whose *stripped* form is
/// a stop word; sort and deduplicate each of `plus` and `minus`.
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        QueryParser
    }

    pub fn parse(&self, text: &str, stop_words: &StopWords) -> Result<Query> {
        let mut plus: Vec<Term> = Vec::new();
        let mut minus: Vec<Term> = Vec::new();

        for token in tokenize(text) {
            if !validate_word(token) {
                return Err(Error::invalid_argument(format!(
                    "word {{{token}}} contains illegal characters"
                )));
            }

            let (is_minus, stripped) = match token.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, token),
            };

            if stop_words.contains(stripped) {
                continue;
            }

            let term = Term::new(stripped);
            if is_minus {
                minus.push(term);
            } else {
                plus.push(term);
            }
        }

        plus.sort();
        plus.dedup();
        minus.sort();
        minus.dedup();

        Ok(Query { plus, minus })
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, stop: &str) -> Result<Query> {
        let stop_words = StopWords::from_str(stop).unwrap();
        QueryParser::new().parse(text, &stop_words)
    }

    #[test]
    fn splits_plus_and_minus() {
        let q = parse("Reading -help", "").unwrap();
        assert_eq!(q.plus.len(), 1);
        assert_eq!(q.plus[0].as_str(), "Reading");
        assert_eq!(q.minus.len(), 1);
        assert_eq!(q.minus[0].as_str(), "help");
    }

    #[test]
    fn drops_stop_words_after_stripping_minus() {
        let q = parse("cat -the", "the").unwrap();
        assert_eq!(q.plus.len(), 1);
        assert!(q.minus.is_empty());
    }

    #[test]
    fn dedupes_and_sorts() {
        let q = parse("b a a b", "").unwrap();
        assert_eq!(q.plus.len(), 2);
        assert_eq!(q.plus[0].as_str(), "a");
        assert_eq!(q.plus[1].as_str(), "b");
    }

    #[test]
    fn rejects_bare_minus_token() {
        assert!(parse("cat -", "").is_err());
    }

    #[test]
    fn rejects_double_minus_prefix() {
        assert!(parse("cat --help", "").is_err());
    }

    #[test]
    fn empty_query_is_empty() {
        let q = parse("", "").unwrap();
        assert!(q.is_empty());
    }
}
