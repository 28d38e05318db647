use rayon::prelude::*;

use crate::index::DocumentRecord;
use crate::query::Query;
use crate::term::Term;
use crate::types::ExecutionPolicy;

/// Given a parsed query and a document's distinct-words set, returns the
/// plus-terms the document contains, sorted and deduplicated — or the
/// empty vector if any minus-term is present, regardless of plus overlap.
pub fn match_document(query: &Query, record: &DocumentRecord, policy: ExecutionPolicy) -> Vec<Term> {
    let has_minus = match policy {
        ExecutionPolicy::Sequential => query.minus.iter().any(|t| record.words.contains(t)),
        ExecutionPolicy::Parallel => query.minus.par_iter().any(|t| record.words.contains(t)),
    };
    if has_minus {
        return Vec::new();
    }

    let mut matched: Vec<Term> = match policy {
        ExecutionPolicy::Sequential => query
            .plus
            .iter()
            .filter(|t| record.words.contains(*t))
            .cloned()
            .collect(),
        ExecutionPolicy::Parallel => query
            .plus
            .par_iter()
            .filter(|t| record.words.contains(*t))
            .cloned()
            .collect(),
    };
    matched.sort();
    matched.dedup();
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::StringInterner;
    use crate::types::DocumentStatus;
    use std::collections::HashSet;

    #[test]
    fn returns_intersection_of_plus_terms() {
        let mut interner = StringInterner::new();
        let help = interner.intern("help");
        let understand = interner.intern("understand");
        let record = DocumentRecord {
            rating: 0,
            status: DocumentStatus::Actual,
            words: HashSet::from([help.clone(), understand.clone()]),
        };
        let query = Query {
            plus: vec![help.clone(), understand.clone()],
            minus: vec![],
        };
        let matched = match_document(&query, &record, ExecutionPolicy::Sequential);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn minus_term_present_empties_result() {
        let mut interner = StringInterner::new();
        let help = interner.intern("help");
        let you = interner.intern("you");
        let record = DocumentRecord {
            rating: 0,
            status: DocumentStatus::Actual,
            words: HashSet::from([help.clone(), you.clone()]),
        };
        let query = Query {
            plus: vec![help],
            minus: vec![you],
        };
        let matched = match_document(&query, &record, ExecutionPolicy::Sequential);
        assert!(matched.is_empty());
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let record = DocumentRecord {
            rating: 0,
            status: DocumentStatus::Actual,
            words: HashSet::from([a.clone(), b.clone()]),
        };
        let query = Query {
            plus: vec![a, b],
            minus: vec![],
        };
        let seq = match_document(&query, &record, ExecutionPolicy::Sequential);
        let par = match_document(&query, &record, ExecutionPolicy::Parallel);
        assert_eq!(seq, par);
    }
}
