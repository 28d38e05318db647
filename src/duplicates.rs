use std::collections::HashSet;

use crate::index::DocumentRegistry;
use crate::term::Term;
use crate::types::DocId;

/// Returns the ids (ascending) whose distinct-words set has already
/// appeared in a lower-id document.
pub fn duplicate_ids(registry: &DocumentRegistry) -> Vec<DocId> {
    let mut seen: HashSet<Vec<Term>> = HashSet::new();
    let mut duplicates = Vec::new();

    for id in registry.iter_ids() {
        let Some(record) = registry.get(id) else {
            continue;
        };
        let mut words: Vec<Term> = record.words.iter().cloned().collect();
        words.sort();

        if seen.contains(&words) {
            duplicates.push(id);
        } else {
            seen.insert(words);
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DocumentRecord;
    use crate::term::StringInterner;
    use crate::types::DocumentStatus;

    #[test]
    fn flags_later_document_with_same_words() {
        let mut interner = StringInterner::new();
        let mut registry = DocumentRegistry::new();
        let cat = interner.intern("cat");
        let dog = interner.intern("dog");

        registry.insert(
            DocId::new(1),
            DocumentRecord {
                rating: 0,
                status: DocumentStatus::Actual,
                words: HashSet::from([cat.clone(), dog.clone()]),
            },
        );
        registry.insert(
            DocId::new(2),
            DocumentRecord {
                rating: 0,
                status: DocumentStatus::Actual,
                words: HashSet::from([dog, cat]),
            },
        );

        assert_eq!(duplicate_ids(&registry), vec![DocId::new(2)]);
    }

    #[test]
    fn distinct_word_sets_are_not_duplicates() {
        let mut interner = StringInterner::new();
        let mut registry = DocumentRegistry::new();
        let cat = interner.intern("cat");
        let dog = interner.intern("dog");

        registry.insert(
            DocId::new(1),
            DocumentRecord {
                rating: 0,
                status: DocumentStatus::Actual,
                words: HashSet::from([cat]),
            },
        );
        registry.insert(
            DocId::new(2),
            DocumentRecord {
                rating: 0,
                status: DocumentStatus::Actual,
                words: HashSet::from([dog]),
            },
        );

        assert!(duplicate_ids(&registry).is_empty());
    }
}
