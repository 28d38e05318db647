use std::collections::HashMap;

use crate::term::Term;
use crate::types::DocId;

/// Term frequencies across all live documents.
///
/// Invariant: `doc_id ∈ postings[term]` iff `term` is in that document's
/// distinct-words set — maintained jointly with
/// [`DocumentRegistry`](crate::index::DocumentRegistry) by the engine.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<Term, HashMap<DocId, f64>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
        }
    }

    pub fn add_occurrence(&mut self, term: Term, doc_id: DocId, delta: f64) {
        *self
            .postings
            .entry(term)
            .or_default()
            .entry(doc_id)
            .or_insert(0.0) += delta;
    }

    pub fn postings_for(&self, term: &Term) -> Option<&HashMap<DocId, f64>> {
        self.postings.get(term)
    }

    pub fn term_frequency(&self, term: &Term, doc_id: DocId) -> Option<f64> {
        self.postings.get(term)?.get(&doc_id).copied()
    }

    pub fn document_count_for(&self, term: &Term) -> usize {
        self.postings.get(term).map_or(0, |m| m.len())
    }

    /// Erases `doc_id` from `term`'s posting map. Pruning an emptied entry
    /// is permitted by the data model but not required; this leaves empty
    /// entries in place rather than pruning, since a pruning pass buys
    /// nothing observable here.
    pub fn remove_doc_from_term(&mut self, term: &Term, doc_id: DocId) {
        if let Some(map) = self.postings.get_mut(term) {
            map.remove(&doc_id);
        }
    }

    pub fn terms_indexed(&self) -> usize {
        self.postings.len()
    }
}
