use std::cmp::Ordering;
use std::collections::HashMap;

use rayon::prelude::*;

use crate::index::{DocumentRegistry, InvertedIndex};
use crate::parallel::ConcurrentMap;
use crate::query::Query;
use crate::types::{DocId, DocumentStatus, ExecutionPolicy};

/// Absolute tolerance for relevance equality during sort.
pub const EPS: f64 = 1e-6;
/// Maximum number of results a search returns.
pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i64,
}

/// Computes TF-IDF relevance over an inverted index and selects the top-K
/// results under a caller-supplied predicate.
pub struct Scorer;

impl Scorer {
    pub fn find_top_documents<P>(
        query: &Query,
        index: &InvertedIndex,
        registry: &DocumentRegistry,
        predicate: P,
        policy: ExecutionPolicy,
        shard_count: usize,
    ) -> Vec<SearchResult>
    where
        P: Fn(DocId, DocumentStatus, i64) -> bool + Sync,
    {
        let mut relevance = match policy {
            ExecutionPolicy::Sequential => {
                Self::accumulate_sequential(query, index, registry, &predicate)
            }
            ExecutionPolicy::Parallel => {
                Self::accumulate_parallel(query, index, registry, &predicate, shard_count)
            }
        };

        for term in &query.minus {
            if let Some(postings) = index.postings_for(term) {
                for doc_id in postings.keys() {
                    relevance.remove(doc_id);
                }
            }
        }

        let mut results: Vec<SearchResult> = relevance
            .into_iter()
            .map(|(id, relevance)| {
                let rating = registry.get(id).map_or(0, |r| r.rating);
                SearchResult {
                    id,
                    relevance,
                    rating,
                }
            })
            .collect();

        results.sort_by(Self::compare);
        results.truncate(MAX_RESULTS);
        results
    }

    /// Strict weak order of §4.6 step 5: descending relevance outside the
    /// EPS equivalence class, descending rating within it.
    fn compare(a: &SearchResult, b: &SearchResult) -> Ordering {
        let diff = a.relevance - b.relevance;
        if diff.abs() >= EPS {
            b.relevance
                .partial_cmp(&a.relevance)
                .unwrap_or(Ordering::Equal)
        } else {
            b.rating.cmp(&a.rating)
        }
    }

    fn accumulate_sequential<P>(
        query: &Query,
        index: &InvertedIndex,
        registry: &DocumentRegistry,
        predicate: &P,
    ) -> HashMap<DocId, f64>
    where
        P: Fn(DocId, DocumentStatus, i64) -> bool,
    {
        let total_docs = registry.len();
        let mut relevance = HashMap::new();
        for term in &query.plus {
            let Some(postings) = index.postings_for(term) else {
                continue;
            };
            let idf = Self::idf(total_docs, postings.len());
            for (&doc_id, &tf) in postings {
                let Some(record) = registry.get(doc_id) else {
                    continue;
                };
                if predicate(doc_id, record.status, record.rating) {
                    *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
                }
            }
        }
        relevance
    }

    /// Outer loop over plus-terms is parallel; the inner loop per term is
    /// sequential, so a single `(doc_id, term)` contribution is never
    /// applied from two threads at once.
    fn accumulate_parallel<P>(
        query: &Query,
        index: &InvertedIndex,
        registry: &DocumentRegistry,
        predicate: &P,
        shard_count: usize,
    ) -> HashMap<DocId, f64>
    where
        P: Fn(DocId, DocumentStatus, i64) -> bool + Sync,
    {
        let total_docs = registry.len();
        let accumulator: ConcurrentMap<DocId, f64> = ConcurrentMap::new(shard_count);

        query.plus.par_iter().for_each(|term| {
            let Some(postings) = index.postings_for(term) else {
                return;
            };
            let idf = Self::idf(total_docs, postings.len());
            for (&doc_id, &tf) in postings {
                let Some(record) = registry.get(doc_id) else {
                    continue;
                };
                if predicate(doc_id, record.status, record.rating) {
                    accumulator.update(doc_id, |v| *v += tf * idf);
                }
            }
        });

        accumulator.snapshot()
    }

    fn idf(total_docs: usize, docs_with_term: usize) -> f64 {
        (total_docs as f64 / docs_with_term as f64).ln()
    }
}
