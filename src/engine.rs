use std::collections::HashMap;

use parking_lot::RwLock;

use crate::config::EngineConfig;
use crate::duplicates;
use crate::error::{Error, Result};
use crate::index::{DocumentRecord, DocumentRegistry, InvertedIndex};
use crate::matcher;
use crate::parallel::executor;
use crate::query::QueryParser;
use crate::scoring::{Scorer, SearchResult};
use crate::stopwords::StopWords;
use crate::term::{StringInterner, Term};
use crate::tokenizer::{tokenize, validate_word};
use crate::types::{DocId, DocumentStatus, ExecutionPolicy};

struct EngineState {
    interner: StringInterner,
    index: InvertedIndex,
    registry: DocumentRegistry,
}

/// The façade owning the engine's mutable state as a single
/// exclusively-writer-locked unit, matching the grounding codebase's
/// `core::database::Database` writer-lock shape (there `Arc<RwLock<IndexWriter>>`,
/// here `parking_lot::RwLock<EngineState>`). `stop_words` is immutable
/// after construction and lives outside the lock.
pub struct Engine {
    stop_words: StopWords,
    parser: QueryParser,
    config: EngineConfig,
    state: RwLock<EngineState>,
}

impl Engine {
    pub fn new(stop_words: StopWords) -> Self {
        Self::with_config(stop_words, EngineConfig::default())
    }

    pub fn with_config(stop_words: StopWords, config: EngineConfig) -> Self {
        Engine {
            stop_words,
            parser: QueryParser::new(),
            config,
            state: RwLock::new(EngineState {
                interner: StringInterner::new(),
                index: InvertedIndex::new(),
                registry: DocumentRegistry::new(),
            }),
        }
    }

    /// §4.5: preconditions checked in order, then effects applied. No
    /// partial state is left behind on failure.
    pub fn add_document(
        &self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i64],
    ) -> Result<()> {
        if id.value() < 0 {
            return Err(Error::invalid_argument("document id must be non-negative"));
        }

        let tokens = tokenize(text);
        for token in &tokens {
            if !validate_word(token) {
                return Err(Error::invalid_argument(format!(
                    "word {{{token}}} contains illegal characters"
                )));
            }
        }

        let mut state = self.state.write();
        if state.registry.contains(id) {
            return Err(Error::invalid_argument(format!(
                "document {} already exists",
                id.value()
            )));
        }

        let words: Vec<&str> = tokens
            .into_iter()
            .filter(|w| !self.stop_words.contains(w))
            .collect();

        let mut distinct = std::collections::HashSet::new();
        if !words.is_empty() {
            let inv = 1.0 / words.len() as f64;
            for word in &words {
                let term = state.interner.intern(word);
                state.index.add_occurrence(term.clone(), id, inv);
                distinct.insert(term);
            }
        }

        let rating = average_rating(ratings);
        state.registry.insert(
            id,
            DocumentRecord {
                rating,
                status,
                words: distinct,
            },
        );
        Ok(())
    }

    pub fn find_top_documents<P>(
        &self,
        query: &str,
        predicate: P,
        policy: ExecutionPolicy,
    ) -> Result<Vec<SearchResult>>
    where
        P: Fn(DocId, DocumentStatus, i64) -> bool + Sync,
    {
        let parsed = self.parser.parse(query, &self.stop_words)?;
        let state = self.state.read();
        Ok(Scorer::find_top_documents(
            &parsed,
            &state.index,
            &state.registry,
            predicate,
            policy,
            self.config.accumulator_shards,
        ))
    }

    pub fn find_top_documents_with_status(
        &self,
        query: &str,
        status: DocumentStatus,
        policy: ExecutionPolicy,
    ) -> Result<Vec<SearchResult>> {
        self.find_top_documents(query, move |_, s, _| s == status, policy)
    }

    pub fn find_top_documents_actual(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.find_top_documents_with_status(query, DocumentStatus::Actual, ExecutionPolicy::Sequential)
    }

    pub fn match_document(
        &self,
        query: &str,
        id: DocId,
        policy: ExecutionPolicy,
    ) -> Result<(Vec<Term>, DocumentStatus)> {
        let parsed = self.parser.parse(query, &self.stop_words)?;
        let state = self.state.read();
        let record = state
            .registry
            .get(id)
            .ok_or_else(|| Error::not_found(format!("document {} is not live", id.value())))?;
        let matched = matcher::match_document(&parsed, record, policy);
        Ok((matched, record.status))
    }

    pub fn document_count(&self) -> usize {
        self.state.read().registry.len()
    }

    pub fn iterate_live_ids(&self) -> Vec<DocId> {
        self.state.read().registry.iter_ids().collect()
    }

    pub fn word_frequencies(&self, id: DocId) -> Result<HashMap<Term, f64>> {
        let state = self.state.read();
        let record = state
            .registry
            .get(id)
            .ok_or_else(|| Error::not_found(format!("document {} is not live", id.value())))?;
        let mut frequencies = HashMap::new();
        for term in &record.words {
            if let Some(tf) = state.index.term_frequency(term, id) {
                frequencies.insert(term.clone(), tf);
            }
        }
        Ok(frequencies)
    }

    /// §4.8: removal is a writer operation, mutually exclusive with every
    /// other writer and reader.
    pub fn remove_document(&self, id: DocId, policy: ExecutionPolicy) -> Result<()> {
        let mut state = self.state.write();
        let record = state
            .registry
            .remove(id)
            .ok_or_else(|| Error::not_found(format!("document {} is not live", id.value())))?;

        match policy {
            ExecutionPolicy::Sequential => {
                for term in &record.words {
                    state.index.remove_doc_from_term(term, id);
                }
            }
            ExecutionPolicy::Parallel => {
                use rayon::prelude::*;
                let terms: Vec<&Term> = record.words.iter().collect();
                let per_term_present: Vec<bool> = terms
                    .par_iter()
                    .map(|term| state.index.term_frequency(term, id).is_some())
                    .collect();
                for (term, present) in terms.iter().zip(per_term_present) {
                    if present {
                        state.index.remove_doc_from_term(term, id);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn duplicate_ids(&self) -> Vec<DocId> {
        duplicates::duplicate_ids(&self.state.read().registry)
    }

    pub fn process_queries(&self, queries: &[String]) -> Vec<Result<Vec<SearchResult>>> {
        executor::process_queries(queries, |q| {
            self.find_top_documents(
                q,
                |_, status, _| status == DocumentStatus::Actual,
                ExecutionPolicy::Parallel,
            )
        })
    }

    pub fn process_queries_joined(&self, queries: &[String]) -> Vec<SearchResult> {
        executor::process_queries_joined(queries, |q| {
            self.find_top_documents(
                q,
                |_, status, _| status == DocumentStatus::Actual,
                ExecutionPolicy::Parallel,
            )
        })
    }
}

/// §4.5 step 4: C-style truncation toward zero — Rust's `/` on signed
/// integers already does this, so no special casing is needed.
fn average_rating(ratings: &[i64]) -> i64 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().sum();
    sum / ratings.len() as i64
}
