use rayon::prelude::*;

use crate::error::Result;
use crate::scoring::SearchResult;

/// Runs a batch of already-produced per-query search results (or falls
/// back to computing them via `score`) across queries in parallel,
/// preserving input order. Mirrors the grounding codebase's
/// `ParallelIndexer::index_batch` shape: `par_iter` over the batch,
/// progress reported with `eprintln!` every 1000 items.
pub fn process_queries<F>(queries: &[String], score: F) -> Vec<Result<Vec<SearchResult>>>
where
    F: Fn(&str) -> Result<Vec<SearchResult>> + Sync,
{
    let total = queries.len();
    queries
        .par_iter()
        .enumerate()
        .map(|(i, query)| {
            let result = score(query);
            if total >= 1000 && (i + 1) % 1000 == 0 {
                eprintln!("Processed {}/{} queries", i + 1, total);
            }
            result
        })
        .collect()
}

/// Concatenates [`process_queries`]'s per-query result lists in input
/// order. Errors are dropped from the joined list — a query that fails to
/// parse simply contributes no results, matching the core contract that
/// only `process_queries` surfaces per-query failures.
pub fn process_queries_joined<F>(queries: &[String], score: F) -> Vec<SearchResult>
where
    F: Fn(&str) -> Result<Vec<SearchResult>> + Sync,
{
    process_queries(queries, score)
        .into_iter()
        .flat_map(|r| r.unwrap_or_default())
        .collect()
}
