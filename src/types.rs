/// Document identifier. Signed to match the concurrent accumulator's
/// requirement (see [`crate::parallel::concurrent_map`]) that keys be
/// integer-valued; non-negativity is an ingestion precondition, not a
/// type-level one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(pub i64);

impl DocId {
    pub fn new(id: i64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for DocId {
    fn from(id: i64) -> Self {
        DocId(id)
    }
}

impl From<DocId> for i64 {
    fn from(id: DocId) -> Self {
        id.0
    }
}

/// Lifecycle state of a document, as assigned by the caller at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// Selects between a single-threaded and a `rayon`-parallel code path for
/// an operation that offers both. Both produce the same observable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    #[default]
    Sequential,
    Parallel,
}
