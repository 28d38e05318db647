/// Construction-time knobs for an [`Engine`](crate::engine::Engine).
///
/// Mirrors the grounding codebase's `core::config::Config`: a plain struct
/// with a `Default` impl, handed to the engine once at construction and
/// never mutated afterward.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of shards backing the concurrent accumulator used by the
    /// parallel scorer. Defaults to the detected hardware concurrency.
    pub accumulator_shards: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            accumulator_shards: num_cpus::get().max(1),
        }
    }
}
