pub mod scorer;

pub use scorer::{Scorer, SearchResult, EPS, MAX_RESULTS};
