pub mod inverted;
pub mod registry;

pub use inverted::InvertedIndex;
pub use registry::{DocumentRecord, DocumentRegistry};
