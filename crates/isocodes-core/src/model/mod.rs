// crates/isocodes-core/src/model/mod.rs
pub mod dataset;
pub mod index;
pub mod record;
pub mod search;

pub use dataset::{Dataset, NamePairs};
pub use index::{build_index, build_sorted_view, FieldIndex};
pub use record::{Record, RecordIter};
