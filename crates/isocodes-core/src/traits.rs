// crates/isocodes-core/src/traits.rs
use crate::common::SearchHit;
use crate::model::Record;

/// The query operations available on every dataset.
///
/// `find` and `search` are the precise API. `get` is the older soft lookup:
/// it always hands back a record, empty on a miss, so call sites can pull
/// fields out of the result without checking first.
///
/// # Example
///
/// ```rust
/// use isocodes_core::{countries, IsoSearch};
///
/// let countries = countries().unwrap();
///
/// let de = countries.find("alpha_2", "DE").unwrap();
/// assert_eq!(de.name(), Some("Germany"));
///
/// let islands = countries.search(&[("name", "island")]);
/// assert!(!islands.is_empty());
///
/// assert!(countries.get(&[("alpha_2", "ZZ")]).is_empty());
/// ```
pub trait IsoSearch {
    /// Exact match on `field`, served from the field's index.
    fn find(&self, field: &str, value: &str) -> Option<&Record>;

    /// Records matching every `(field, value)` criterion as a
    /// case-insensitive substring. No criteria yields no records.
    fn search(&self, criteria: &[(&str, &str)]) -> Vec<&Record>;

    /// First record (dataset order) whose field contains the value of the
    /// first criterion, case-sensitively.
    ///
    /// Returns [`Record::empty`] when there are no criteria, the value is
    /// empty, or nothing matches.
    fn get(&self, criteria: &[(&str, &str)]) -> &Record;

    /// Accent- and case-insensitive relevance search over code and name
    /// fields, best hits first.
    fn smart_search(&self, query: &str) -> Vec<SearchHit<'_>>;
}
