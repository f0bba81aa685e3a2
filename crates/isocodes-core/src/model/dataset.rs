// crates/isocodes-core/src/model/dataset.rs
use super::index::{build_all_indexes, build_sorted_view, FieldIndex};
use super::Record;
use crate::common::{DatasetKey, DatasetStats};
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::{BTreeSet, HashMap};

/// One loaded ISO dataset: its records in source order plus lazily built
/// exact-match indexes.
///
/// A dataset never changes after construction. The index map is built at
/// most once, on the first lookup that needs it, and is safe to share
/// between threads.
#[derive(Debug)]
pub struct Dataset {
    key: DatasetKey,
    records: Vec<Record>,
    indexes: OnceCell<HashMap<String, FieldIndex>>,
}

impl Dataset {
    pub fn new(key: DatasetKey, records: Vec<Record>) -> Self {
        Self {
            key,
            records,
            indexes: OnceCell::new(),
        }
    }

    pub fn key(&self) -> DatasetKey {
        self.key
    }

    /// All records, in the order of the backing data.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact-match index over `field`, or `None` if no record has it.
    pub fn index(&self, field: &str) -> Option<&FieldIndex> {
        self.indexes().get(field)
    }

    fn indexes(&self) -> &HashMap<String, FieldIndex> {
        self.indexes.get_or_init(|| {
            let built = build_all_indexes(&self.records);
            debug!(
                "Indexed dataset {} ({} records, {} fields)",
                self.key,
                self.records.len(),
                built.len()
            );
            built
        })
    }

    /// Record at `pos`, as handed out by a [`FieldIndex`].
    pub(crate) fn at(&self, pos: usize) -> Option<&Record> {
        self.records.get(pos)
    }

    /// Records ascending by the raw value of `field`, recomputed per call.
    pub fn sorted_by(&self, field: &str) -> Vec<(&str, &Record)> {
        build_sorted_view(&self.records, field)
    }

    /// `(code, name)` pairs in dataset order.
    ///
    /// Every call starts a fresh sequence over the records.
    pub fn names_by<'a>(&'a self, code_field: &'a str) -> NamePairs<'a> {
        NamePairs {
            records: self.records.iter(),
            code_field,
        }
    }

    /// Values of `field` that more than one record holds.
    pub fn duplicate_values(&self, field: &str) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut dupes = BTreeSet::new();
        for value in self.records.iter().filter_map(|r| r.get(field)) {
            if !seen.insert(value) {
                dupes.insert(value);
            }
        }
        dupes.into_iter().collect()
    }

    pub fn stats(&self) -> DatasetStats {
        let fields: BTreeSet<&str> = self.records.iter().flat_map(|r| r.field_names()).collect();
        DatasetStats {
            key: self.key,
            records: self.records.len(),
            fields: fields.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Finite `(code, name)` sequence over a dataset.
///
/// Records lacking either field are skipped.
#[derive(Clone, Debug)]
pub struct NamePairs<'a> {
    records: std::slice::Iter<'a, Record>,
    code_field: &'a str,
}

impl<'a> Iterator for NamePairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let field = self.code_field;
        self.records
            .by_ref()
            .find_map(|r| Some((r.get(field)?, r.name()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let records = vec![
            [("alpha_2", "DE"), ("name", "Germany")].into_iter().collect(),
            [("alpha_2", "AT"), ("name", "Austria")].into_iter().collect(),
            [("name", "Codeless")].into_iter().collect(),
            [("alpha_2", "DE"), ("name", "Germany again")].into_iter().collect(),
        ];
        Dataset::new(DatasetKey::Countries, records)
    }

    #[test]
    fn name_pairs_restart_on_every_call() {
        let ds = dataset();
        let first: Vec<_> = ds.names_by("alpha_2").collect();
        let second: Vec<_> = ds.names_by("alpha_2").collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert_eq!(first[1], ("AT", "Austria"));
    }

    #[test]
    fn duplicates_and_stats() {
        let ds = dataset();
        assert_eq!(ds.duplicate_values("alpha_2"), vec!["DE"]);
        assert!(ds.duplicate_values("name").is_empty());

        let stats = ds.stats();
        assert_eq!(stats.records, 4);
        assert_eq!(stats.fields, vec!["alpha_2", "name"]);
    }

    #[test]
    fn index_accessor_is_idempotent() {
        let ds = dataset();
        let a = ds.index("alpha_2").cloned();
        let b = ds.index("alpha_2").cloned();
        assert_eq!(a, b);
        assert!(ds.index("numeric").is_none());
    }
}
