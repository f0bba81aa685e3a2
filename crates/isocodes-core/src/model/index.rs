// crates/isocodes-core/src/model/index.rs
use super::Record;
use std::collections::HashMap;

/// Exact-match lookup structure over one field of a dataset.
///
/// Maps each field value to the position of the record holding it.
/// Positions (not references) keep the index independent of the record
/// vector it was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldIndex {
    field: String,
    positions: HashMap<String, usize>,
}

impl FieldIndex {
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Position of the record whose `field` equals `value`.
    pub fn get(&self, value: &str) -> Option<usize> {
        self.positions.get(value).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Indexed values, in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.positions.keys().map(String::as_str)
    }
}

/// Builds an exact-match index over `field`.
///
/// Records without the field are skipped. When several records share a
/// value the last one in dataset order wins.
pub fn build_index(records: &[Record], field: &str) -> FieldIndex {
    let mut positions = HashMap::with_capacity(records.len());
    for (pos, record) in records.iter().enumerate() {
        if let Some(value) = record.get(field) {
            positions.insert(value.to_owned(), pos);
        }
    }
    FieldIndex {
        field: field.to_owned(),
        positions,
    }
}

/// Builds indexes for every field that occurs anywhere in `records`.
pub fn build_all_indexes(records: &[Record]) -> HashMap<String, FieldIndex> {
    let mut fields: Vec<&str> = records.iter().flat_map(|r| r.field_names()).collect();
    fields.sort_unstable();
    fields.dedup();

    fields
        .into_iter()
        .map(|f| (f.to_owned(), build_index(records, f)))
        .collect()
}

/// `(value, record)` pairs ascending by the raw value of `field`.
///
/// The sort is stable, so ties keep dataset order. Records without the
/// field are left out.
pub fn build_sorted_view<'a>(records: &'a [Record], field: &str) -> Vec<(&'a str, &'a Record)> {
    let mut view: Vec<(&str, &Record)> = records
        .iter()
        .filter_map(|r| r.get(field).map(|v| (v, r)))
        .collect();
    view.sort_by(|a, b| a.0.cmp(b.0));
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(code: &str, name: &str) -> Record {
        [("code", code), ("name", name)].into_iter().collect()
    }

    #[test]
    fn index_skips_missing_fields_and_last_write_wins() {
        let records = vec![
            rec("A", "Alpha"),
            [("name", "Nameless")].into_iter().collect(),
            rec("A", "Again"),
        ];
        let idx = build_index(&records, "code");
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.get("A"), Some(2));
        assert_eq!(idx.get("B"), None);
    }

    #[test]
    fn sorted_view_is_stable() {
        let records = vec![rec("B", "x"), rec("A", "y"), rec("B", "z")];
        let view = build_sorted_view(&records, "code");
        let names: Vec<_> = view.iter().map(|(_, r)| r.name().unwrap()).collect();
        assert_eq!(names, vec!["y", "x", "z"]);
    }

    #[test]
    fn all_indexes_cover_every_field() {
        let records = vec![rec("A", "Alpha"), [("extra", "1")].into_iter().collect()];
        let all = build_all_indexes(&records);
        let mut keys: Vec<_> = all.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["code", "extra", "name"]);
    }
}
