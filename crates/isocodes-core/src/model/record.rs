// crates/isocodes-core/src/model/record.rs
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Shared sentinel returned by the legacy `get` lookup on a miss.
pub(crate) static EMPTY_RECORD: Record = Record {
    fields: BTreeMap::new(),
};

/// One row of an ISO dataset: an ordered map from field name to value.
///
/// Records are immutable once loaded. Besides typed accessors for the
/// common ISO fields, they expose the full field map so a presentation
/// layer can render any dataset uniformly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// The valid-but-empty record used as a soft "not found" value.
    pub fn empty() -> &'static Record {
        &EMPTY_RECORD
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// All `(field, value)` pairs, ordered by field name.
    pub fn iter(&self) -> RecordIter<'_> {
        RecordIter {
            inner: self.fields.iter(),
        }
    }

    /// Field names, ordered.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Projects the record onto `fields`, keeping the caller's order.
    ///
    /// Fields the record does not have are skipped.
    pub fn select<'a, S: AsRef<str>>(&'a self, fields: &'a [S]) -> Vec<(&'a str, &'a str)> {
        fields
            .iter()
            .filter_map(|f| {
                let f = f.as_ref();
                self.get(f).map(|v| (f, v))
            })
            .collect()
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    pub fn alpha_2(&self) -> Option<&str> {
        self.get("alpha_2")
    }

    pub fn alpha_3(&self) -> Option<&str> {
        self.get("alpha_3")
    }

    pub fn alpha_4(&self) -> Option<&str> {
        self.get("alpha_4")
    }

    pub fn numeric(&self) -> Option<&str> {
        self.get("numeric")
    }

    /// Subdivision code, e.g. `US-CA`.
    pub fn code(&self) -> Option<&str> {
        self.get("code")
    }

    pub fn official_name(&self) -> Option<&str> {
        self.get("official_name")
    }

    pub fn common_name(&self) -> Option<&str> {
        self.get("common_name")
    }

    pub fn flag(&self) -> Option<&str> {
        self.get("flag")
    }

    pub fn withdrawal_date(&self) -> Option<&str> {
        self.get("withdrawal_date")
    }

    pub fn comment(&self) -> Option<&str> {
        self.get("comment")
    }

    /// The `type` field (subdivision type, or language type in ISO 639-3).
    pub fn kind(&self) -> Option<&str> {
        self.get("type")
    }

    /// Parent subdivision code (ISO 3166-2), without the country prefix.
    pub fn parent(&self) -> Option<&str> {
        self.get("parent")
    }

    /// Language scope (ISO 639-3): `I`, `M` or `S`.
    pub fn scope(&self) -> Option<&str> {
        self.get("scope")
    }
}

impl From<BTreeMap<String, String>> for Record {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Iterator over the `(field, value)` pairs of a [`Record`].
pub struct RecordIter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a str, &'a str);
    type IntoIter = RecordIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
