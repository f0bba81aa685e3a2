// crates/isocodes-core/src/common.rs
use crate::error::IsoError;
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of bundled ISO datasets.
///
/// Each variant maps to one `iso_<key>.json` file; the key string is also
/// the top-level member of that JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DatasetKey {
    /// ISO 3166-1 countries.
    #[serde(rename = "3166-1")]
    Countries,
    /// ISO 3166-2 country subdivisions.
    #[serde(rename = "3166-2")]
    Subdivisions,
    /// ISO 3166-3 formerly used country names and codes.
    #[serde(rename = "3166-3")]
    FormerCountries,
    /// ISO 4217 currencies.
    #[serde(rename = "4217")]
    Currencies,
    /// ISO 639-2 languages.
    #[serde(rename = "639-2")]
    Languages,
    /// ISO 639-3 languages.
    #[serde(rename = "639-3")]
    ExtendedLanguages,
    /// ISO 639-5 language families and groups.
    #[serde(rename = "639-5")]
    LanguageFamilies,
    /// ISO 15924 scripts.
    #[serde(rename = "15924")]
    Scripts,
}

impl DatasetKey {
    pub const ALL: [DatasetKey; 8] = [
        DatasetKey::Countries,
        DatasetKey::Subdivisions,
        DatasetKey::FormerCountries,
        DatasetKey::Currencies,
        DatasetKey::Languages,
        DatasetKey::ExtendedLanguages,
        DatasetKey::LanguageFamilies,
        DatasetKey::Scripts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKey::Countries => "3166-1",
            DatasetKey::Subdivisions => "3166-2",
            DatasetKey::FormerCountries => "3166-3",
            DatasetKey::Currencies => "4217",
            DatasetKey::Languages => "639-2",
            DatasetKey::ExtendedLanguages => "639-3",
            DatasetKey::LanguageFamilies => "639-5",
            DatasetKey::Scripts => "15924",
        }
    }

    /// File name of the uncompressed source, e.g. `iso_3166-1.json`.
    pub fn file_name(self) -> String {
        format!("iso_{}.json", self.as_str())
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DatasetKey {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| IsoError::DatasetNotFound(format!("unknown dataset key '{s}'")))
    }
}

/// Simple aggregate statistics for a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub key: DatasetKey,
    pub records: usize,
    /// Distinct field names seen across all records, sorted.
    pub fields: Vec<String>,
}

/// A relevance-ranked result of [`IsoSearch::smart_search`](crate::traits::IsoSearch::smart_search).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub score: u8,
    pub record: &'a Record,
}
