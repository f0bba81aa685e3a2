// crates/isocodes-core/src/loader/embedded.rs

// ---------------------------------------------------------------------------
// FILE GUARD: only compiled with the 'embedded' feature.
// ---------------------------------------------------------------------------
#![cfg(feature = "embedded")]

use crate::common::DatasetKey;

/// Gzipped JSON for `key`, compiled into the binary.
pub(super) fn bytes_for(key: DatasetKey) -> &'static [u8] {
    match key {
        DatasetKey::Countries => include_bytes!("../../data/iso_3166-1.json.gz"),
        DatasetKey::Subdivisions => include_bytes!("../../data/iso_3166-2.json.gz"),
        DatasetKey::FormerCountries => include_bytes!("../../data/iso_3166-3.json.gz"),
        DatasetKey::Currencies => include_bytes!("../../data/iso_4217.json.gz"),
        DatasetKey::Languages => include_bytes!("../../data/iso_639-2.json.gz"),
        DatasetKey::ExtendedLanguages => include_bytes!("../../data/iso_639-3.json.gz"),
        DatasetKey::LanguageFamilies => include_bytes!("../../data/iso_639-5.json.gz"),
        DatasetKey::Scripts => include_bytes!("../../data/iso_15924.json.gz"),
    }
}
