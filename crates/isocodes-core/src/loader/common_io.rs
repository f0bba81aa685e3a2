// crates/isocodes-core/src/loader/common_io.rs
use crate::common::DatasetKey;
use crate::error::{IsoError, Result};
use crate::model::Record;
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Opens a dataset file, buffers it, and unwraps gzip when the file name
/// ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        IsoError::DatasetNotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Locates the file backing `key` inside `dir`.
///
/// The plain `iso_<key>.json` wins over `iso_<key>.json.gz`.
pub fn resolve_path(dir: &Path, key: DatasetKey) -> Option<PathBuf> {
    let plain = dir.join(key.file_name());
    if plain.is_file() {
        return Some(plain);
    }
    let gz = dir.join(format!("{}.gz", key.file_name()));
    gz.is_file().then_some(gz)
}

/// Parses an iso-codes JSON document (`{"<key>": [ {..}, .. ]}`) into
/// records, keeping source order.
pub fn parse_records<R: Read>(reader: R, key: DatasetKey) -> Result<Vec<Record>> {
    let mut doc: HashMap<String, Vec<Record>> = serde_json::from_reader(reader)?;
    doc.remove(key.as_str()).ok_or_else(|| {
        IsoError::InvalidData(format!("document has no '{}' member", key.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_keyed_member() {
        let json = r#"{"4217": [{"alpha_3": "EUR", "name": "Euro", "numeric": "978"}]}"#;
        let records = parse_records(json.as_bytes(), DatasetKey::Currencies).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].alpha_3(), Some("EUR"));
    }

    #[test]
    fn wrong_member_is_invalid_data() {
        let json = r#"{"639-2": []}"#;
        let err = parse_records(json.as_bytes(), DatasetKey::Currencies).unwrap_err();
        assert!(matches!(err, IsoError::InvalidData(_)));
    }

    #[test]
    fn non_string_values_are_rejected() {
        let json = r#"{"4217": [{"alpha_3": "EUR", "numeric": 978}]}"#;
        let err = parse_records(json.as_bytes(), DatasetKey::Currencies).unwrap_err();
        assert!(matches!(err, IsoError::Json(_)));
    }
}
