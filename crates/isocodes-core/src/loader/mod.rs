// crates/isocodes-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (embedded bytes or files, gzip) and hands
//! the decoded JSON to the record parser.

use crate::common::DatasetKey;
use crate::error::{IsoError, Result};
use crate::model::Dataset;
use log::debug;
use std::path::{Path, PathBuf};

pub mod common_io;

#[cfg(feature = "embedded")]
mod embedded;

pub const DATA_REPO_URL: &str = "https://salsa.debian.org/iso-codes-team/iso-codes";

/// Where raw dataset records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The gzipped files under `data/`, compiled into the binary.
    #[cfg(feature = "embedded")]
    Embedded,
    /// A directory with `iso_<key>.json` or `iso_<key>.json.gz` files.
    Directory(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        #[cfg(feature = "embedded")]
        {
            DataSource::Embedded
        }

        #[cfg(not(feature = "embedded"))]
        {
            DataSource::Directory(Self::default_data_dir())
        }
    }
}

impl DataSource {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        DataSource::Directory(path.into())
    }

    pub fn get_3rd_party_data_url() -> &'static str {
        DATA_REPO_URL
    }

    /// Loads one dataset. Each call parses afresh; nothing is shared.
    pub fn load(&self, key: DatasetKey) -> Result<Dataset> {
        let records = match self {
            #[cfg(feature = "embedded")]
            DataSource::Embedded => {
                let gz = flate2::read::GzDecoder::new(embedded::bytes_for(key));
                common_io::parse_records(gz, key)?
            }
            DataSource::Directory(dir) => load_from_dir(dir, key)?,
        };
        debug!("Loaded dataset {key} from {self:?}: {} records", records.len());
        Ok(Dataset::new(key, records))
    }

    /// Like [`DataSource::load`], for a key given as text (e.g. `"3166-1"`).
    pub fn load_key(&self, key: &str) -> Result<Dataset> {
        self.load(key.parse()?)
    }
}

fn load_from_dir(dir: &Path, key: DatasetKey) -> Result<Vec<crate::model::Record>> {
    let path = common_io::resolve_path(dir, key).ok_or_else(|| {
        IsoError::DatasetNotFound(format!(
            "no {} (or .gz) in {}",
            key.file_name(),
            dir.display()
        ))
    })?;
    let reader = common_io::open_stream(&path)?;
    common_io::parse_records(reader, key)
}

/// Loads `key` from the default data source.
///
/// Fails with [`IsoError::DatasetNotFound`] for keys outside the known set.
pub fn load(key: &str) -> Result<Dataset> {
    DataSource::default().load_key(key)
}
