// crates/isocodes-core/src/lib.rs

//! # isocodes-core
//!
//! Read-only, in-memory lookups over the ISO reference datasets shipped by
//! the iso-codes project: countries (3166-1), subdivisions (3166-2), former
//! countries (3166-3), currencies (4217), languages (639-2, 639-3, 639-5)
//! and scripts (15924).
//!
//! ```rust
//! use isocodes_core::{countries, IsoSearch};
//!
//! let countries = countries().unwrap();
//! let us = countries.find("alpha_2", "US").unwrap();
//! assert_eq!(us.official_name(), Some("United States of America"));
//!
//! let eswatini = countries.get_by_former_name("Swaziland").unwrap();
//! assert_eq!(eswatini.alpha_3(), Some("SWZ"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod datasets;
pub mod error;
pub mod former;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{DatasetKey, DatasetStats, SearchHit};
pub use crate::datasets::{
    countries, currencies, extended_languages, former_countries, language_families, languages,
    scripts, subdivisions, Countries, Currencies, ExtendedLanguages, FormerCountries,
    LanguageFamilies, Languages, Scripts, Subdivisions,
};
pub use crate::error::{IsoError, Result};
pub use crate::former::{FormerNameInfo, FormerNameResolver};
pub use crate::loader::{load, DataSource};
pub use crate::model::{Dataset, FieldIndex, NamePairs, Record};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::IsoSearch;
