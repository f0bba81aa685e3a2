//! isocodes-cli
//! ============
//!
//! Command-line interface for the `isocodes-core` ISO reference data
//! library.
//!
//! This crate primarily provides a binary (`isocodes`). The library target
//! only exists so that docs.rs renders this overview. See the README for
//! full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! isocodes --help
//! isocodes countries --code US
//! isocodes --format json languages --name German
//! isocodes subdivisions --country CH --limit 5
//! isocodes countries --former-name Swaziland
//! ```
//!
//! For programmatic access to the datasets and the query API, use the
//! [`isocodes-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
