// crates/isocodes-core/src/former.rs

//! # Former-Name Resolver
//!
//! Maps historical country names to current ISO 3166-1 records.
//!
//! Two sources are consulted, in order:
//! 1. A short table of renames where the codes stayed the same
//!    (e.g. Swaziland -> Eswatini, still `SZ`/`SWZ`).
//! 2. The ISO 3166-3 dataset of withdrawn names. A withdrawn entry only
//!    resolves when its code pair appears in the code translation table;
//!    dissolved or split entities (USSR, Yugoslavia, ...) stay unresolved.

use crate::model::{Dataset, Record};
use crate::traits::IsoSearch;
use serde::Serialize;
use std::collections::BTreeSet;

/// A rename that kept the country's codes.
#[derive(Debug, Clone, Copy)]
struct Rename {
    former_name: &'static str,
    alpha_2: &'static str,
    change_date: &'static str,
    comment: &'static str,
}

const RENAMES: &[Rename] = &[
    Rename {
        former_name: "Swaziland",
        alpha_2: "SZ",
        change_date: "2018-04-19",
        comment: "Name change from Swaziland to Eswatini",
    },
    Rename {
        former_name: "Macedonia",
        alpha_2: "MK",
        change_date: "2019-02-12",
        comment: "Name change from Macedonia to North Macedonia",
    },
    Rename {
        former_name: "The former Yugoslav Republic of Macedonia",
        alpha_2: "MK",
        change_date: "2019-02-12",
        comment: "Name change from the former Yugoslav Republic of Macedonia to North Macedonia",
    },
    Rename {
        former_name: "Cape Verde",
        alpha_2: "CV",
        change_date: "2013-10-24",
        comment: "Name change from Cape Verde to Cabo Verde",
    },
    Rename {
        former_name: "Czech Republic",
        alpha_2: "CZ",
        change_date: "2016-07-05",
        comment: "Name change from Czech Republic to Czechia",
    },
    Rename {
        former_name: "Turkey",
        alpha_2: "TR",
        change_date: "2022-06-01",
        comment: "Name change from Turkey to Türkiye",
    },
];

/// `(former alpha_2, former alpha_3) -> (current alpha_2, current alpha_3)`
/// for countries whose codes changed along with the name.
const CODE_CHANGES: &[((&str, &str), (&str, &str))] = &[
    (("BU", "BUR"), ("MM", "MMR")),
    (("BY", "BYS"), ("BY", "BLR")),
    (("DY", "DHY"), ("BJ", "BEN")),
    (("HV", "HVO"), ("BF", "BFA")),
    (("NH", "NHB"), ("VU", "VUT")),
    (("RH", "RHO"), ("ZW", "ZWE")),
    (("TP", "TMP"), ("TL", "TLS")),
    (("ZR", "ZAR"), ("CD", "COD")),
];

/// Leading words dropped when listing former names.
const CEREMONIAL_PREFIXES: &[&str] = &[
    "People's Democratic Republic of ",
    "Socialist Republic of ",
    "Democratic Republic of ",
    "Republic of ",
    "Union of ",
    "Kingdom of ",
];

/// Current codes for a former code pair, if the country lives on under
/// new codes.
pub fn current_codes(former_alpha_2: &str, former_alpha_3: &str) -> Option<(&'static str, &'static str)> {
    CODE_CHANGES
        .iter()
        .find(|((a2, a3), _)| *a2 == former_alpha_2 && *a3 == former_alpha_3)
        .map(|(_, current)| *current)
}

/// Historical details behind a former name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormerNameInfo {
    pub former_name: String,
    /// Preserved current code for renames, former code for withdrawn entries.
    pub alpha_2: String,
    pub alpha_3: String,
    pub alpha_4: Option<String>,
    pub current_name: Option<String>,
    pub current_alpha_2: Option<String>,
    pub current_alpha_3: Option<String>,
    /// Rename date, or the ISO 3166-3 withdrawal date.
    pub change_date: String,
    pub comment: Option<String>,
}

/// Resolves former names against a countries dataset and the ISO 3166-3
/// dataset.
#[derive(Debug, Clone, Copy)]
pub struct FormerNameResolver<'a> {
    countries: &'a Dataset,
    former: &'a Dataset,
}

impl<'a> FormerNameResolver<'a> {
    pub fn new(countries: &'a Dataset, former: &'a Dataset) -> Self {
        Self { countries, former }
    }

    /// Current record for a former country name.
    ///
    /// Matching is case-sensitive. Returns `None` for empty input, unknown
    /// names, and entities that were dissolved rather than renamed.
    pub fn get_by_former_name(&self, name: &str) -> Option<&'a Record> {
        if name.trim().is_empty() {
            return None;
        }

        let countries = self.countries;
        if let Some(rename) = find_rename(name) {
            return countries.find("alpha_2", rename.alpha_2);
        }

        self.former_matches(name)
            .find_map(|entry| self.successor(entry))
    }

    /// Historical mapping details for a former country name.
    ///
    /// Same matching as [`Self::get_by_former_name`], but withdrawn entries
    /// without a successor are still reported (with no current name).
    pub fn get_former_names_info(&self, name: &str) -> Option<FormerNameInfo> {
        if name.trim().is_empty() {
            return None;
        }

        if let Some(rename) = find_rename(name) {
            let countries = self.countries;
            let current = countries.find("alpha_2", rename.alpha_2);
            return Some(FormerNameInfo {
                former_name: rename.former_name.to_owned(),
                alpha_2: rename.alpha_2.to_owned(),
                alpha_3: owned(current.and_then(Record::alpha_3)).unwrap_or_default(),
                alpha_4: None,
                current_name: owned(current.and_then(Record::name)),
                current_alpha_2: owned(current.and_then(Record::alpha_2)),
                current_alpha_3: owned(current.and_then(Record::alpha_3)),
                change_date: rename.change_date.to_owned(),
                comment: Some(rename.comment.to_owned()),
            });
        }

        let entry = self.former_matches(name).next()?;
        let current = self.successor(entry);
        Some(FormerNameInfo {
            former_name: entry.name().unwrap_or_default().to_owned(),
            alpha_2: entry.alpha_2().unwrap_or_default().to_owned(),
            alpha_3: entry.alpha_3().unwrap_or_default().to_owned(),
            alpha_4: owned(entry.alpha_4()),
            current_name: owned(current.and_then(Record::name)),
            current_alpha_2: owned(current.and_then(Record::alpha_2)),
            current_alpha_3: owned(current.and_then(Record::alpha_3)),
            change_date: entry.withdrawal_date().unwrap_or_default().to_owned(),
            comment: owned(entry.comment()),
        })
    }

    /// Known former names, sorted and deduplicated.
    ///
    /// Combines the rename table with ISO 3166-3 names cut to their first
    /// comma-separated segment, minus ceremonial prefixes
    /// (`"Burma, Socialist Republic of the Union of"` -> `"Burma"`).
    pub fn former_names(&self) -> Vec<String> {
        let mut names: BTreeSet<String> =
            RENAMES.iter().map(|r| r.former_name.to_owned()).collect();
        names.extend(
            self.former
                .iter()
                .filter_map(Record::name)
                .map(clean_former_name)
                .filter(|n| !n.is_empty())
                .map(str::to_owned),
        );
        names.into_iter().collect()
    }

    fn former_matches<'q>(&self, name: &'q str) -> impl Iterator<Item = &'a Record> + 'q
    where
        'a: 'q,
    {
        let former = self.former;
        former
            .iter()
            .filter(move |entry| entry.name().is_some_and(|n| n.contains(name)))
    }

    fn successor(&self, entry: &Record) -> Option<&'a Record> {
        let (a2, a3) = current_codes(entry.alpha_2()?, entry.alpha_3()?)?;
        let countries = self.countries;
        countries
            .find("alpha_2", a2)
            .filter(|c| c.alpha_3() == Some(a3))
    }
}

fn find_rename(name: &str) -> Option<&'static Rename> {
    RENAMES.iter().find(|r| r.former_name == name)
}

fn owned(s: Option<&str>) -> Option<String> {
    s.map(str::to_owned)
}

fn clean_former_name(raw: &str) -> &str {
    let first = raw.split(',').next().unwrap_or(raw).trim();
    CEREMONIAL_PREFIXES
        .iter()
        .find_map(|p| first.strip_prefix(p))
        .unwrap_or(first)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DatasetKey;

    fn rec(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().copied().collect()
    }

    fn fixtures() -> (Dataset, Dataset) {
        let countries = Dataset::new(
            DatasetKey::Countries,
            vec![
                rec(&[("alpha_2", "SZ"), ("alpha_3", "SWZ"), ("name", "Eswatini")]),
                rec(&[("alpha_2", "MM"), ("alpha_3", "MMR"), ("name", "Myanmar")]),
            ],
        );
        let former = Dataset::new(
            DatasetKey::FormerCountries,
            vec![
                rec(&[
                    ("alpha_2", "BU"),
                    ("alpha_3", "BUR"),
                    ("alpha_4", "BUMM"),
                    ("name", "Burma, Socialist Republic of the Union of"),
                    ("withdrawal_date", "1989-12-05"),
                ]),
                rec(&[
                    ("alpha_2", "SU"),
                    ("alpha_3", "SUN"),
                    ("alpha_4", "SUHH"),
                    ("name", "USSR, Union of Soviet Socialist Republics"),
                    ("withdrawal_date", "1992-08-30"),
                ]),
                rec(&[
                    ("alpha_2", "HV"),
                    ("alpha_3", "HVO"),
                    ("name", "Upper Volta, Republic of"),
                ]),
            ],
        );
        (countries, former)
    }

    #[test]
    fn rename_table_resolves_via_preserved_code() {
        let (countries, former) = fixtures();
        let resolver = FormerNameResolver::new(&countries, &former);
        let hit = resolver.get_by_former_name("Swaziland").unwrap();
        assert_eq!(hit.name(), Some("Eswatini"));
        assert!(resolver.get_by_former_name("swaziland").is_none());
    }

    #[test]
    fn withdrawn_entries_resolve_through_code_changes() {
        let (countries, former) = fixtures();
        let resolver = FormerNameResolver::new(&countries, &former);
        assert_eq!(
            resolver.get_by_former_name("Burma").and_then(Record::alpha_3),
            Some("MMR")
        );
        // Dissolved: no successor is guessed.
        assert!(resolver.get_by_former_name("USSR").is_none());
        // Successor code pair known, but not present in this countries set.
        assert!(resolver.get_by_former_name("Upper Volta").is_none());
        assert!(resolver.get_by_former_name("").is_none());
    }

    #[test]
    fn info_reports_unresolved_entities_too() {
        let (countries, former) = fixtures();
        let resolver = FormerNameResolver::new(&countries, &former);
        let info = resolver.get_former_names_info("USSR").unwrap();
        assert_eq!(info.alpha_2, "SU");
        assert_eq!(info.current_name, None);
        assert_eq!(info.change_date, "1992-08-30");
        assert!(resolver.get_former_names_info("Atlantis").is_none());
    }

    #[test]
    fn former_names_are_cleaned_and_sorted() {
        let (countries, former) = fixtures();
        let names = FormerNameResolver::new(&countries, &former).former_names();
        assert!(names.contains(&"Burma".to_owned()));
        assert!(names.contains(&"Upper Volta".to_owned()));
        assert!(names.contains(&"USSR".to_owned()));
        assert!(names.contains(&"Swaziland".to_owned()));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn prefixes_are_stripped() {
        assert_eq!(clean_former_name("Republic of Nowhere"), "Nowhere");
        assert_eq!(clean_former_name("Zaire, Republic of"), "Zaire");
    }
}
