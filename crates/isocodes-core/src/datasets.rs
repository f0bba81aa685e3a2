// crates/isocodes-core/src/datasets.rs

//! Typed wrappers, one per ISO dataset, and their process-wide instances.
//!
//! Every wrapper dereferences to [`Dataset`], so the [`IsoSearch`](crate::IsoSearch)
//! operations work on all of them. On top of that each wrapper offers the
//! sorted views that make sense for its fields and a `(code, name)`
//! sequence keyed by its primary code.

use crate::common::DatasetKey;
use crate::error::Result;
use crate::former::{FormerNameInfo, FormerNameResolver};
use crate::loader::DataSource;
use crate::model::{Dataset, NamePairs, Record};
use once_cell::sync::OnceCell;
use std::ops::Deref;

macro_rules! dataset_views {
    ($ty:ident, $key:expr, code = $code:literal, views { $($view:ident => $field:literal),* $(,)? }) => {
        impl $ty {
            pub const KEY: DatasetKey = $key;
            /// Field used for [`Self::names`].
            pub const CODE_FIELD: &'static str = $code;

            pub fn dataset(&self) -> &Dataset {
                &self.dataset
            }

            /// `(code, name)` pairs in dataset order; a fresh sequence per call.
            pub fn names(&self) -> NamePairs<'_> {
                self.dataset.names_by(Self::CODE_FIELD)
            }

            $(
                #[doc = concat!("Records ascending by `", $field, "`.")]
                pub fn $view(&self) -> Vec<(&str, &Record)> {
                    self.dataset.sorted_by($field)
                }
            )*
        }

        impl Deref for $ty {
            type Target = Dataset;

            fn deref(&self) -> &Dataset {
                &self.dataset
            }
        }
    };
}

macro_rules! simple_dataset {
    ($(#[$meta:meta])* $ty:ident, $key:expr, code = $code:literal, views { $($rest:tt)* }) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $ty {
            dataset: Dataset,
        }

        impl $ty {
            pub fn load(source: &DataSource) -> Result<Self> {
                Ok(Self {
                    dataset: source.load(Self::KEY)?,
                })
            }
        }

        dataset_views!($ty, $key, code = $code, views { $($rest)* });
    };
}

/// ISO 3166-1 countries, with former-name lookups backed by ISO 3166-3.
#[derive(Debug)]
pub struct Countries {
    dataset: Dataset,
    former: Dataset,
}

dataset_views!(Countries, DatasetKey::Countries, code = "alpha_2", views {
    by_alpha_2 => "alpha_2",
    by_alpha_3 => "alpha_3",
    by_common_name => "common_name",
    by_name => "name",
    by_numeric => "numeric",
});

impl Countries {
    pub fn load(source: &DataSource) -> Result<Self> {
        Ok(Self {
            dataset: source.load(DatasetKey::Countries)?,
            former: source.load(DatasetKey::FormerCountries)?,
        })
    }

    pub fn former_name_resolver(&self) -> FormerNameResolver<'_> {
        FormerNameResolver::new(&self.dataset, &self.former)
    }

    /// See [`FormerNameResolver::get_by_former_name`].
    pub fn get_by_former_name(&self, name: &str) -> Option<&Record> {
        self.former_name_resolver().get_by_former_name(name)
    }

    /// See [`FormerNameResolver::get_former_names_info`].
    pub fn get_former_names_info(&self, name: &str) -> Option<FormerNameInfo> {
        self.former_name_resolver().get_former_names_info(name)
    }

    pub fn former_names(&self) -> Vec<String> {
        self.former_name_resolver().former_names()
    }
}

simple_dataset!(
    /// ISO 3166-2 country subdivisions.
    Subdivisions, DatasetKey::Subdivisions, code = "code", views {
        by_code => "code",
        by_name => "name",
        by_type => "type",
    }
);

impl Subdivisions {
    /// Subdivisions of one country, e.g. `"US"` for all `US-*` codes.
    pub fn for_country(&self, alpha_2: &str) -> Vec<&Record> {
        let prefix = format!("{}-", alpha_2.trim().to_uppercase());
        self.iter()
            .filter(|r| r.code().is_some_and(|c| c.starts_with(&prefix)))
            .collect()
    }
}

simple_dataset!(
    /// ISO 3166-3 formerly used country names.
    FormerCountries, DatasetKey::FormerCountries, code = "alpha_2", views {
        by_alpha_2 => "alpha_2",
        by_alpha_3 => "alpha_3",
        by_alpha_4 => "alpha_4",
        by_name => "name",
        by_numeric => "numeric",
        by_withdrawal_date => "withdrawal_date",
    }
);

simple_dataset!(
    /// ISO 4217 currencies.
    Currencies, DatasetKey::Currencies, code = "alpha_3", views {
        by_alpha_3 => "alpha_3",
        by_name => "name",
        by_numeric => "numeric",
    }
);

simple_dataset!(
    /// ISO 639-2 languages.
    Languages, DatasetKey::Languages, code = "alpha_3", views {
        by_alpha_3 => "alpha_3",
        by_name => "name",
    }
);

simple_dataset!(
    /// ISO 639-3 languages.
    ExtendedLanguages, DatasetKey::ExtendedLanguages, code = "alpha_3", views {
        by_alpha_3 => "alpha_3",
        by_name => "name",
        by_scope => "scope",
        by_type => "type",
    }
);

simple_dataset!(
    /// ISO 639-5 language families and groups.
    LanguageFamilies, DatasetKey::LanguageFamilies, code = "alpha_3", views {
        by_alpha_3 => "alpha_3",
        by_name => "name",
    }
);

simple_dataset!(
    /// ISO 15924 scripts.
    Scripts, DatasetKey::Scripts, code = "alpha_4", views {
        by_alpha_4 => "alpha_4",
        by_name => "name",
        by_numeric => "numeric",
    }
);

// Single in-process cache per dataset, filled from the default source on
// first access. A failed load leaves the cell empty.
macro_rules! accessor {
    ($(#[$meta:meta])* $fn_name:ident -> $ty:ident) => {
        $(#[$meta])*
        pub fn $fn_name() -> Result<&'static $ty> {
            static CACHE: OnceCell<$ty> = OnceCell::new();
            CACHE.get_or_try_init(|| $ty::load(&DataSource::default()))
        }
    };
}

accessor!(
    /// Shared ISO 3166-1 instance.
    countries -> Countries
);
accessor!(
    /// Shared ISO 3166-2 instance.
    subdivisions -> Subdivisions
);
accessor!(
    /// Shared ISO 3166-3 instance.
    former_countries -> FormerCountries
);
accessor!(
    /// Shared ISO 4217 instance.
    currencies -> Currencies
);
accessor!(
    /// Shared ISO 639-2 instance.
    languages -> Languages
);
accessor!(
    /// Shared ISO 639-3 instance.
    extended_languages -> ExtendedLanguages
);
accessor!(
    /// Shared ISO 639-5 instance.
    language_families -> LanguageFamilies
);
accessor!(
    /// Shared ISO 15924 instance.
    scripts -> Scripts
);
