//! isocodes prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::{DatasetKey, SearchHit};
pub use crate::datasets::*;
pub use crate::error::{IsoError, Result};
pub use crate::former::FormerNameInfo;
pub use crate::loader::{load, DataSource};
pub use crate::model::{Dataset, Record};
pub use crate::traits::IsoSearch;
