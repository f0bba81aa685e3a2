//! Umbrella crate for the isocodes workspace; re-exports `isocodes-core`
//! so the demos can `use isocodes_rs::prelude::*`.
pub use isocodes_core::*;
