//! Domain models for manage-skills
//!
//! This module contains the plain data types the catalog, prober and
//! reconciler pass between each other. None of them survive a run: the
//! symbolic links on disk are the only persisted state.

pub mod asset;
pub mod outcome;

pub use asset::{AssetEntry, AssetGroup, AssetKind};
pub use outcome::{Outcome, SkipReason, Tally};
