//! Presentation layer
//!
//! This module handles:
//! - Per-entry and per-group reporting while a pass runs
//! - Run headers and final summaries
//! - Silent reporting for tests
//!
//! All output goes through the [`Reporter`] trait so the reconciler never
//! prints directly. Whether colors are used is decided once, when the
//! [`ConsoleReporter`] is built.

pub mod terminal;

pub use terminal::ConsoleReporter;

use crate::domain::{AssetEntry, AssetGroup, AssetKind, Outcome, Tally};
use crate::error::AppError;

/// Kind of pass being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Install,
    Uninstall,
    Status,
}

/// Receives events from install, uninstall and status passes
pub trait Reporter {
    /// Boxed title printed at the start and end of a run
    fn header(&mut self, title: &str);

    /// A group is about to be processed
    fn group_started(&mut self, pass: Pass, group: &AssetGroup);

    /// The group's source directory does not exist
    fn source_missing(&mut self, group: &AssetGroup);

    /// Uninstall found no destination directory for the group
    fn destination_missing(&mut self, group: &AssetGroup);

    /// A group-level failure that does not stop the run
    fn problem(&mut self, error: &AppError);

    /// Result of installing or uninstalling one entry
    fn entry(&mut self, entry: &AssetEntry, outcome: &Outcome);

    /// Read-only status of one entry
    fn status_entry(&mut self, entry: &AssetEntry, installed: bool);

    /// Status totals for one group
    fn status_totals(&mut self, installed: usize, not_installed: usize);

    /// Closing tallies of an install run
    fn install_summary(&mut self, tallies: &[(AssetKind, Tally)]);

    /// Closing tallies of an uninstall run
    fn uninstall_summary(&mut self, tallies: &[(AssetKind, Tally)]);
}

/// Reporter that prints nothing
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SilentReporter;

#[cfg(test)]
impl Reporter for SilentReporter {
    fn header(&mut self, _title: &str) {}

    fn group_started(&mut self, _pass: Pass, _group: &AssetGroup) {}

    fn source_missing(&mut self, _group: &AssetGroup) {}

    fn destination_missing(&mut self, _group: &AssetGroup) {}

    fn problem(&mut self, _error: &AppError) {}

    fn entry(&mut self, _entry: &AssetEntry, _outcome: &Outcome) {}

    fn status_entry(&mut self, _entry: &AssetEntry, _installed: bool) {}

    fn status_totals(&mut self, _installed: usize, _not_installed: usize) {}

    fn install_summary(&mut self, _tallies: &[(AssetKind, Tally)]) {}

    fn uninstall_summary(&mut self, _tallies: &[(AssetKind, Tally)]) {}
}
