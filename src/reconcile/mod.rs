//! Link reconciliation
//!
//! Brings the destination tree of an asset group in line with its source
//! directory. Entries are handled one at a time, in catalog order, each one
//! probed, decided and mutated before the next is looked at. A failure on one
//! entry is recorded as its outcome and never stops the others.
//!
//! - [`install`]: link missing entries, optionally replacing foreign links
//! - [`uninstall`]: remove the links this tool would have created
//! - [`status`]: read-only view of which entries are linked

pub mod install;
pub mod status;
pub mod uninstall;


pub use install::install;
pub use status::status;
pub use uninstall::uninstall;

use crate::domain::{AssetEntry, AssetKind, Outcome, Tally};

/// Outcome of one entry, keyed by its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub name: String,
    pub outcome: Outcome,
}

/// Everything an install or uninstall pass did to one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub kind: AssetKind,
    pub entries: Vec<EntryOutcome>,
    pub tally: Tally,
}

impl GroupReport {
    pub fn new(kind: AssetKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            tally: Tally::default(),
        }
    }

    pub fn record(&mut self, entry: &AssetEntry, outcome: Outcome) {
        self.tally.record(&outcome);
        self.entries.push(EntryOutcome {
            name: entry.name.clone(),
            outcome,
        });
    }

    /// Outcome recorded for `name`, if the entry was processed
    #[cfg(test)]
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.outcome)
    }
}
