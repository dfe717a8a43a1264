//! Per-entry outcomes of install and uninstall passes

use std::fmt;
use std::path::PathBuf;

/// Why an entry was left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Destination is a regular file or directory
    Occupied,
    /// Operator answered no to replacing a foreign link
    DeclinedReplace,
    /// Destination links elsewhere and prompting was disabled
    ConflictUnattended(PathBuf),
    /// Uninstall found a link that is not ours
    PointsElsewhere(PathBuf),
    /// Uninstall found a non-link at the destination
    NotALink,
    /// The OS refused to create the link
    LinkFailed(String),
    /// The OS refused to remove the link
    RemoveFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Occupied => f.write_str("exists as file/directory"),
            SkipReason::DeclinedReplace => f.write_str("replace declined"),
            SkipReason::ConflictUnattended(target) => {
                write!(f, "points to: {}", target.display())
            }
            SkipReason::PointsElsewhere(target) => {
                write!(f, "points elsewhere: {}", target.display())
            }
            SkipReason::NotALink => f.write_str("not a symlink"),
            SkipReason::LinkFailed(reason) | SkipReason::RemoveFailed(reason) => {
                f.write_str(reason)
            }
        }
    }
}

/// Result of reconciling one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    /// A foreign link was replaced after confirmation
    Replaced,
    AlreadyInstalled,
    Removed,
    NotInstalled,
    Skipped(SkipReason),
    Invalid(String),
}

impl Outcome {
    /// Whether the entry ends up linked to its source
    pub fn is_installed(&self) -> bool {
        matches!(
            self,
            Outcome::Installed | Outcome::Replaced | Outcome::AlreadyInstalled
        )
    }

    /// Whether the entry counts towards the skipped tally
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_) | Outcome::Invalid(_))
    }
}

/// Aggregate counts for one group
///
/// `done` is the installed count for install passes and the removed count for
/// uninstall passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub done: usize,
    pub skipped: usize,
}

impl Tally {
    #[cfg(test)]
    pub fn new(done: usize, skipped: usize) -> Self {
        Self { done, skipped }
    }

    pub fn record(&mut self, outcome: &Outcome) {
        if outcome.is_skipped() {
            self.skipped += 1;
        } else if outcome.is_installed() || *outcome == Outcome::Removed {
            self.done += 1;
        }
    }
}
