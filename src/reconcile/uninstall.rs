//! Uninstall pass

use tracing::{debug, info, warn};

use super::GroupReport;
use crate::catalog::{self, Catalog};
use crate::domain::{AssetEntry, AssetGroup, Outcome, SkipReason};
use crate::link::{self, LinkState, fs as link_fs};
use crate::ui::{Pass, Reporter};

/// Remove the links of `group` that point at their source entries
///
/// Invalid entries are included so a skill that lost its marker can still be
/// cleaned up. Anything that is not a link to our source is reported and left
/// in place.
pub fn uninstall(group: &AssetGroup, reporter: &mut dyn Reporter) -> GroupReport {
    let mut report = GroupReport::new(group.kind);
    reporter.group_started(Pass::Uninstall, group);

    if !group.dest_root.exists() {
        reporter.destination_missing(group);
        return report;
    }

    let entries = match catalog::scan(group) {
        Ok(Catalog::Entries(entries)) => entries,
        Ok(Catalog::MissingRoot) => {
            reporter.source_missing(group);
            return report;
        }
        Err(e) => {
            warn!(kind = %group.kind, error = %e, "cannot list source directory");
            reporter.problem(&e);
            return report;
        }
    };

    for entry in &entries {
        let outcome = uninstall_entry(entry);
        reporter.entry(entry, &outcome);
        report.record(entry, outcome);
    }

    debug!(kind = %group.kind, tally = ?report.tally, "uninstall pass done");
    report
}

fn uninstall_entry(entry: &AssetEntry) -> Outcome {
    let state = link::probe(&entry.destination, &entry.source);
    debug!(name = %entry.name, ?state, "uninstall probe");

    match state {
        LinkState::LinkedCorrect => match link_fs::remove_link(&entry.destination) {
            Ok(()) => {
                info!(name = %entry.name, "link removed");
                Outcome::Removed
            }
            Err(e) => {
                warn!(name = %entry.name, error = %e, "remove failed");
                Outcome::Skipped(SkipReason::RemoveFailed(e.to_string()))
            }
        },
        LinkState::LinkedElsewhere(target) => Outcome::Skipped(SkipReason::PointsElsewhere(target)),
        LinkState::Occupied => Outcome::Skipped(SkipReason::NotALink),
        LinkState::Absent => Outcome::NotInstalled,
    }
}
