//! Install pass

use tracing::{debug, info, warn};

use super::GroupReport;
use crate::catalog::{self, Catalog};
use crate::domain::{AssetEntry, AssetGroup, Outcome, SkipReason};
use crate::error::Result;
use crate::link::{self, LinkState, fs as link_fs};
use crate::prompt::ConfirmReplace;
use crate::ui::{Pass, Reporter};

/// Link every valid entry of `group` into its destination root
///
/// With a `resolver`, links pointing elsewhere are replaced when the operator
/// agrees. Without one they are always left alone. Regular files and
/// directories at a destination are never touched.
///
/// Only an interrupted prompt is an error; it stops the pass at that entry.
pub fn install(
    group: &AssetGroup,
    mut resolver: Option<&mut dyn ConfirmReplace>,
    reporter: &mut dyn Reporter,
) -> Result<GroupReport> {
    let mut report = GroupReport::new(group.kind);
    reporter.group_started(Pass::Install, group);

    let entries = match catalog::scan(group) {
        Ok(Catalog::Entries(entries)) => entries,
        Ok(Catalog::MissingRoot) => {
            reporter.source_missing(group);
            return Ok(report);
        }
        Err(e) => {
            warn!(kind = %group.kind, error = %e, "cannot list source directory");
            reporter.problem(&e);
            return Ok(report);
        }
    };

    // Creation failures show up again on every entry's link attempt.
    if let Err(e) = link_fs::ensure_dir(&group.dest_root) {
        warn!(error = %e, "cannot create destination root");
        reporter.problem(&e);
    }

    for entry in &entries {
        let outcome = install_entry(entry, &mut resolver)?;
        reporter.entry(entry, &outcome);
        report.record(entry, outcome);
    }

    debug!(kind = %group.kind, tally = ?report.tally, "install pass done");
    Ok(report)
}

fn install_entry(
    entry: &AssetEntry,
    resolver: &mut Option<&mut dyn ConfirmReplace>,
) -> Result<Outcome> {
    if let Some(reason) = &entry.invalid_reason {
        return Ok(Outcome::Invalid(reason.clone()));
    }

    let state = link::probe(&entry.destination, &entry.source);
    debug!(name = %entry.name, ?state, "install probe");

    let outcome = match state {
        LinkState::LinkedCorrect => Outcome::AlreadyInstalled,
        LinkState::Occupied => Outcome::Skipped(SkipReason::Occupied),
        LinkState::Absent => match link_fs::create_link(&entry.source, &entry.destination) {
            Ok(()) => {
                info!(name = %entry.name, "linked");
                Outcome::Installed
            }
            Err(e) => {
                warn!(name = %entry.name, error = %e, "link failed");
                Outcome::Skipped(SkipReason::LinkFailed(e.to_string()))
            }
        },
        LinkState::LinkedElsewhere(target) => match resolver {
            None => Outcome::Skipped(SkipReason::ConflictUnattended(target)),
            Some(resolver) => {
                if resolver.confirm_replace(&entry.name, &target)? {
                    replace_link(entry)
                } else {
                    debug!(name = %entry.name, "replace declined");
                    Outcome::Skipped(SkipReason::DeclinedReplace)
                }
            }
        },
    };
    Ok(outcome)
}

fn replace_link(entry: &AssetEntry) -> Outcome {
    if let Err(e) = link_fs::remove_link(&entry.destination) {
        warn!(name = %entry.name, error = %e, "could not remove old link");
        return Outcome::Skipped(SkipReason::RemoveFailed(e.to_string()));
    }
    match link_fs::create_link(&entry.source, &entry.destination) {
        Ok(()) => {
            info!(name = %entry.name, "link replaced");
            Outcome::Replaced
        }
        Err(e) => {
            warn!(name = %entry.name, error = %e, "old link removed but new link failed");
            Outcome::Skipped(SkipReason::LinkFailed(e.to_string()))
        }
    }
}
