//! Status pass

use tracing::warn;

use crate::catalog::{self, Catalog};
use crate::domain::AssetGroup;
use crate::link::{self, LinkState};
use crate::ui::{Pass, Reporter};

/// Report, for each entry of `group`, whether it is linked to its source
///
/// Never mutates anything. Invalid entries are always reported as not
/// installed.
pub fn status(group: &AssetGroup, reporter: &mut dyn Reporter) -> Vec<(String, bool)> {
    reporter.group_started(Pass::Status, group);

    let entries = match catalog::scan(group) {
        Ok(Catalog::Entries(entries)) => entries,
        Ok(Catalog::MissingRoot) => {
            reporter.source_missing(group);
            return Vec::new();
        }
        Err(e) => {
            warn!(kind = %group.kind, error = %e, "cannot list source directory");
            reporter.problem(&e);
            return Vec::new();
        }
    };

    let statuses: Vec<(String, bool)> = entries
        .iter()
        .map(|entry| {
            let installed = entry.is_valid()
                && link::probe(&entry.destination, &entry.source) == LinkState::LinkedCorrect;
            reporter.status_entry(entry, installed);
            (entry.name.clone(), installed)
        })
        .collect();

    let installed = statuses.iter().filter(|(_, installed)| *installed).count();
    reporter.status_totals(installed, statuses.len() - installed);
    statuses
}
