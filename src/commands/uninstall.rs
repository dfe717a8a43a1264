//! Uninstall command CLI wrapper

use crate::config::Settings;
use crate::error::Result;
use crate::reconcile;
use crate::ui::Reporter;

/// Run uninstall command
///
/// Never prompts: only links pointing at this repository are removed.
pub fn run(settings: &Settings, reporter: &mut dyn Reporter) -> Result<()> {
    reporter.header("Uninstalling Skills and Commands");

    let tallies: Vec<_> = settings
        .groups()
        .iter()
        .map(|group| (group.kind, reconcile::uninstall(group, reporter).tally))
        .collect();

    reporter.uninstall_summary(&tallies);
    Ok(())
}
