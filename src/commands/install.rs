//! Install command CLI wrapper

use crate::cli::InstallArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::prompt::{ConfirmReplace, StdinPrompt};
use crate::reconcile;
use crate::ui::Reporter;

/// Run install command
///
/// Prompts are read from stdin unless `--yes` was given. Skipped entries are
/// reported but never turn into an error; Ctrl-C at a prompt does.
pub fn run(settings: &Settings, args: &InstallArgs, reporter: &mut dyn Reporter) -> Result<()> {
    reporter.header("Installing Skills and Commands");

    let mut prompt = (!args.yes).then(StdinPrompt::detect);
    let mut tallies = Vec::new();
    for group in settings.groups() {
        let resolver = prompt.as_mut().map(|p| p as &mut dyn ConfirmReplace);
        let report = reconcile::install(&group, resolver, reporter)?;
        tallies.push((group.kind, report.tally));
    }

    reporter.install_summary(&tallies);
    Ok(())
}
