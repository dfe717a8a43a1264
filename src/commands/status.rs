//! Status command implementation

use crate::config::Settings;
use crate::error::Result;
use crate::reconcile;
use crate::ui::Reporter;

/// Run status command
pub fn run(settings: &Settings, reporter: &mut dyn Reporter) -> Result<()> {
    reporter.header("Installation Status");
    for group in settings.groups() {
        reconcile::status(&group, reporter);
    }
    Ok(())
}
