//! Terminal rendering of pass events

use std::fmt::Display;
use std::io::{self, Write};

use console::Style;

use super::{Pass, Reporter};
use crate::domain::{AssetEntry, AssetGroup, AssetKind, Outcome, SkipReason, Tally};
use crate::error::AppError;

const RULE_WIDTH: usize = 50;

/// Reporter writing human-readable lines to any writer
pub struct ConsoleReporter<W> {
    out: W,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn style(&self) -> Style {
        Style::new().force_styling(self.color)
    }

    fn line(&mut self, text: impl Display) {
        let _ = writeln!(self.out, "{text}");
    }

    fn green(&self, text: impl Display) -> String {
        self.style().green().apply_to(text).to_string()
    }

    fn yellow(&self, text: impl Display) -> String {
        self.style().yellow().apply_to(text).to_string()
    }

    fn red(&self, text: impl Display) -> String {
        self.style().red().apply_to(text).to_string()
    }

    fn outcome_line(&self, name: &str, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Installed => self.green(format!("✓  {name}")),
            Outcome::Replaced => self.green(format!("✓  {name} (replaced)")),
            Outcome::AlreadyInstalled => self.green(format!("✓  {name} (already installed)")),
            Outcome::Removed => self.green(format!("✓  Removed {name}")),
            Outcome::NotInstalled => format!("○  {name} (not installed)"),
            Outcome::Skipped(reason @ (SkipReason::LinkFailed(_) | SkipReason::RemoveFailed(_))) => {
                self.red(format!("✗  {name} ({reason})"))
            }
            Outcome::Skipped(reason) => self.yellow(format!("⚠  {name} ({reason})")),
            Outcome::Invalid(reason) => self.yellow(format!("⚠  {name} ({reason})")),
        }
    }

    fn summary(&mut self, title: &str, done_label: &str, tallies: &[(AssetKind, Tally)]) {
        self.header(title);
        for (kind, tally) in tallies {
            let label = format!("{}:", kind.label());
            self.line(format!(
                "  {label:<10}{done_label}: {} | Skipped: {}",
                tally.done, tally.skipped
            ));
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn header(&mut self, title: &str) {
        let rule = "═".repeat(RULE_WIDTH);
        let bold = self.style().bold();
        self.line(format!("\n{}", bold.apply_to(&rule)));
        self.line(bold.apply_to(title));
        self.line(format!("{}\n", bold.apply_to(&rule)));
    }

    fn group_started(&mut self, pass: Pass, group: &AssetGroup) {
        let label = group.kind.label();
        let title = match pass {
            Pass::Install => format!("Installing {label}..."),
            Pass::Uninstall => format!("Uninstalling {label}..."),
            Pass::Status => format!("{label} Status"),
        };
        let cyan = self.style().cyan();
        self.line(format!("\n{}", cyan.apply_to(title)));
        if pass != Pass::Uninstall {
            self.line(format!("  Source: {}", group.source_root.display()));
        }
        self.line(format!("  Target: {}\n", group.dest_root.display()));
    }

    fn source_missing(&mut self, group: &AssetGroup) {
        let text = self.yellow(format!(
            "{} directory not found: {}",
            group.kind.label(),
            group.source_root.display()
        ));
        self.line(format!("  {text}"));
    }

    fn destination_missing(&mut self, group: &AssetGroup) {
        let text = self.yellow(format!("No {} directory found", group.kind));
        self.line(format!("  {text}"));
    }

    fn problem(&mut self, error: &AppError) {
        let text = self.red(format!("✗  {error}"));
        self.line(format!("  {text}"));
    }

    fn entry(&mut self, entry: &AssetEntry, outcome: &Outcome) {
        let text = self.outcome_line(&entry.name, outcome);
        self.line(format!("  {text}"));
    }

    fn status_entry(&mut self, entry: &AssetEntry, installed: bool) {
        let text = match (&entry.invalid_reason, installed) {
            (_, true) => self.green(format!("✓  {}", entry.name)),
            (Some(reason), false) => self.red(format!("✗  {} ({reason})", entry.name)),
            (None, false) => self.red(format!("✗  {}", entry.name)),
        };
        self.line(format!("  {text}"));
    }

    fn status_totals(&mut self, installed: usize, not_installed: usize) {
        self.line(format!(
            "\n  Installed: {installed} | Not installed: {not_installed}"
        ));
    }

    fn install_summary(&mut self, tallies: &[(AssetKind, Tally)]) {
        self.summary("Installation Complete!", "Installed", tallies);
    }

    fn uninstall_summary(&mut self, tallies: &[(AssetKind, Tally)]) {
        self.summary("Uninstallation Complete!", "Removed", tallies);
    }
}
