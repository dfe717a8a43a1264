//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod install;

pub use install::InstallArgs;

/// manage-skills - Claude skills and commands manager
///
/// Link skills and commands from this repository into ~/.claude.
#[derive(Parser, Debug)]
#[command(
    name = "manage-skills",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install skills and commands into ~/.claude by symlinking them",
    long_about = "Links every skill directory (with a SKILL.md) and every command file from this \
                  repository into ~/.claude, keeping the links consistent across repeated runs. \
                  Existing files are never overwritten and foreign links are only replaced \
                  after confirmation.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  manage-skills install      \x1b[90m# Install all skills and commands\x1b[0m\n   \
                  manage-skills install -y   \x1b[90m# Install without prompts\x1b[0m\n   \
                  manage-skills uninstall    \x1b[90m# Uninstall all skills and commands\x1b[0m\n   \
                  manage-skills status       \x1b[90m# Check installation status\x1b[0m\n"
)]
pub struct Cli {
    /// Repository holding the skills/ and commands/ directories
    #[arg(long, global = true, value_name = "DIR", env = "MANAGE_SKILLS_REPO")]
    pub repo: Option<PathBuf>,

    /// Directory receiving the links (defaults to ~/.claude)
    #[arg(long, global = true, value_name = "DIR", env = "MANAGE_SKILLS_CLAUDE_DIR")]
    pub claude_dir: Option<PathBuf>,

    /// When to use colors in output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install skills and commands
    Install(InstallArgs),

    /// Uninstall skills and commands
    Uninstall,

    /// Check installation status
    Status,
}

/// Color output choice
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when writing to a terminal that supports them
    Auto,
    Always,
    Never,
}
