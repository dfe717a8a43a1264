//! Run configuration
//!
//! Resolves, once per invocation, where assets come from and where they are
//! linked to:
//! - repository root: `--repo`, `MANAGE_SKILLS_REPO`, or the directory this
//!   installer was built from
//! - destination root: `--claude-dir`, `MANAGE_SKILLS_CLAUDE_DIR`, or
//!   `~/.claude`
//!
//! No configuration files are read.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::{Cli, ColorMode};
use crate::domain::{AssetGroup, AssetKind};
use crate::error::{AppError, Result};

/// Directory under the home directory that receives the links
pub const CLAUDE_DIR: &str = ".claude";

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repo_root: PathBuf,
    pub claude_dir: PathBuf,
    pub color: bool,
}

impl Settings {
    /// Resolve settings from parsed arguments
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let repo_root = match &cli.repo {
            Some(path) => absolute(path),
            None => default_repo_root(),
        };
        let claude_dir = match &cli.claude_dir {
            Some(path) => absolute(path),
            None => default_claude_dir()?,
        };
        let color = match cli.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => console::colors_enabled(),
        };

        let settings = Self {
            repo_root,
            claude_dir,
            color,
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }

    /// Skills first, then commands
    pub fn groups(&self) -> [AssetGroup; 2] {
        [AssetKind::Skills, AssetKind::Commands]
            .map(|kind| AssetGroup::for_roots(kind, &self.repo_root, &self.claude_dir))
    }
}

/// The repository this installer lives in
pub fn default_repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// `~/.claude` for the invoking user
pub fn default_claude_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CLAUDE_DIR))
        .ok_or(AppError::HomeDirUnavailable)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
