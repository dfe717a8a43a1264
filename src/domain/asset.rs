//! Asset domain types
//!
//! An [`AssetGroup`] pairs a source directory in the repository with its
//! destination under `~/.claude`. Each member of a group is an [`AssetEntry`].

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Marker file that makes a directory a valid skill
pub const SKILL_MARKER: &str = "SKILL.md";

/// Name pattern for command files
pub const COMMAND_PATTERN: &str = "*.md";

/// The single command file name that is never installed
pub const RESERVED_COMMAND: &str = "README.md";

/// Kind of assets held by a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Directories containing a `SKILL.md` marker
    Skills,
    /// Markdown files, `README.md` excluded
    Commands,
}

impl AssetKind {
    /// Directory name used both in the repository and under `~/.claude`
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetKind::Skills => "skills",
            AssetKind::Commands => "commands",
        }
    }

    /// Capitalised label for section headers and summaries
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Skills => "Skills",
            AssetKind::Commands => "Commands",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A source directory and the destination its entries are linked into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetGroup {
    pub kind: AssetKind,
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
}

impl AssetGroup {
    pub fn new(kind: AssetKind, source_root: PathBuf, dest_root: PathBuf) -> Self {
        Self {
            kind,
            source_root,
            dest_root,
        }
    }

    /// Build the group for `kind` from a repository root and a `~/.claude` root
    pub fn for_roots(kind: AssetKind, repo_root: &Path, claude_dir: &Path) -> Self {
        Self::new(
            kind,
            repo_root.join(kind.dir_name()),
            claude_dir.join(kind.dir_name()),
        )
    }

    /// Build the entry for a file name found under the source root
    pub fn entry(&self, file_name: &OsStr) -> AssetEntry {
        AssetEntry {
            name: file_name.to_string_lossy().into_owned(),
            source: self.source_root.join(file_name),
            destination: self.dest_root.join(file_name),
            invalid_reason: None,
        }
    }
}

/// One member of an asset group
///
/// The name is the file or directory name exactly as found on disk and is the
/// identity of the entry within its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Set when the entry is listed but must not be installed
    pub invalid_reason: Option<String>,
}

impl AssetEntry {
    pub fn is_valid(&self) -> bool {
        self.invalid_reason.is_none()
    }

    pub fn with_invalid_reason(mut self, reason: impl Into<String>) -> Self {
        self.invalid_reason = Some(reason.into());
        self
    }
}
