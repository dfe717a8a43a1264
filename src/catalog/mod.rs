//! Asset discovery for source directories
//!
//! This module handles:
//! - Listing the top-level entries of a group's source root in name order
//! - Keeping skill directories without a `SKILL.md` marker, tagged invalid
//! - Filtering command files to `*.md`, minus the reserved `README.md`
//!
//! Only the first level is considered; nested directories are never merged.

use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use crate::domain::asset::{COMMAND_PATTERN, RESERVED_COMMAND, SKILL_MARKER};
use crate::domain::{AssetEntry, AssetGroup, AssetKind};
use crate::error::{AppError, Result};
use crate::error::fs::catalog_read_failed;

/// Reason attached to skill directories without their marker file
pub const MISSING_MARKER: &str = "missing SKILL.md";

/// Entries found for a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catalog {
    /// The source root does not exist
    MissingRoot,
    /// Entries sorted by name, possibly none
    Entries(Vec<AssetEntry>),
}

impl Catalog {
    #[cfg(test)]
    pub fn entries(&self) -> &[AssetEntry] {
        match self {
            Catalog::MissingRoot => &[],
            Catalog::Entries(entries) => entries,
        }
    }
}

/// List the assets of `group`
///
/// A missing source root is not an error; an existing root that cannot be
/// read is.
pub fn scan(group: &AssetGroup) -> Result<Catalog> {
    let root = &group.source_root;
    if !root.exists() {
        debug!(root = %root.display(), "source root missing");
        return Ok(Catalog::MissingRoot);
    }

    if let Err(e) = std::fs::read_dir(root) {
        return Err(catalog_read_failed(root, &e));
    }

    let command_glob = Glob::new(COMMAND_PATTERN).map_err(|e| AppError::InvalidPattern {
        pattern: COMMAND_PATTERN.to_string(),
        reason: e.to_string(),
    })?;

    let mut entries = Vec::new();
    for item in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                debug!(error = %e, "ignoring unreadable entry");
                continue;
            }
        };

        let candidate = match group.kind {
            AssetKind::Skills => skill_entry(group, &item),
            AssetKind::Commands => command_entry(group, &item, &command_glob),
        };
        if let Some(entry) = candidate {
            entries.push(entry);
        }
    }

    debug!(kind = %group.kind, count = entries.len(), "scanned source root");
    Ok(Catalog::Entries(entries))
}

fn skill_entry(group: &AssetGroup, item: &DirEntry) -> Option<AssetEntry> {
    if !item.file_type().is_dir() {
        return None;
    }
    let entry = group.entry(item.file_name());
    if has_marker(item.path()) {
        Some(entry)
    } else {
        Some(entry.with_invalid_reason(MISSING_MARKER))
    }
}

fn command_entry(group: &AssetGroup, item: &DirEntry, glob: &Glob<'_>) -> Option<AssetEntry> {
    if !item.file_type().is_file() {
        return None;
    }
    let name = item.file_name().to_string_lossy();
    if name == RESERVED_COMMAND || glob.matched(&CandidatePath::from(name.as_ref())).is_none() {
        return None;
    }
    Some(group.entry(item.file_name()))
}

fn has_marker(dir: &Path) -> bool {
    dir.join(SKILL_MARKER).is_file()
}
