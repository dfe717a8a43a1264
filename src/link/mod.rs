//! Link probing
//!
//! Classifies what currently sits at an entry's destination relative to the
//! source it should link to. Probing never mutates anything and never fails:
//! unreadable or broken links are reported as [`LinkState::LinkedElsewhere`].

pub mod fs;

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// What was found at a destination path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    /// Nothing at the path, not even a dangling link
    Absent,
    /// A symlink resolving to the desired source
    LinkedCorrect,
    /// A symlink resolving somewhere else, or not resolving at all
    LinkedElsewhere(PathBuf),
    /// A regular file or directory
    Occupied,
}

/// Classify `destination` against `desired_source`
pub fn probe(destination: &Path, desired_source: &Path) -> LinkState {
    let metadata = match std::fs::symlink_metadata(destination) {
        Ok(metadata) => metadata,
        // A parent that is not a directory cannot hold anything either.
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            return LinkState::Absent;
        }
        Err(e) => {
            // Unknown contents are never safe to mutate.
            debug!(path = %destination.display(), error = %e, "cannot stat destination");
            return LinkState::Occupied;
        }
    };

    if !metadata.file_type().is_symlink() {
        return LinkState::Occupied;
    }

    let state = match (fs::resolve(destination), fs::resolve(desired_source)) {
        (Ok(actual), Ok(desired)) if actual == desired => LinkState::LinkedCorrect,
        (Ok(actual), _) => LinkState::LinkedElsewhere(actual),
        (Err(e), _) => {
            debug!(path = %destination.display(), error = %e, "link does not resolve");
            LinkState::LinkedElsewhere(fs::link_target(destination))
        }
    };
    trace!(path = %destination.display(), ?state, "probed");
    state
}
