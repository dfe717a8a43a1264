//! Symlink primitives
//!
//! Every path comparison in the crate goes through [`resolve`], so the prober
//! and the prompt always agree on what a link points at.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::error::fs::{create_dir_failed, link_create_failed, link_remove_failed};

/// Canonicalize a path, following every symlink on the way
///
/// Uses `dunce` so Windows paths come back without the `\\?\` prefix and
/// compare equal to paths built by hand.
pub fn resolve(path: &Path) -> io::Result<PathBuf> {
    dunce::canonicalize(path)
}

/// Best-effort description of where a link points, for display
///
/// Falls back to the raw link text when the target cannot be resolved.
pub fn link_target(link: &Path) -> PathBuf {
    resolve(link)
        .or_else(|_| fs::read_link(link))
        .unwrap_or_else(|_| link.to_path_buf())
}

/// Create `dir` and its parents; succeeds when it already exists
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| create_dir_failed(dir, &e))
}

/// Create a symlink at `link` pointing at `source`
pub fn create_link(source: &Path, link: &Path) -> Result<()> {
    symlink(source, link).map_err(|e| link_create_failed(link, &e))
}

/// Remove the symlink at `link` without touching its target
pub fn remove_link(link: &Path) -> Result<()> {
    unlink(link).map_err(|e| link_remove_failed(link, &e))
}

#[cfg(unix)]
fn symlink(source: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(source, link)
}

#[cfg(windows)]
fn symlink(source: &Path, link: &Path) -> io::Result<()> {
    if source.is_dir() {
        std::os::windows::fs::symlink_dir(source, link)
    } else {
        std::os::windows::fs::symlink_file(source, link)
    }
}

#[cfg(unix)]
fn unlink(link: &Path) -> io::Result<()> {
    fs::remove_file(link)
}

#[cfg(windows)]
fn unlink(link: &Path) -> io::Result<()> {
    use std::os::windows::fs::FileTypeExt;

    if fs::symlink_metadata(link)?.file_type().is_symlink_dir() {
        fs::remove_dir(link)
    } else {
        fs::remove_file(link)
    }
}
