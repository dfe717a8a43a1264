//! Error types and handling for manage-skills
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Per-entry problems (a conflicting link, a refused symlink) are not errors:
//! they are recorded as outcomes and the run continues. The variants here
//! cover failures of whole operations, which callers either report for one
//! asset group or, for configuration problems and an interrupted prompt,
//! surface from `main`.
//!
//! - [`fs`]: File system and link errors

pub mod fs;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for manage-skills operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    // Configuration errors
    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(manage_skills::config::home_unavailable),
        help("Pass --claude-dir or set MANAGE_SKILLS_CLAUDE_DIR to choose the destination")
    )]
    HomeDirUnavailable,

    // Catalog errors
    #[error("Failed to read asset directory: {path}: {reason}")]
    #[diagnostic(code(manage_skills::catalog::read_failed))]
    CatalogReadFailed { path: String, reason: String },

    #[error("Invalid asset pattern {pattern}: {reason}")]
    #[diagnostic(code(manage_skills::catalog::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // Link errors
    #[error("Failed to create symlink {path}: {reason}")]
    #[diagnostic(code(manage_skills::link::create_failed))]
    LinkCreateFailed { path: String, reason: String },

    #[error("Failed to create symlink {path}: administrator privileges required")]
    #[diagnostic(
        code(manage_skills::link::privilege_required),
        help("Run as Administrator or enable Developer Mode to allow symlink creation")
    )]
    LinkPrivilegeRequired { path: String },

    #[error("Failed to remove symlink {path}: {reason}")]
    #[diagnostic(code(manage_skills::link::remove_failed))]
    LinkRemoveFailed { path: String, reason: String },

    #[error("Failed to create directory {path}: {reason}")]
    #[diagnostic(code(manage_skills::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    // Prompt errors
    #[error("Interrupted while waiting for confirmation")]
    #[diagnostic(code(manage_skills::prompt::interrupted))]
    PromptInterrupted,
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppError>;
