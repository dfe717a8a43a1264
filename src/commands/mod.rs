//! Command implementations for the manage-skills CLI
//!
//! Each command is a thin wrapper that runs one reconciler pass over every
//! asset group and prints the run header and summary.

pub mod install;
pub mod status;
pub mod uninstall;
