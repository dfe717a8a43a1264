//! File system and link errors

use std::io;
use std::path::Path;

use super::AppError;

/// Creates a catalog read error for an unreadable source root
pub fn catalog_read_failed(path: &Path, err: &io::Error) -> AppError {
    AppError::CatalogReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a link creation error, recognising the Windows privilege failure
pub fn link_create_failed(path: &Path, err: &io::Error) -> AppError {
    if is_privilege_error(err) {
        return AppError::LinkPrivilegeRequired {
            path: path.display().to_string(),
        };
    }
    AppError::LinkCreateFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a link removal error
pub fn link_remove_failed(path: &Path, err: &io::Error) -> AppError {
    AppError::LinkRemoveFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a directory creation error
pub fn create_dir_failed(path: &Path, err: &io::Error) -> AppError {
    AppError::CreateDirFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

// ERROR_PRIVILEGE_NOT_HELD (1314) is what CreateSymbolicLinkW reports
// without Developer Mode.
fn is_privilege_error(err: &io::Error) -> bool {
    cfg!(windows)
        && (err.raw_os_error() == Some(1314)
            || err.to_string().to_lowercase().contains("privilege"))
}
