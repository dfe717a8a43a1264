//! Common test utilities for manage-skills integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A repository and a `.claude` directory inside one temp directory
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Repository holding `skills/` and `commands/`
    pub repo: PathBuf,
    /// Destination root that receives the links
    pub claude: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace with an empty repository
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let repo = temp.path().join("repo");
        let claude = temp.path().join("home").join(".claude");
        std::fs::create_dir_all(&repo).expect("Failed to create repo directory");
        Self { temp, repo, claude }
    }

    /// Create `skills/<name>/SKILL.md`
    #[allow(dead_code)]
    pub fn create_skill(&self, name: &str) -> PathBuf {
        self.write_file(&format!("skills/{name}/SKILL.md"), &format!("# {name}\n"));
        self.repo.join("skills").join(name)
    }

    /// Create a skill directory without a SKILL.md
    #[allow(dead_code)]
    pub fn create_bare_dir(&self, name: &str) -> PathBuf {
        let path = self.repo.join("skills").join(name);
        std::fs::create_dir_all(&path).expect("Failed to create skill directory");
        path
    }

    /// Create `commands/<file>`
    #[allow(dead_code)]
    pub fn create_command(&self, file: &str) -> PathBuf {
        self.write_file(&format!("commands/{file}"), "Run the thing.\n");
        self.repo.join("commands").join(file)
    }

    /// Write a file relative to the repository
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.repo.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Path of an entry under the destination root
    #[allow(dead_code)]
    pub fn dest(&self, relative: &str) -> PathBuf {
        self.claude.join(relative)
    }

    /// Directory outside the repository for foreign link targets
    #[allow(dead_code)]
    pub fn elsewhere(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join("elsewhere").join(name);
        std::fs::create_dir_all(&path).expect("Failed to create foreign directory");
        path
    }

    /// manage-skills pointed at this workspace with colors off
    pub fn cmd(&self) -> Command {
        let mut cmd = manage_skills_cmd();
        cmd.env("MANAGE_SKILLS_REPO", &self.repo)
            .env("MANAGE_SKILLS_CLAUDE_DIR", &self.claude)
            .args(["--color", "never"]);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The manage-skills binary with no workspace overrides
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn manage_skills_cmd() -> Command {
    let mut cmd = Command::cargo_bin("manage-skills").unwrap();
    cmd.env_remove("MANAGE_SKILLS_REPO")
        .env_remove("MANAGE_SKILLS_CLAUDE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a symlink, making parent directories as needed
#[cfg(unix)]
#[allow(dead_code)]
pub fn symlink(target: &Path, link: &Path) {
    if let Some(parent) = link.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create link parent");
    }
    std::os::unix::fs::symlink(target, link).expect("Failed to create symlink");
}

/// Whether `link` is a symlink resolving to `target`
#[allow(dead_code)]
pub fn links_to(link: &Path, target: &Path) -> bool {
    let is_link = std::fs::symlink_metadata(link)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    is_link
        && match (dunce::canonicalize(link), dunce::canonicalize(target)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
}

/// Whether anything, including a dangling link, exists at `path`
#[allow(dead_code)]
pub fn exists_at(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}
