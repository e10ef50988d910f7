//! Common test utilities for integration tests.
//!
//! This module provides a sandboxed [`Platform`] and environment helpers for
//! testing the tecfs library against a real, temporary filesystem.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tecfs::Platform;

/// A platform whose special folders and executable live inside a temporary
/// directory. Existence checks and directory creation hit the real
/// filesystem.
pub struct SandboxPlatform {
    root: TempDir,
    executable: Option<PathBuf>,
}

#[allow(dead_code)]
impl SandboxPlatform {
    /// Create a sandbox with the executable at `<root>/game/bin/tec`.
    pub fn new() -> io::Result<Self> {
        let root = tempfile::tempdir()?;
        let bin = root.path().join("game").join("bin");
        fs::create_dir_all(&bin)?;
        let executable = Some(bin.join("tec"));
        Ok(Self { root, executable })
    }

    /// Pretend the executable location is unknown.
    pub fn without_executable(mut self) -> Self {
        self.executable = None;
        self
    }

    /// Root of the sandbox.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding the fake executable.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join("game").join("bin")
    }

    /// Create `relative` (and its parents) under the sandbox root.
    pub fn create(&self, relative: &str) -> io::Result<PathBuf> {
        let dir = self.root.path().join(relative);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn home(&self, kind: &str, app_name: &str) -> PathBuf {
        self.root.path().join("home").join(kind).join(app_name)
    }
}

impl Platform for SandboxPlatform {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn user_settings_dir(&self, app_name: &str) -> Option<PathBuf> {
        Some(self.home("config", app_name))
    }

    fn user_data_dir(&self, app_name: &str) -> Option<PathBuf> {
        Some(self.home("data", app_name))
    }

    fn user_cache_dir(&self, app_name: &str) -> Option<PathBuf> {
        Some(self.home("cache", app_name))
    }

    fn executable_path(&self) -> Option<PathBuf> {
        self.executable.clone()
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use the #[serial] attribute.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard drops.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard drops.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear all TECFS_* environment variables for the lifetime of the guards.
#[allow(dead_code)]
pub fn clear_tecfs_env_vars() -> Vec<EnvGuard> {
    ["TECFS_APP_NAME", "TECFS_ASSETS_DIR", "TECFS_LOG_MODE"]
        .iter()
        .map(|k| EnvGuard::remove(k))
        .collect()
}
