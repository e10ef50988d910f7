//! OS collaborator used by the path utilities.
//!
//! Everything that touches the live system goes through [`Platform`]:
//! existence checks, single-level directory creation, the per-user special
//! folders and the location of the running executable. [`OsPlatform`] is the
//! real implementation; tests substitute their own.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Queries and actions the path utilities need from the operating system.
///
/// All paths crossing this boundary are native paths.
#[cfg_attr(test, mockall::automock)]
pub trait Platform {
    /// Whether a directory exists at `path`.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;

    /// Create exactly one directory level.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, including `AlreadyExists`.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Per-user settings directory for `app_name`.
    fn user_settings_dir(&self, app_name: &str) -> Option<PathBuf>;

    /// Per-user persistent data directory for `app_name`.
    fn user_data_dir(&self, app_name: &str) -> Option<PathBuf>;

    /// Per-user cache directory for `app_name`.
    fn user_cache_dir(&self, app_name: &str) -> Option<PathBuf>;

    /// Full path of the running executable.
    fn executable_path(&self) -> Option<PathBuf>;
}

/// The real operating system.
///
/// Special folders follow the platform conventions:
///
/// | folder   | Linux / BSD                       | macOS                                     | Windows                 |
/// |----------|-----------------------------------|-------------------------------------------|-------------------------|
/// | settings | `$XDG_CONFIG_HOME` or `~/.config` | `~/Library/Application Support/APP`       | `%APPDATA%\APP`         |
/// | data     | `$XDG_DATA_HOME` or `~/.local/share` | `~/Library/Application Support/APP/data` | `%APPDATA%\APP\data` |
/// | cache    | `$XDG_CACHE_HOME` or `~/.cache`   | `~/Library/Application Support/APP/cache` | `%LOCALAPPDATA%\APP`    |
///
/// On Linux and BSD the application name is appended to the XDG base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsPlatform;

impl Platform for OsPlatform {
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
        layout::settings(app_name)
    }

    fn user_data_dir(&self, app_name: &str) -> Option<PathBuf> {
        layout::data(app_name)
    }

    fn user_cache_dir(&self, app_name: &str) -> Option<PathBuf> {
        layout::cache(app_name)
    }

    fn executable_path(&self) -> Option<PathBuf> {
        match env::current_exe() {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("cannot determine the executable path: {e}");
                None
            }
        }
    }
}

/// An absolute directory from an environment variable, ignoring relative or
/// empty values.
#[allow(dead_code)] // Not every layout reads environment variables
fn env_dir(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
}

#[cfg(all(unix, not(target_os = "macos")))]
mod layout {
    use std::path::PathBuf;

    use super::env_dir;

    fn xdg(var: &str, fallback: &[&str], app_name: &str) -> Option<PathBuf> {
        let base = env_dir(var).or_else(|| {
            let mut dir = home::home_dir()?;
            dir.extend(fallback);
            Some(dir)
        })?;
        Some(base.join(app_name))
    }

    pub(super) fn settings(app_name: &str) -> Option<PathBuf> {
        xdg("XDG_CONFIG_HOME", &[".config"], app_name)
    }

    pub(super) fn data(app_name: &str) -> Option<PathBuf> {
        xdg("XDG_DATA_HOME", &[".local", "share"], app_name)
    }

    pub(super) fn cache(app_name: &str) -> Option<PathBuf> {
        xdg("XDG_CACHE_HOME", &[".cache"], app_name)
    }
}

#[cfg(target_os = "macos")]
mod layout {
    use std::path::PathBuf;

    fn support(app_name: &str) -> Option<PathBuf> {
        Some(
            home::home_dir()?
                .join("Library")
                .join("Application Support")
                .join(app_name),
        )
    }

    pub(super) fn settings(app_name: &str) -> Option<PathBuf> {
        support(app_name)
    }

    pub(super) fn data(app_name: &str) -> Option<PathBuf> {
        Some(support(app_name)?.join("data"))
    }

    pub(super) fn cache(app_name: &str) -> Option<PathBuf> {
        Some(support(app_name)?.join("cache"))
    }
}

#[cfg(windows)]
mod layout {
    use std::path::PathBuf;

    use super::env_dir;

    pub(super) fn settings(app_name: &str) -> Option<PathBuf> {
        Some(env_dir("APPDATA")?.join(app_name))
    }

    pub(super) fn data(app_name: &str) -> Option<PathBuf> {
        Some(env_dir("APPDATA")?.join(app_name).join("data"))
    }

    pub(super) fn cache(app_name: &str) -> Option<PathBuf> {
        Some(env_dir("LOCALAPPDATA")?.join(app_name))
    }
}

#[cfg(not(any(unix, windows)))]
mod layout {
    use std::path::PathBuf;

    pub(super) fn settings(_app_name: &str) -> Option<PathBuf> {
        None
    }

    pub(super) fn data(_app_name: &str) -> Option<PathBuf> {
        None
    }

    pub(super) fn cache(_app_name: &str) -> Option<PathBuf> {
        None
    }
}
