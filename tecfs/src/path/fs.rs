//! Existence checks and directory creation.
//!
//! These are the only `FilePath` operations that touch the filesystem, and
//! they do so through a [`Platform`]. The free functions take the platform
//! explicitly; the `FilePath` convenience methods use [`OsPlatform`].

use crate::path::normalize::{drive_prefix_len, PathStyle};
use crate::path::FilePath;
use crate::platform::{OsPlatform, Platform};

impl FilePath {
    /// Whether a directory exists at this path.
    #[must_use]
    pub fn dir_exists(&self) -> bool {
        self.dir_exists_on(&OsPlatform)
    }

    /// Whether a regular file exists at this path.
    #[must_use]
    pub fn file_exists(&self) -> bool {
        self.file_exists_on(&OsPlatform)
    }

    /// [`FilePath::dir_exists`] against a given platform.
    pub fn dir_exists_on<P: Platform + ?Sized>(&self, platform: &P) -> bool {
        !self.is_empty() && platform.is_dir(&self.native_path())
    }

    /// [`FilePath::file_exists`] against a given platform.
    pub fn file_exists_on<P: Platform + ?Sized>(&self, platform: &P) -> bool {
        !self.is_empty() && platform.is_file(&self.native_path())
    }

    /// Create this directory (one level). See [`mk_dir`].
    #[must_use]
    pub fn mk_dir(&self) -> bool {
        mk_dir(&OsPlatform, self)
    }

    /// Create this directory and every missing parent. See [`mk_path`].
    #[must_use]
    pub fn mk_path(&self) -> bool {
        mk_path(&OsPlatform, self)
    }
}

/// Create exactly one directory level.
///
/// Returns `true` if the directory was created or already exists, `false`
/// on any other failure (missing parent, permission denied, a file in the
/// way).
///
/// # Examples
///
/// ```
/// use tecfs::path::mk_dir;
/// use tecfs::{FilePath, OsPlatform};
///
/// let tmp = tempfile::tempdir().unwrap();
/// let dir = FilePath::from(tmp.path()) / "cache";
/// assert!(mk_dir(&OsPlatform, &dir));
/// assert!(mk_dir(&OsPlatform, &dir));
/// ```
pub fn mk_dir<P: Platform + ?Sized>(platform: &P, path: &FilePath) -> bool {
    if path.is_empty() {
        return false;
    }

    let native = path.native_path();
    match platform.create_dir(&native) {
        Ok(()) => {
            log::debug!("created directory {path}");
            true
        }
        Err(e) => {
            let exists = platform.is_dir(&native);
            if !exists {
                log::debug!("cannot create directory {path}: {e}");
            }
            exists
        }
    }
}

/// Create every missing directory level of `path`, like `mkdir -p`.
///
/// Levels are created from the root towards the leaf through [`mk_dir`].
/// The walk stops at the first level that cannot be created and returns
/// `false`; levels created before that point are left in place. The root
/// itself (a leading separator, a drive prefix or a UNC share) is never
/// created.
pub fn mk_path<P: Platform + ?Sized>(platform: &P, path: &FilePath) -> bool {
    if path.is_empty() {
        return false;
    }

    let separator = FilePath::SEPARATOR;
    let text = path.as_str();
    let root = root_len(PathStyle::NATIVE, text);

    for (idx, _) in text.match_indices(separator) {
        let level = &text[..idx];
        if idx <= root || level.ends_with(separator) {
            continue;
        }
        if !mk_dir(platform, &FilePath::from(level)) {
            return false;
        }
    }

    if text.ends_with(separator) {
        true
    } else {
        mk_dir(platform, path)
    }
}

/// Byte length of the part of `text` that names an existing root.
fn root_len(style: PathStyle, text: &str) -> usize {
    if style != PathStyle::Windows {
        return 0;
    }

    let separator = style.separator();
    if let Some(unc) = text.strip_prefix("\\\\") {
        // \\server\share is the root of a UNC path
        let mut parts = unc.match_indices(separator);
        return match parts.nth(1) {
            Some((idx, _)) => idx + 2,
            None => text.len(),
        };
    }

    drive_prefix_len(text).unwrap_or(0)
}
