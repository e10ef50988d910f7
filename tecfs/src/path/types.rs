//! The `FilePath` value type.
//!
//! A `FilePath` owns its text as UTF-8 and keeps it in normalized form for
//! the native [`PathStyle`]. Every construction or assignment from text runs
//! the normalizer; cloning an existing `FilePath` does not.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::path::normalize::{self, PathStyle};

/// An OS-agnostic path stored as normalized UTF-8 text.
///
/// # Examples
///
/// ```
/// use tecfs::FilePath;
///
/// let path = FilePath::from("assets\\shaders/basic.vert");
/// assert_eq!(path.to_generic_string(), "assets/shaders/basic.vert");
/// assert_eq!(path.file_name(), "basic.vert");
/// assert_eq!(path.file_extension(), "vert");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilePath {
    pub(super) path: String,
}

impl FilePath {
    /// The native separator character.
    pub const SEPARATOR: char = PathStyle::NATIVE.separator();

    /// Marker for "through the last element" in [`FilePath::subpath`].
    pub const END: Option<usize> = None;

    /// Create an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            path: String::new(),
        }
    }

    /// Build a path from the byte range `[pos, pos + count)` of `text`.
    ///
    /// `count = None` takes everything from `pos` to the end. Positions past
    /// the end clamp to the text length, and a range that would split a
    /// character is narrowed to whole characters (`pos` moves forward, the
    /// end moves back).
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// let path = FilePath::from_slice("xx/assets/foo", 3, None);
    /// assert_eq!(path.to_generic_string(), "assets/foo");
    ///
    /// let path = FilePath::from_slice("xx/assets/foo", 3, Some(6));
    /// assert_eq!(path.as_str(), "assets");
    /// ```
    #[must_use]
    pub fn from_slice(text: &str, pos: usize, count: Option<usize>) -> Self {
        let mut start = pos.min(text.len());
        while !text.is_char_boundary(start) {
            start += 1;
        }
        let mut end = match count {
            Some(count) => start.saturating_add(count).min(text.len()),
            None => text.len(),
        };
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        Self::from(&text[start..end.max(start)])
    }

    /// Replace the contents with `text`, normalizing it.
    ///
    /// Assigning another `FilePath` copies its text without renormalizing.
    pub fn set(&mut self, text: impl Into<FilePath>) {
        *self = text.into();
    }

    /// Rewrite separators and strip foreign drive prefixes in place.
    pub fn normalize_path(&mut self) {
        normalize::normalize_in_place(PathStyle::NATIVE, &mut self.path);
    }

    /// The stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Consume the path and return its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    /// The stored text with `/` as separator, for portable display.
    #[must_use]
    pub fn to_generic_string(&self) -> String {
        normalize::to_generic(PathStyle::NATIVE, &self.path)
    }

    /// Whether the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the text is a plausible native path. No filesystem access.
    #[must_use]
    pub fn is_valid_path(&self) -> bool {
        normalize::is_valid(PathStyle::NATIVE, &self.path)
    }

    /// Strict form of [`FilePath::is_valid_path`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) describing
    /// why the path was rejected.
    pub fn validate(&self) -> Result<()> {
        normalize::validate(PathStyle::NATIVE, &self.path)
    }

    /// Whether the path carries the native absolute-path marker.
    #[must_use]
    pub fn is_absolute_path(&self) -> bool {
        normalize::is_absolute(PathStyle::NATIVE, &self.path)
    }

    /// The path in the representation the OS expects.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// let native = FilePath::from("assets/bob").native_path();
    /// assert!(native.ends_with("bob"));
    /// ```
    #[must_use]
    pub fn native_path(&self) -> PathBuf {
        PathBuf::from(normalize::normalize(PathStyle::NATIVE, &self.path))
    }
}

impl From<&str> for FilePath {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl From<String> for FilePath {
    fn from(mut path: String) -> Self {
        normalize::normalize_in_place(PathStyle::NATIVE, &mut path);
        Self { path }
    }
}

impl From<&String> for FilePath {
    fn from(text: &String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<&FilePath> for FilePath {
    fn from(other: &FilePath) -> Self {
        other.clone()
    }
}

impl From<&OsStr> for FilePath {
    fn from(native: &OsStr) -> Self {
        Self::from(native.to_string_lossy().into_owned())
    }
}

impl From<OsString> for FilePath {
    fn from(native: OsString) -> Self {
        Self::from(native.as_os_str())
    }
}

impl From<&Path> for FilePath {
    fn from(native: &Path) -> Self {
        Self::from(native.as_os_str())
    }
}

impl From<PathBuf> for FilePath {
    fn from(native: PathBuf) -> Self {
        Self::from(native.as_os_str())
    }
}

impl From<FilePath> for String {
    fn from(path: FilePath) -> Self {
        path.path
    }
}

impl From<FilePath> for PathBuf {
    fn from(path: FilePath) -> Self {
        path.native_path()
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl PartialEq<str> for FilePath {
    fn eq(&self, other: &str) -> bool {
        self.path == other
    }
}

impl PartialEq<&str> for FilePath {
    fn eq(&self, other: &&str) -> bool {
        self.path == *other
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Reads one whitespace-delimited token, mirroring stream extraction.
/// Embedded whitespace cannot be quoted.
impl FromStr for FilePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s.split_whitespace().next().unwrap_or_default()))
    }
}

impl Serialize for FilePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path)
    }
}

impl<'de> Deserialize<'de> for FilePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
