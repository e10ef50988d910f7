//! Cross-platform file paths and special-path resolution.
//!
//! This module provides [`FilePath`], a string-backed path value that is kept
//! in the host's native form at all times, together with the
//! [`PathResolver`] that locates per-user folders and game assets.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Every mutation of a `FilePath` re-normalizes its text:
//! - Foreign separators are rewritten to the native separator
//! - On Unix-like hosts, a leading drive prefix such as `C:` is removed
//!
//! Nothing else is touched: `.` and `..` are kept, repeated separators are
//! kept, and nothing is resolved against the filesystem.
//!
//! ## Elements
//!
//! Decomposition ([`FilePath::subpath`], [`FilePath::subpath_from`]) treats
//! the path as the list of strings between separators, including the empty
//! strings produced by a leading or trailing separator.
//!
//! ## Resolution
//!
//! The special folders and the assets base are looked up once per
//! [`PathResolver`] and remembered afterwards, failures included.
//!
//! # Examples
//!
//! ```
//! use tecfs::FilePath;
//!
//! let mesh = FilePath::from("assets\\bob/bob.md5mesh");
//! assert_eq!(mesh.file_name(), "bob.md5mesh");
//! assert_eq!(mesh.file_extension(), "md5mesh");
//! assert_eq!(mesh.to_generic_string(), "assets/bob/bob.md5mesh");
//!
//! let texture = mesh.base_path() / "bob_head" + ".png";
//! assert_eq!(texture.to_generic_string(), "assets/bob/bob_head.png");
//! ```

mod decompose;
pub mod fs;
mod join;
pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use fs::{mk_dir, mk_path};
pub use normalize::PathStyle;
pub use resolver::PathResolver;
pub use types::FilePath;
