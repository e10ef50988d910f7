#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tecfs
//!
//! Cross-platform file paths for game engines and tools.
//!
//! This library provides a path value type that keeps its text in the host's
//! native form, plus resolution of the per-user special folders and of the
//! directory holding game assets.
//!
//! ## Core Types
//!
//! - [`FilePath`]: Normalized path text with join, decomposition and
//!   filesystem helpers
//! - [`PathResolver`]: Memoized lookup of settings, data, cache, program and
//!   assets directories
//! - [`Platform`] and [`OsPlatform`]: The operating system seam
//! - [`Config`] and [`ConfigBuilder`]: Layered YAML configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use tecfs::{FilePath, PathResolver};
//!
//! // Separators are normalized on construction
//! let mesh = FilePath::from("assets\\bob/bob.md5mesh");
//! assert_eq!(mesh.to_generic_string(), "assets/bob/bob.md5mesh");
//! assert_eq!(mesh.file_extension(), "md5mesh");
//!
//! // Directory joins never double the separator
//! let shader = FilePath::from("shaders/") / "/basic.vert";
//! assert_eq!(shader.to_generic_string(), "shaders/basic.vert");
//!
//! // Assets resolve against an explicit or probed base directory
//! let resolver = PathResolver::new();
//! resolver.set_assets_base_path("/opt/tec/assets/");
//! let texture = resolver.asset_path("textures/bob_head.png");
//! assert_eq!(texture.to_generic_string(), "/opt/tec/assets/textures/bob_head.png");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod platform;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{FilePath, PathResolver, PathStyle};
pub use platform::{OsPlatform, Platform};
