//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Print a path in normalized form
//! - `join`: Directory-join or concatenate path parts
//! - `inspect`: Show file name, extension, base path and flags of a path
//! - `subpath` / `subpath_from`: Extract part of a path
//! - `special_dirs`: Show the per-user and program directories
//! - `assets`: Resolve the assets base and individual assets
//! - `mkdir`: Create a directory, optionally with its parents

pub mod assets;
pub mod inspect;
pub mod join;
pub mod mkdir;
pub mod normalize;
pub mod special_dirs;
pub mod subpath;

pub use assets::{AssetCommand, AssetsBaseCommand};
pub use inspect::InspectCommand;
pub use join::JoinCommand;
pub use mkdir::MkdirCommand;
pub use normalize::NormalizeCommand;
pub use special_dirs::SpecialDirsCommand;
pub use subpath::{SubpathCommand, SubpathFromCommand};
