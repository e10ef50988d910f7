//! Configuration system for tecfs.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `tecfs.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of every layer
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TECFS_APP_NAME`, `TECFS_ASSETS_DIR`, `TECFS_LOG_MODE`)
//! 3. Project config (`tecfs.yaml`, nearest one walking up from the working directory)
//! 4. User config (`tecfs.yaml` in the user settings directory)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use tecfs::config::ConfigBuilder;
//! use tecfs::PathResolver;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let resolver = config.apply_to(PathResolver::new());
//! println!("assets: {}", resolver.assets_base_path());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
