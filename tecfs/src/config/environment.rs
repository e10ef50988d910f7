//! Environment variable handling for configuration overrides.
//!
//! This module provides support for TECFS_* environment variables that
//! override configuration file values. Variables set to an empty string
//! are treated as unset.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::path::FilePath;
use std::env;

/// Overrides [`Config::app_name`].
pub const APP_NAME_ENV: &str = "TECFS_APP_NAME";

/// Overrides [`Config::assets_dir`].
pub const ASSETS_DIR_ENV: &str = "TECFS_ASSETS_DIR";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use tecfs::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `TECFS_LOG_MODE` holds an unknown log mode.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(app_name) = Self::var(APP_NAME_ENV) {
            config.app_name = Some(app_name);
        }

        if let Some(assets_dir) = Self::var(ASSETS_DIR_ENV) {
            config.assets_dir = Some(FilePath::from(assets_dir));
        }

        if let Some(mode) = Self::var(LOG_MODE_ENV) {
            let level = LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_mode = Some(level);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.is_empty())
    }
}
