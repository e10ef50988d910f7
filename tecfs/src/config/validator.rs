//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::FilePath;

/// Longest accepted application name, in bytes.
const MAX_APP_NAME_LEN: usize = 128;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use tecfs::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { app_name: Some("a/b".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref app_name) = config.app_name {
            Self::validate_app_name(app_name)?;
        }

        if let Some(ref assets_dir) = config.assets_dir {
            Self::validate_assets_dir(assets_dir)?;
        }

        Ok(())
    }

    /// The app name becomes a single directory level, so it cannot contain
    /// separators.
    fn validate_app_name(value: &str) -> Result<()> {
        let invalid = |message: &str| Error::Validation {
            field: "app_name".into(),
            message: message.into(),
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(invalid("cannot be empty"));
        }
        if trimmed != value {
            return Err(invalid("cannot have leading or trailing whitespace"));
        }
        if value.len() > MAX_APP_NAME_LEN {
            return Err(invalid(&format!(
                "cannot exceed {MAX_APP_NAME_LEN} characters"
            )));
        }
        if value.contains(['/', '\\']) {
            return Err(invalid("cannot contain path separators"));
        }
        if value == "." || value == ".." {
            return Err(invalid("cannot be a relative directory reference"));
        }
        if value.chars().any(char::is_control) {
            return Err(invalid("cannot contain control characters"));
        }
        Ok(())
    }

    fn validate_assets_dir(value: &FilePath) -> Result<()> {
        value.validate().map_err(|e| Error::Validation {
            field: "assets_dir".into(),
            message: e.to_string(),
        })
    }
}
