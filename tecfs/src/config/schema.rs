//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered on top of
//! each other; the accessors supply the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::path::resolver::DEFAULT_APP_NAME;
use crate::path::{FilePath, PathResolver};
use crate::platform::Platform;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use tecfs::config::Config;
/// use tecfs::LogLevel;
///
/// let config: Config = serde_yaml::from_str(
///     "app_name: trillek\nassets_dir: /opt/trillek/assets/\nlog_mode: verbose\n",
/// ).unwrap();
///
/// assert_eq!(config.app_name(), "trillek");
/// assert_eq!(config.log_level(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Application name used for the per-user folders.
    pub app_name: Option<String>,

    /// Explicit assets base, bypassing directory probing.
    pub assets_dir: Option<FilePath>,

    /// Default verbosity when no CLI flag is given.
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// The configured application name, or the built-in default.
    #[must_use]
    pub fn app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// The configured log level, or `Normal`.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_mode.unwrap_or(LogLevel::Normal)
    }

    /// Configure `resolver` from this configuration.
    ///
    /// Sets the application name and, if one is configured, the explicit
    /// assets base.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::config::Config;
    /// use tecfs::{FilePath, PathResolver};
    ///
    /// let config = Config {
    ///     app_name: Some("trillek".into()),
    ///     assets_dir: Some(FilePath::from("/srv/assets/")),
    ///     ..Default::default()
    /// };
    ///
    /// let resolver = config.apply_to(PathResolver::new());
    /// assert_eq!(resolver.app_name(), "trillek");
    /// assert_eq!(resolver.assets_base_path().to_generic_string(), "/srv/assets/");
    /// ```
    pub fn apply_to<P: Platform>(&self, resolver: PathResolver<P>) -> PathResolver<P> {
        let resolver = resolver.with_app_name(self.app_name());
        if let Some(ref assets_dir) = self.assets_dir {
            resolver.set_assets_base_path(assets_dir);
        }
        resolver
    }
}
