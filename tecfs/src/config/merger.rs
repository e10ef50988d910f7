//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use tecfs::config::{Config, ConfigMerger};
///
/// let low = Config { app_name: Some("low".to_string()), ..Default::default() };
/// let high = Config { app_name: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.app_name, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Each field is replaced only when the source sets it.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.app_name.is_some() {
            target.app_name.clone_from(&source.app_name);
        }

        if source.assets_dir.is_some() {
            target.assets_dir.clone_from(&source.assets_dir);
        }

        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }
    }
}
