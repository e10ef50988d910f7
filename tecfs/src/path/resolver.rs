//! Special-path resolution with per-resolver memoization.
//!
//! This module provides the `PathResolver` type, the single place that asks
//! the [`Platform`] where per-user folders, the running program and the
//! assets directory live. Each answer is computed at most once per resolver
//! and then served from its cache, including failures (cached as the empty
//! path).

use std::path::PathBuf;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::path::FilePath;
use crate::platform::{OsPlatform, Platform};

/// Application name used for the per-user folders unless overridden.
pub const DEFAULT_APP_NAME: &str = "tec";

/// Name of the directory probed for bundled assets.
const ASSETS_DIR: &str = "assets";

/// Resolves special folders and asset locations, remembering the results.
///
/// Construct one at startup and share it by reference. Cached slots are
/// filled on first use and never recomputed; the assets base can be
/// replaced explicitly with [`PathResolver::set_assets_base_path`].
///
/// # Examples
///
/// ```no_run
/// use tecfs::PathResolver;
///
/// let resolver = PathResolver::new().with_app_name("trillek");
///
/// let settings = resolver.user_settings_path();
/// if !settings.is_empty() {
///     assert!(settings.as_str().ends_with(tecfs::FilePath::SEPARATOR));
/// }
///
/// let shader = resolver.asset_path("shaders/basic.vert");
/// println!("loading {shader}");
/// ```
#[derive(Debug)]
pub struct PathResolver<P = OsPlatform> {
    platform: P,
    app_name: String,
    settings: OnceLock<FilePath>,
    data: OnceLock<FilePath>,
    cache: OnceLock<FilePath>,
    program: OnceLock<FilePath>,
    assets_base: RwLock<Option<FilePath>>,
}

impl Default for PathResolver<OsPlatform> {
    fn default() -> Self {
        Self::with_platform(OsPlatform)
    }
}

impl PathResolver<OsPlatform> {
    /// Create a resolver backed by the real operating system.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// assert_eq!(resolver.app_name(), tecfs::path::resolver::DEFAULT_APP_NAME);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Platform> PathResolver<P> {
    /// Create a resolver backed by `platform`.
    pub fn with_platform(platform: P) -> Self {
        Self {
            platform,
            app_name: DEFAULT_APP_NAME.to_string(),
            settings: OnceLock::new(),
            data: OnceLock::new(),
            cache: OnceLock::new(),
            program: OnceLock::new(),
            assets_base: RwLock::new(None),
        }
    }

    /// Configure the application name used for the per-user folders.
    ///
    /// Only affects folders that have not been resolved yet.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// The configured application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The platform this resolver queries.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// The per-user settings directory, with a trailing separator.
    ///
    /// Empty if the platform cannot provide one.
    pub fn user_settings_path(&self) -> FilePath {
        Self::special_dir(&self.settings, "settings", || {
            self.platform.user_settings_dir(&self.app_name)
        })
    }

    /// The per-user persistent data directory, with a trailing separator.
    pub fn user_data_path(&self) -> FilePath {
        Self::special_dir(&self.data, "data", || {
            self.platform.user_data_dir(&self.app_name)
        })
    }

    /// The per-user cache directory, with a trailing separator.
    pub fn user_cache_path(&self) -> FilePath {
        Self::special_dir(&self.cache, "cache", || {
            self.platform.user_cache_dir(&self.app_name)
        })
    }

    /// The directory containing the running executable, with a trailing
    /// separator. Empty if it cannot be determined.
    pub fn program_path(&self) -> FilePath {
        self.program
            .get_or_init(|| match self.platform.executable_path() {
                Some(exe) => {
                    let dir = FilePath::from(exe).base_path();
                    log::debug!("resolved program directory: {dir}");
                    dir
                }
                None => FilePath::new(),
            })
            .clone()
    }

    /// Directories probed for the assets base, in priority order.
    ///
    /// 1. `./assets/`
    /// 2. `<program-dir>/assets/`
    /// 3. `<program-dir>/../assets/`
    /// 4. `<program-dir>/../share/assets/`
    ///
    /// The program-relative candidates are omitted when the program
    /// directory is unknown.
    pub fn asset_candidates(&self) -> Vec<FilePath> {
        let local = FilePath::from(".").join(ASSETS_DIR).join("");
        let mut candidates = vec![local];

        let program = self.program_path();
        if !program.is_empty() {
            candidates.push(program.join(ASSETS_DIR).join(""));
            candidates.push(program.join("..").join(ASSETS_DIR).join(""));
            candidates.push(program.join("..").join("share").join(ASSETS_DIR).join(""));
        }
        candidates
    }

    /// The base directory under which assets are looked up.
    ///
    /// Returns the explicitly set or previously resolved value if there is
    /// one. Otherwise the [candidates](PathResolver::asset_candidates) are
    /// probed and the first existing directory is remembered. When none
    /// exists the empty path is remembered instead, and later calls do not
    /// probe again.
    pub fn assets_base_path(&self) -> FilePath {
        if let Some(base) = self
            .assets_base
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return base.clone();
        }

        let probed = self.probe_assets_base();
        let mut slot = self
            .assets_base
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another thread may have filled the slot while we were probing
        slot.get_or_insert(probed).clone()
    }

    /// Use `path` as the assets base from now on.
    pub fn set_assets_base_path(&self, path: impl Into<FilePath>) {
        let path = path.into();
        log::debug!("assets base set to {path}");
        *self
            .assets_base
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(path);
    }

    /// Full path of `asset`, relative to the assets base.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// resolver.set_assets_base_path("/opt/tec/share/assets/");
    /// let path = resolver.asset_path("shaders/basic.vert");
    /// assert_eq!(path.file_name(), "basic.vert");
    /// assert!(path.as_str().contains("assets"));
    /// ```
    pub fn asset_path(&self, asset: impl Into<FilePath>) -> FilePath {
        self.assets_base_path().join(asset)
    }

    fn probe_assets_base(&self) -> FilePath {
        for candidate in self.asset_candidates() {
            if candidate.dir_exists_on(&self.platform) {
                log::debug!("assets base resolved to {candidate}");
                return candidate;
            }
            log::debug!("no assets directory at {candidate}");
        }
        log::warn!("no assets directory found; asset paths will not resolve");
        FilePath::new()
    }

    fn special_dir(
        slot: &OnceLock<FilePath>,
        label: &str,
        query: impl FnOnce() -> Option<PathBuf>,
    ) -> FilePath {
        slot.get_or_init(|| match query() {
            Some(dir) => {
                let path = FilePath::from(dir).join("");
                log::debug!("resolved {label} directory: {path}");
                path
            }
            None => {
                log::warn!("cannot determine the user {label} directory");
                FilePath::new()
            }
        })
        .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MockPlatform;
    use std::path::Path;
    use std::sync::Arc;

    fn generic(path: &FilePath) -> String {
        path.to_generic_string()
    }

    fn platform_with_exe(exe: &'static str) -> MockPlatform {
        let mut platform = MockPlatform::new();
        platform
            .expect_executable_path()
            .times(1)
            .returning(move || Some(PathBuf::from(exe)));
        platform
    }

    #[test]
    fn test_resolver_default_app_name() {
        let resolver = PathResolver::new();
        assert_eq!(resolver.app_name(), DEFAULT_APP_NAME);
    }

    #[test]
    fn test_resolver_with_app_name() {
        let resolver = PathResolver::new().with_app_name("trillek");
        assert_eq!(resolver.app_name(), "trillek");
    }

    #[test]
    fn test_settings_path_is_memoized() {
        let mut platform = MockPlatform::new();
        platform
            .expect_user_settings_dir()
            .withf(|app| app == "trillek")
            .times(1)
            .returning(|_| Some(PathBuf::from("/home/u/.config/trillek")));

        let resolver = PathResolver::with_platform(platform).with_app_name("trillek");
        let first = resolver.user_settings_path();
        let second = resolver.user_settings_path();

        assert_eq!(generic(&first), "/home/u/.config/trillek/");
        assert_eq!(first, second);
    }

    #[test]
    fn test_special_dir_failure_is_cached_as_empty() {
        let mut platform = MockPlatform::new();
        platform.expect_user_cache_dir().times(1).returning(|_| None);

        let resolver = PathResolver::with_platform(platform);
        assert!(resolver.user_cache_path().is_empty());
        assert!(resolver.user_cache_path().is_empty());
    }

    #[test]
    fn test_special_dirs_are_independent() {
        let mut platform = MockPlatform::new();
        platform
            .expect_user_data_dir()
            .times(1)
            .returning(|_| Some(PathBuf::from("/data/tec/")));
        platform
            .expect_user_cache_dir()
            .times(1)
            .returning(|_| Some(PathBuf::from("/cache/tec")));

        let resolver = PathResolver::with_platform(platform);
        assert_eq!(generic(&resolver.user_data_path()), "/data/tec/");
        assert_eq!(generic(&resolver.user_cache_path()), "/cache/tec/");
    }

    #[test]
    fn test_program_path_is_executable_directory() {
        let resolver = PathResolver::with_platform(platform_with_exe("/opt/tec/bin/tec"));
        assert_eq!(generic(&resolver.program_path()), "/opt/tec/bin/");
        assert_eq!(generic(&resolver.program_path()), "/opt/tec/bin/");
    }

    #[test]
    fn test_asset_candidates_order() {
        let resolver = PathResolver::with_platform(platform_with_exe("/opt/tec/bin/tec"));
        let candidates: Vec<String> = resolver.asset_candidates().iter().map(generic).collect();
        assert_eq!(
            candidates,
            [
                "./assets/",
                "/opt/tec/bin/assets/",
                "/opt/tec/bin/../assets/",
                "/opt/tec/bin/../share/assets/",
            ]
        );
    }

    #[test]
    fn test_asset_candidates_without_program_path() {
        let mut platform = MockPlatform::new();
        platform.expect_executable_path().times(1).returning(|| None);

        let resolver = PathResolver::with_platform(platform);
        let candidates = resolver.asset_candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(generic(&candidates[0]), "./assets/");
    }

    #[test]
    fn test_assets_base_first_existing_candidate_wins() {
        let mut platform = platform_with_exe("/opt/tec/bin/tec");
        platform
            .expect_is_dir()
            .returning(|path| path == Path::new("/opt/tec/bin/../assets/"));

        let resolver = PathResolver::with_platform(platform);
        assert_eq!(generic(&resolver.assets_base_path()), "/opt/tec/bin/../assets/");
    }

    #[test]
    fn test_assets_base_prefers_local_directory() {
        let mut platform = platform_with_exe("/opt/tec/bin/tec");
        platform.expect_is_dir().times(1).returning(|_| true);

        let resolver = PathResolver::with_platform(platform);
        assert_eq!(generic(&resolver.assets_base_path()), "./assets/");
    }

    #[test]
    fn test_assets_base_failure_is_sticky() {
        let mut platform = platform_with_exe("/opt/tec/bin/tec");
        // Four candidates probed exactly once
        platform.expect_is_dir().times(4).returning(|_| false);

        let resolver = PathResolver::with_platform(platform);
        assert!(resolver.assets_base_path().is_empty());
        assert!(resolver.assets_base_path().is_empty());
    }

    #[test]
    fn test_explicit_assets_base_skips_probe() {
        // No expectations: any platform call would panic
        let resolver = PathResolver::with_platform(MockPlatform::new());
        resolver.set_assets_base_path("/srv/assets/");
        assert_eq!(generic(&resolver.assets_base_path()), "/srv/assets/");
    }

    #[test]
    fn test_explicit_assets_base_overrides_resolved() {
        let mut platform = platform_with_exe("/opt/tec/bin/tec");
        platform.expect_is_dir().times(1).returning(|_| true);

        let resolver = PathResolver::with_platform(platform);
        assert_eq!(generic(&resolver.assets_base_path()), "./assets/");
        resolver.set_assets_base_path("/srv/assets");
        assert_eq!(generic(&resolver.assets_base_path()), "/srv/assets");
    }

    #[test]
    fn test_asset_path_joins_base() {
        let resolver = PathResolver::with_platform(MockPlatform::new());
        resolver.set_assets_base_path("/srv/assets/");

        assert_eq!(
            generic(&resolver.asset_path("shaders/basic.vert")),
            "/srv/assets/shaders/basic.vert"
        );
        assert_eq!(
            generic(&resolver.asset_path(String::from("/bob/bob.md5mesh"))),
            "/srv/assets/bob/bob.md5mesh"
        );
        assert_eq!(
            generic(&resolver.asset_path(FilePath::from("bob_head.png"))),
            "/srv/assets/bob_head.png"
        );
    }

    #[test]
    fn test_resolver_shared_across_threads() {
        let mut platform = MockPlatform::new();
        platform
            .expect_user_data_dir()
            .returning(|_| Some(PathBuf::from("/data/tec")));

        let resolver = Arc::new(PathResolver::with_platform(platform));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                std::thread::spawn(move || resolver.user_data_path())
            })
            .collect();

        for handle in handles {
            assert_eq!(generic(&handle.join().unwrap()), "/data/tec/");
        }
    }
}
