//! Path normalization functions.
//!
//! Normalization is purely textual. It:
//! - Rewrites every foreign separator to the separator of the path style
//! - Strips a leading drive prefix (`C:`) on styles without drive letters
//!
//! Everything else, including `.` and `..` elements, is left untouched. All
//! functions here take an explicit [`PathStyle`] so both conventions can be
//! exercised on any host; [`FilePath`](super::FilePath) always uses
//! [`PathStyle::NATIVE`].

use crate::error::{Error, Result};

/// Separator convention of a target platform.
///
/// # Examples
///
/// ```
/// use tecfs::path::PathStyle;
///
/// assert_eq!(PathStyle::Unix.separator(), '/');
/// assert_eq!(PathStyle::Windows.separator(), '\\');
/// assert!(PathStyle::Windows.has_drive_letters());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// `/` separated, no drive letters.
    Unix,
    /// `\` separated, with `X:` drive prefixes.
    Windows,
}

impl PathStyle {
    /// The style of the platform this crate was compiled for.
    #[cfg(windows)]
    pub const NATIVE: Self = Self::Windows;

    /// The style of the platform this crate was compiled for.
    #[cfg(not(windows))]
    pub const NATIVE: Self = Self::Unix;

    /// The separator used by this style.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Unix => '/',
            Self::Windows => '\\',
        }
    }

    /// The separator of the other style, rewritten during normalization.
    #[must_use]
    pub const fn foreign_separator(self) -> char {
        match self {
            Self::Unix => '\\',
            Self::Windows => '/',
        }
    }

    /// Whether paths of this style may start with a drive prefix.
    #[must_use]
    pub const fn has_drive_letters(self) -> bool {
        matches!(self, Self::Windows)
    }
}

/// Length of a leading `X:` drive prefix, if any.
#[must_use]
pub fn drive_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        Some(2)
    } else {
        None
    }
}

/// Normalize `text` in place for the given style.
///
/// Applying this twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use tecfs::path::PathStyle;
/// use tecfs::path::normalize::normalize_in_place;
///
/// let mut text = String::from("C:\\games\\tec\\assets");
/// normalize_in_place(PathStyle::Unix, &mut text);
/// assert_eq!(text, "/games/tec/assets");
///
/// let mut text = String::from("C:/games/../tec");
/// normalize_in_place(PathStyle::Windows, &mut text);
/// assert_eq!(text, "C:\\games\\..\\tec");
/// ```
pub fn normalize_in_place(style: PathStyle, text: &mut String) {
    let foreign = style.foreign_separator();
    if text.contains(foreign) {
        let separator = style.separator();
        *text = text
            .chars()
            .map(|c| if c == foreign { separator } else { c })
            .collect();
    }

    if !style.has_drive_letters() {
        // Repeat so that a prefix uncovered by stripping ("C:D:/x") does not
        // survive until the next pass.
        while let Some(len) = drive_prefix_len(text) {
            text.drain(..len);
        }
    }
}

/// Return a normalized copy of `text`.
///
/// # Examples
///
/// ```
/// use tecfs::path::PathStyle;
/// use tecfs::path::normalize::normalize;
///
/// assert_eq!(normalize(PathStyle::Unix, "./assets\\shaders/basic.vert"), "./assets/shaders/basic.vert");
/// ```
#[must_use]
pub fn normalize(style: PathStyle, text: &str) -> String {
    let mut owned = text.to_string();
    normalize_in_place(style, &mut owned);
    owned
}

/// Check that `text` is a syntactically plausible path for `style`.
///
/// The filesystem is never consulted.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] when the text is empty, contains an ASCII
/// control character, or (Windows style) contains a character reserved by
/// the Win32 API or a colon outside a leading drive prefix.
pub fn validate(style: PathStyle, text: &str) -> Result<()> {
    let invalid = |reason: String| Error::InvalidPath {
        path: text.to_string(),
        reason,
    };

    if text.is_empty() {
        return Err(invalid("path is empty".to_string()));
    }

    if let Some(c) = text.chars().find(char::is_ascii_control) {
        return Err(invalid(format!(
            "contains control character {:#04x}",
            u32::from(c)
        )));
    }

    if style == PathStyle::Windows {
        let body = match drive_prefix_len(text) {
            Some(len) => &text[len..],
            None => text,
        };
        if let Some(c) = body
            .chars()
            .find(|c| matches!(c, '<' | '>' | '"' | '|' | '?' | '*' | ':'))
        {
            return Err(invalid(format!("contains reserved character '{c}'")));
        }
    }

    Ok(())
}

/// Boolean form of [`validate`].
#[must_use]
pub fn is_valid(style: PathStyle, text: &str) -> bool {
    validate(style, text).is_ok()
}

/// Whether `text` carries the absolute-path marker of `style`.
///
/// Unix paths are absolute when they start with a separator. Windows paths
/// are absolute with a drive prefix followed by a separator, or a UNC (`\\`)
/// prefix.
///
/// # Examples
///
/// ```
/// use tecfs::path::PathStyle;
/// use tecfs::path::normalize::is_absolute;
///
/// assert!(is_absolute(PathStyle::Unix, "/usr/share"));
/// assert!(!is_absolute(PathStyle::Unix, "./assets"));
/// assert!(is_absolute(PathStyle::Windows, "C:\\Games"));
/// assert!(!is_absolute(PathStyle::Windows, "C:Games"));
/// ```
#[must_use]
pub fn is_absolute(style: PathStyle, text: &str) -> bool {
    let separator = style.separator();
    match style {
        PathStyle::Unix => text.starts_with(separator),
        PathStyle::Windows => {
            if text.starts_with("\\\\") {
                return true;
            }
            drive_prefix_len(text)
                .is_some_and(|len| text[len..].starts_with(separator))
        }
    }
}

/// Copy of `text` using `/` as separator regardless of style.
#[must_use]
pub fn to_generic(style: PathStyle, text: &str) -> String {
    match style {
        PathStyle::Unix => text.to_string(),
        PathStyle::Windows => text.replace(style.separator(), "/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_rewrites_backslashes() {
        assert_eq!(normalize(PathStyle::Unix, "a\\b\\c"), "a/b/c");
        assert_eq!(normalize(PathStyle::Unix, "a/b\\c/"), "a/b/c/");
    }

    #[test]
    fn test_windows_rewrites_slashes() {
        assert_eq!(normalize(PathStyle::Windows, "a/b/c"), "a\\b\\c");
        assert_eq!(normalize(PathStyle::Windows, "C:/x\\y"), "C:\\x\\y");
    }

    #[test]
    fn test_unix_strips_drive_prefix() {
        assert_eq!(normalize(PathStyle::Unix, "C:\\foo\\bar"), "/foo/bar");
        assert_eq!(normalize(PathStyle::Unix, "d:relative"), "relative");
        assert_eq!(normalize(PathStyle::Unix, "C:D:/x"), "/x");
    }

    #[test]
    fn test_windows_keeps_drive_prefix() {
        assert_eq!(normalize(PathStyle::Windows, "C:/foo"), "C:\\foo");
    }

    #[test]
    fn test_relative_segments_untouched() {
        assert_eq!(
            normalize(PathStyle::Unix, "./a/../b/./c"),
            "./a/../b/./c"
        );
    }

    #[test]
    fn test_colon_not_at_start_untouched() {
        assert_eq!(normalize(PathStyle::Unix, "foo/C:bar"), "foo/C:bar");
        assert_eq!(normalize(PathStyle::Unix, "1:foo"), "1:foo");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(PathStyle::Unix, ""), "");
        assert_eq!(normalize(PathStyle::Windows, ""), "");
    }

    #[test]
    fn test_validate_empty() {
        let err = validate(PathStyle::Unix, "").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_validate_control_characters() {
        assert!(!is_valid(PathStyle::Unix, "foo\0bar"));
        assert!(!is_valid(PathStyle::Unix, "foo\nbar"));
        assert!(!is_valid(PathStyle::Windows, "foo\tbar"));
    }

    #[test]
    fn test_validate_windows_reserved() {
        assert!(is_valid(PathStyle::Windows, "C:\\Games\\tec"));
        assert!(!is_valid(PathStyle::Windows, "C:\\what?"));
        assert!(!is_valid(PathStyle::Windows, "a\\b:c"));
        assert!(is_valid(PathStyle::Unix, "a/b:c"));
        assert!(is_valid(PathStyle::Unix, "what?"));
    }

    #[test]
    fn test_is_absolute_unix() {
        assert!(is_absolute(PathStyle::Unix, "/"));
        assert!(!is_absolute(PathStyle::Unix, "assets/"));
        assert!(!is_absolute(PathStyle::Unix, ""));
    }

    #[test]
    fn test_is_absolute_windows() {
        assert!(is_absolute(PathStyle::Windows, "c:\\"));
        assert!(is_absolute(PathStyle::Windows, "\\\\server\\share"));
        assert!(!is_absolute(PathStyle::Windows, "\\foo"));
        assert!(!is_absolute(PathStyle::Windows, "assets\\x"));
    }

    #[test]
    fn test_to_generic() {
        assert_eq!(to_generic(PathStyle::Windows, "C:\\a\\b"), "C:/a/b");
        assert_eq!(to_generic(PathStyle::Unix, "/a/b"), "/a/b");
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn style_strategy() -> impl Strategy<Value = PathStyle> {
            prop_oneof![Just(PathStyle::Unix), Just(PathStyle::Windows)]
        }

        // Mixed separators, drive prefixes and dot segments
        fn messy_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just("/".to_string()),
                    Just("\\".to_string()),
                    Just("C:".to_string()),
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-zA-Z0-9_.-]{1,8}",
                ],
                0..12,
            )
            .prop_map(|parts| parts.concat())
        }

        proptest! {
            /// Normalization is idempotent
            #[test]
            fn normalize_idempotent(style in style_strategy(), s in messy_path_strategy()) {
                let once = normalize(style, &s);
                let twice = normalize(style, &once);
                prop_assert_eq!(once, twice);
            }

            /// Arbitrary text also normalizes idempotently
            #[test]
            fn normalize_idempotent_any_text(style in style_strategy(), s in "\\PC{0,40}") {
                let once = normalize(style, &s);
                prop_assert_eq!(normalize(style, &once), once);
            }

            /// No foreign separator survives normalization
            #[test]
            fn normalize_removes_foreign_separator(style in style_strategy(), s in messy_path_strategy()) {
                let normalized = normalize(style, &s);
                prop_assert!(!normalized.contains(style.foreign_separator()));
            }

            /// Unix normalization never leaves a drive prefix
            #[test]
            fn unix_has_no_drive_prefix(s in messy_path_strategy()) {
                let normalized = normalize(PathStyle::Unix, &s);
                prop_assert!(drive_prefix_len(&normalized).is_none());
            }

            /// The generic form never contains a backslash separator
            #[test]
            fn generic_form_uses_forward_slash(s in messy_path_strategy()) {
                let normalized = normalize(PathStyle::Windows, &s);
                prop_assert!(!to_generic(PathStyle::Windows, &normalized).contains('\\'));
            }
        }
    }
}
