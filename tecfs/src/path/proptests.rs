//! Property-based tests for `FilePath`.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on joining and decomposition.

use super::FilePath;
use proptest::prelude::*;

// Strategy for generating path elements without separators
fn element_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(element_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), relative_path_strategy(), any::<bool>()).prop_map(
        |(leading, body, trailing)| {
            let mut text = String::new();
            if leading {
                text.push('/');
            }
            text.push_str(&body);
            if trailing {
                text.push('/');
            }
            text
        },
    )
}

fn double_separator() -> String {
    let mut text = String::new();
    text.push(FilePath::SEPARATOR);
    text.push(FilePath::SEPARATOR);
    text
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Joining never introduces a doubled separator at the join point
    #[test]
    fn join_has_single_separator(left in path_strategy(), right in path_strategy()) {
        let joined = FilePath::from(left.as_str()).join(right.as_str());
        prop_assert!(!joined.as_str().contains(&double_separator()));
    }

    // The right-hand element always ends the joined path
    #[test]
    fn join_ends_with_rhs(left in path_strategy(), right in relative_path_strategy()) {
        let rhs = FilePath::from(right.as_str());
        let joined = FilePath::from(left.as_str()).join(&rhs);
        prop_assert!(joined.as_str().ends_with(rhs.as_str()));
        prop_assert_eq!(joined.file_name(), rhs.file_name());
    }

    // Concatenation keeps both operands verbatim
    #[test]
    fn concat_is_prefix_plus_suffix(left in path_strategy(), right in path_strategy()) {
        let lhs = FilePath::from(left.as_str());
        let rhs = FilePath::from(right.as_str());
        let combined = lhs.concat(&rhs);
        prop_assert_eq!(combined.as_str().len(), lhs.as_str().len() + rhs.as_str().len());
        prop_assert!(combined.as_str().starts_with(lhs.as_str()));
    }

    // The whole element range reproduces the path
    #[test]
    fn subpath_of_everything_is_identity(text in path_strategy()) {
        let path = FilePath::from(text.as_str());
        prop_assert_eq!(path.subpath(0, FilePath::END), path);
    }

    // Splitting at any element and concatenating the halves reproduces the path
    #[test]
    fn subpath_halves_reassemble(text in relative_path_strategy(), seed in any::<usize>()) {
        let path = FilePath::from(text.as_str());
        let count = path.as_str().split(FilePath::SEPARATOR).count();
        if count < 2 {
            return Ok(());
        }
        // Any split point strictly inside the element list
        let split = 1 + seed % (count - 1);

        let head = path.subpath(0, Some(split));
        let tail = path.subpath(split, FilePath::END);
        // Both halves carry the separator at the split point
        let rejoined = format!("{}{}", head.as_str(), &tail.as_str()[1..]);
        prop_assert_eq!(rejoined.as_str(), path.as_str());
    }

    // The base path is a prefix of the path and ends with a separator
    #[test]
    fn base_path_is_prefix(text in path_strategy()) {
        let path = FilePath::from(text.as_str());
        let base = path.base_path();
        prop_assert!(path.as_str().starts_with(base.as_str()));
        if !base.is_empty() {
            prop_assert!(base.as_str().ends_with(FilePath::SEPARATOR));
        }
    }

    // The file name is a suffix without separators
    #[test]
    fn file_name_is_suffix(text in path_strategy()) {
        let path = FilePath::from(text.as_str());
        let name = path.file_name();
        prop_assert!(path.as_str().ends_with(name));
        prop_assert!(!name.contains(FilePath::SEPARATOR));
    }

    // A file joined onto a directory has that directory as its base path
    #[test]
    fn base_path_inverts_join(dir in relative_path_strategy(), name in element_strategy()) {
        let base = FilePath::from(dir.as_str()).join("");
        let file = base.join(name.as_str());
        prop_assert_eq!(file.base_path(), base);
    }

    // Every element located by name yields a suffix of the path
    #[test]
    fn subpath_from_is_suffix(text in relative_path_strategy(), pick in 0..6usize) {
        let path = FilePath::from(text.as_str());
        let elements: Vec<&str> = path.components().collect();
        let needle = elements[pick % elements.len()];

        let tail = path.subpath_from(needle, true);
        prop_assert!(path.as_str().ends_with(tail.as_str()));
        prop_assert!(tail.as_str().contains(needle));
    }
}
