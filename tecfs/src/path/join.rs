//! Concatenation and directory joining.
//!
//! Two ways to combine paths, with deliberately different semantics:
//!
//! - **Concatenation** ([`FilePath::concat`], `+`) appends text verbatim.
//!   Use it for suffixes such as extensions.
//! - **Directory join** ([`FilePath::join`], `/`) appends a new path element
//!   with exactly one separator between the two parts.
//!
//! The right operand is anything convertible into a [`FilePath`], so it is
//! normalized before the separator checks run.

use std::ops::{Add, AddAssign, Div, DivAssign};

use crate::path::FilePath;

impl FilePath {
    /// Append `rhs` verbatim, then normalize.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// let mut path = FilePath::from("textures/bob_head");
    /// path.append(".png");
    /// assert_eq!(path.file_name(), "bob_head.png");
    /// ```
    pub fn append(&mut self, rhs: impl Into<FilePath>) {
        let rhs = rhs.into();
        self.path.push_str(&rhs.path);
        self.normalize_path();
    }

    /// Non-mutating form of [`FilePath::append`].
    #[must_use]
    pub fn concat(&self, rhs: impl Into<FilePath>) -> FilePath {
        let mut out = self.clone();
        out.append(rhs);
        out
    }

    /// Append `rhs` as a new path element.
    ///
    /// Exactly one separator ends up between the two parts: one is inserted
    /// when neither side supplies it, and none is added when either side
    /// already does. An empty path joined with a relative element yields a
    /// separator-prefixed element.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// let mut path = FilePath::from("assets/");
    /// path.push("/shaders");
    /// path.push("basic.vert");
    /// assert_eq!(path.to_generic_string(), "assets/shaders/basic.vert");
    ///
    /// let mut empty = FilePath::new();
    /// empty.push("foo");
    /// assert_eq!(empty.to_generic_string(), "/foo");
    /// ```
    pub fn push(&mut self, rhs: impl Into<FilePath>) {
        let rhs = rhs.into();
        let separator = Self::SEPARATOR;

        if self.path.is_empty() {
            if !rhs.path.is_empty() && !rhs.path.starts_with(separator) {
                self.path.push(separator);
            }
            self.path.push_str(&rhs.path);
        } else {
            if !self.path.ends_with(separator) {
                self.path.push(separator);
            }
            // The left side supplies the separator at the join point.
            self.path.push_str(rhs.path.trim_start_matches(separator));
        }
        self.normalize_path();
    }

    /// Non-mutating form of [`FilePath::push`].
    #[must_use]
    pub fn join(&self, rhs: impl Into<FilePath>) -> FilePath {
        let mut out = self.clone();
        out.push(rhs);
        out
    }
}

impl<T: Into<FilePath>> AddAssign<T> for FilePath {
    fn add_assign(&mut self, rhs: T) {
        self.append(rhs);
    }
}

impl<T: Into<FilePath>> Add<T> for FilePath {
    type Output = FilePath;

    fn add(mut self, rhs: T) -> FilePath {
        self.append(rhs);
        self
    }
}

impl<T: Into<FilePath>> Add<T> for &FilePath {
    type Output = FilePath;

    fn add(self, rhs: T) -> FilePath {
        self.concat(rhs)
    }
}

impl<T: Into<FilePath>> DivAssign<T> for FilePath {
    fn div_assign(&mut self, rhs: T) {
        self.push(rhs);
    }
}

impl<T: Into<FilePath>> Div<T> for FilePath {
    type Output = FilePath;

    fn div(mut self, rhs: T) -> FilePath {
        self.push(rhs);
        self
    }
}

impl<T: Into<FilePath>> Div<T> for &FilePath {
    type Output = FilePath;

    fn div(self, rhs: T) -> FilePath {
        self.join(rhs)
    }
}
