//! Decomposition and query operations on [`FilePath`].
//!
//! A path is viewed as the sequence of *elements* obtained by splitting its
//! text on the native separator. A leading separator therefore produces an
//! empty first element and a trailing separator an empty last one, which is
//! what lets [`FilePath::subpath`] reproduce the separators at either end of
//! a slice.
//!
//! None of these operations fail: empty or malformed input yields an empty
//! result.

use crate::path::FilePath;

impl FilePath {
    /// The text after the last separator.
    ///
    /// Empty when the path is empty or ends with a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// assert_eq!(FilePath::from("assets/bob/bob.md5mesh").file_name(), "bob.md5mesh");
    /// assert_eq!(FilePath::from("assets/bob/").file_name(), "");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self.path.rfind(Self::SEPARATOR) {
            Some(pos) => &self.path[pos + Self::SEPARATOR.len_utf8()..],
            None => &self.path,
        }
    }

    /// The text after the last `.` of the file name.
    ///
    /// Empty when there is no file name or it has no dot. Only the last dot
    /// counts, so `archive.tar.gz` gives `gz` and `.bashrc` gives `bashrc`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// assert_eq!(FilePath::from("a/archive.tar.gz").file_extension(), "gz");
    /// assert_eq!(FilePath::from("a.d/Makefile").file_extension(), "");
    /// ```
    #[must_use]
    pub fn file_extension(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(pos) => &name[pos + 1..],
            None => "",
        }
    }

    /// The directory containing the last path element, with a trailing
    /// separator.
    ///
    /// For a file this is its directory; for a directory (trailing separator)
    /// it is the parent, like `cd ..`. Empty when there is no enclosing
    /// directory in the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// let file = FilePath::from("assets/bob/bob.md5mesh");
    /// assert_eq!(file.base_path().to_generic_string(), "assets/bob/");
    ///
    /// let dir = FilePath::from("assets/bob/");
    /// assert_eq!(dir.base_path().to_generic_string(), "assets/");
    /// ```
    #[must_use]
    pub fn base_path(&self) -> FilePath {
        let separator = Self::SEPARATOR;
        let trimmed = self.path.strip_suffix(separator).unwrap_or(&self.path);
        match trimmed.rfind(separator) {
            Some(pos) => FilePath {
                path: trimmed[..pos + separator.len_utf8()].to_string(),
            },
            None => FilePath::new(),
        }
    }

    /// Elements `[begin, end)` of the path.
    ///
    /// `end = None` ([`FilePath::END`]) runs through the last element. The
    /// result starts with a separator when `begin > 0` and ends with one when
    /// the slice stops before the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// let f = FilePath::from("./assets/foo/bar/mesh.obj");
    /// assert_eq!(f.subpath(2, FilePath::END).to_generic_string(), "/foo/bar/mesh.obj");
    /// assert_eq!(f.subpath(0, Some(2)).to_generic_string(), "./assets/");
    /// ```
    #[must_use]
    pub fn subpath(&self, begin: usize, end: Option<usize>) -> FilePath {
        if self.path.is_empty() {
            return FilePath::new();
        }

        let separator = Self::SEPARATOR;
        let elements: Vec<&str> = self.path.split(separator).collect();
        let count = elements.len();
        let end = end.map_or(count, |end| end.min(count));
        if begin >= end {
            return FilePath::new();
        }

        let mut buf = [0; 4];
        let joiner: &str = separator.encode_utf8(&mut buf);

        let mut out = String::with_capacity(self.path.len());
        if begin > 0 {
            out.push(separator);
        }
        out.push_str(&elements[begin..end].join(joiner));
        if end < count {
            out.push(separator);
        }
        FilePath { path: out }
    }

    /// Everything after the first element equal to `needle`.
    ///
    /// With `include`, the matching element is kept. Empty when `needle` is
    /// empty or is not a whole element of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// let f = FilePath::from("./assets/foo/bar/mesh.obj");
    /// assert_eq!(f.subpath_from("assets", false).to_generic_string(), "/foo/bar/mesh.obj");
    /// assert_eq!(f.subpath_from("assets", true).to_generic_string(), "/assets/foo/bar/mesh.obj");
    /// assert!(f.subpath_from("ass", false).is_empty());
    /// ```
    #[must_use]
    pub fn subpath_from(&self, needle: &str, include: bool) -> FilePath {
        if needle.is_empty() {
            return FilePath::new();
        }
        let Some(index) = self.path.split(Self::SEPARATOR).position(|e| e == needle) else {
            return FilePath::new();
        };
        let begin = if include { index } else { index + 1 };
        self.subpath(begin, Self::END)
    }

    /// Iterate over the non-empty elements of the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecfs::FilePath;
    ///
    /// let path = FilePath::from("/usr//share/tec/");
    /// let parts: Vec<&str> = path.components().collect();
    /// assert_eq!(parts, ["usr", "share", "tec"]);
    /// ```
    pub fn components(&self) -> impl Iterator<Item = &str> + '_ {
        self.path.split(Self::SEPARATOR).filter(|e| !e.is_empty())
    }
}
