//! Commands to extract part of a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathReport};
use clap::Args;
use tecfs::FilePath;

/// Extract the path elements in `[BEGIN, END)`.
///
/// Elements are counted between separators, so a leading separator makes
/// element 0 empty.
#[derive(Args)]
pub struct SubpathCommand {
    /// Path to slice
    #[arg(value_name = "PATH")]
    pub path: String,

    /// First element to keep
    #[arg(value_name = "BEGIN")]
    pub begin: usize,

    /// Element to stop before (default: through the last element)
    #[arg(value_name = "END")]
    pub end: Option<usize>,

    /// Print with `/` separators
    #[arg(long)]
    pub generic: bool,
}

impl SubpathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(end) = self.end {
            if end < self.begin {
                return Err(CliError::InvalidArguments(format!(
                    "END ({end}) must not be less than BEGIN ({})",
                    self.begin
                )));
            }
        }

        let sub = FilePath::from(self.path).subpath(self.begin, self.end);
        PathReport::new(&sub).print(global.format, self.generic)
    }
}

/// Extract everything after the first element named NEEDLE.
#[derive(Args)]
pub struct SubpathFromCommand {
    /// Path to search
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Element to search for
    #[arg(value_name = "NEEDLE")]
    pub needle: String,

    /// Keep the matching element in the output
    #[arg(long)]
    pub include: bool,

    /// Print with `/` separators
    #[arg(long)]
    pub generic: bool,
}

impl SubpathFromCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = FilePath::from(self.path);
        let sub = path.subpath_from(&self.needle, self.include);
        if sub.is_empty() {
            log::debug!("no element '{}' in {path}", self.needle);
        }
        PathReport::new(&sub).print(global.format, self.generic)
    }
}
