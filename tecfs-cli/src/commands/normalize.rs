//! Command to print a path in normalized form.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathReport};
use clap::Args;
use tecfs::FilePath;

/// Print a path in normalized form.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print with `/` separators
    #[arg(long)]
    pub generic: bool,

    /// Fail if the path is not a plausible native path
    #[arg(long)]
    pub validate: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = FilePath::from(self.path);
        if self.validate {
            path.validate()?;
        }

        PathReport::new(&path).print(global.format, self.generic)
    }
}
