//! Command to join path parts.

use crate::error::CliError;
use crate::utils::{GlobalOptions, PathReport};
use clap::Args;
use tecfs::FilePath;

/// Join path elements as directories, or concatenate them verbatim.
#[derive(Args)]
pub struct JoinCommand {
    /// Starting path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Parts appended in order
    #[arg(value_name = "PART", required = true)]
    pub parts: Vec<String>,

    /// Concatenate instead of inserting separators
    #[arg(long)]
    pub concat: bool,

    /// Print with `/` separators
    #[arg(long)]
    pub generic: bool,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let concat = self.concat;
        let joined = self
            .parts
            .into_iter()
            .fold(FilePath::from(self.base), |mut acc, part| {
                if concat {
                    acc += part;
                } else {
                    acc /= part;
                }
                acc
            });

        PathReport::new(&joined).print(global.format, self.generic)
    }
}
