//! Command to create a directory.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use tecfs::FilePath;

/// Create a directory.
///
/// Exits with code 1 if the directory cannot be created and does not
/// already exist.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory to create
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Create missing parent directories as well
    #[arg(long, short = 'p')]
    pub parents: bool,
}

impl MkdirCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = FilePath::from(self.path);

        let created = if self.parents {
            path.mk_path()
        } else {
            path.mk_dir()
        };

        if !created {
            return Err(CliError::SemanticFailure(format!(
                "cannot create directory: {path}"
            )));
        }

        log::info!("directory ready: {path}");
        Ok(())
    }
}
