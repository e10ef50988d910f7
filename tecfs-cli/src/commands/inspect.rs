//! Command to show the parts of a path.

use crate::error::CliError;
use crate::utils::{print_json, GlobalOptions, OutputFormat};
use clap::Args;
use serde::Serialize;
use tecfs::FilePath;

/// Show file name, extension, base path and flags of a path.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

/// Everything `inspect` reports about a path.
#[derive(Debug, Serialize)]
struct Inspection {
    path: String,
    generic: String,
    file_name: String,
    extension: String,
    base_path: String,
    components: Vec<String>,
    is_absolute: bool,
    is_valid: bool,
    exists: bool,
}

impl Inspection {
    fn of(path: &FilePath) -> Self {
        Self {
            path: path.as_str().to_string(),
            generic: path.to_generic_string(),
            file_name: path.file_name().to_string(),
            extension: path.file_extension().to_string(),
            base_path: path.base_path().into_string(),
            components: path.components().map(str::to_string).collect(),
            is_absolute: path.is_absolute_path(),
            is_valid: path.is_valid_path(),
            exists: path.dir_exists() || path.file_exists(),
        }
    }

    fn print_human(&self) {
        println!("path:        {}", self.path);
        println!("generic:     {}", self.generic);
        println!("file name:   {}", self.file_name);
        println!("extension:   {}", self.extension);
        println!("base path:   {}", self.base_path);
        println!("components:  {}", self.components.join(" | "));
        println!("absolute:    {}", self.is_absolute);
        println!("valid:       {}", self.is_valid);
        println!("exists:      {}", self.exists);
    }
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let inspection = Inspection::of(&FilePath::from(self.path));

        match global.format {
            OutputFormat::Human => inspection.print_human(),
            OutputFormat::Json => print_json(&inspection)?,
        }
        Ok(())
    }
}
