//! Command to show the per-user and program directories.

use crate::error::CliError;
use crate::utils::{build_resolver, print_json, GlobalOptions, OutputFormat};
use clap::Args;
use serde::Serialize;
use tecfs::FilePath;

/// Show the per-user settings, data and cache directories and the program
/// directory.
#[derive(Args)]
pub struct SpecialDirsCommand {
    /// Print with `/` separators
    #[arg(long)]
    pub generic: bool,
}

#[derive(Debug, Serialize)]
struct SpecialDirs {
    app_name: String,
    settings: String,
    data: String,
    cache: String,
    program: String,
}

impl SpecialDirsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global);
        let render = |path: FilePath| {
            if self.generic {
                path.to_generic_string()
            } else {
                path.into_string()
            }
        };

        let dirs = SpecialDirs {
            app_name: resolver.app_name().to_string(),
            settings: render(resolver.user_settings_path()),
            data: render(resolver.user_data_path()),
            cache: render(resolver.user_cache_path()),
            program: render(resolver.program_path()),
        };

        match global.format {
            OutputFormat::Human => {
                println!("app:      {}", dirs.app_name);
                println!("settings: {}", dirs.settings);
                println!("data:     {}", dirs.data);
                println!("cache:    {}", dirs.cache);
                println!("program:  {}", dirs.program);
            }
            OutputFormat::Json => print_json(&dirs)?,
        }
        Ok(())
    }
}
