//! Commands to resolve the assets directory and individual assets.

use crate::error::CliError;
use crate::utils::{build_resolver, print_json, GlobalOptions, OutputFormat, PathReport};
use clap::Args;
use serde::Serialize;
use tecfs::{Error as LibError, FilePath, PathResolver};

/// Show the resolved assets directory.
///
/// Fails with exit code 1 when no candidate directory exists.
#[derive(Args)]
pub struct AssetsBaseCommand {
    /// Also list the candidate directories that were probed
    #[arg(long)]
    pub candidates: bool,

    /// Print with `/` separators
    #[arg(long)]
    pub generic: bool,
}

#[derive(Debug, Serialize)]
struct AssetsBase {
    base: PathReport,
    candidates: Vec<PathReport>,
}

impl AssetsBaseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global);
        let base = resolved_base(&resolver)?;

        match global.format {
            OutputFormat::Human => {
                PathReport::new(&base).print(OutputFormat::Human, self.generic)?;
                if self.candidates {
                    for candidate in resolver.asset_candidates() {
                        PathReport::new(&candidate).print(OutputFormat::Human, self.generic)?;
                    }
                }
            }
            OutputFormat::Json => {
                let candidates = if self.candidates {
                    resolver.asset_candidates().iter().map(PathReport::new).collect()
                } else {
                    Vec::new()
                };
                print_json(&AssetsBase {
                    base: PathReport::new(&base),
                    candidates,
                })?;
            }
        }
        Ok(())
    }
}

/// Resolve an asset name to its full path.
#[derive(Args)]
pub struct AssetCommand {
    /// Asset name relative to the assets directory
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Fail unless the asset exists as a file
    #[arg(long)]
    pub check: bool,

    /// Print with `/` separators
    #[arg(long)]
    pub generic: bool,
}

impl AssetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global);
        resolved_base(&resolver)?;

        let asset = resolver.asset_path(FilePath::from(self.name));
        if self.check && !asset.file_exists() {
            return Err(CliError::SemanticFailure(format!(
                "asset not found: {asset}"
            )));
        }

        PathReport::new(&asset).print(global.format, self.generic)
    }
}

fn resolved_base(resolver: &PathResolver) -> Result<FilePath, CliError> {
    let base = resolver.assets_base_path();
    if base.is_empty() {
        return Err(LibError::NotFound {
            resource: "assets directory (set --assets-dir or TECFS_ASSETS_DIR)".into(),
        }
        .into());
    }
    Ok(base)
}
