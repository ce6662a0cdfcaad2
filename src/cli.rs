//! Command line of the `catalog-import` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Validate and import catalog categories from a YAML seed file."
)]
pub struct Cli {
    /// Settings file (YAML). `CATALOG_*` environment variables override it.
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed file to import, overriding `seed_path` from the settings.
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,
}
