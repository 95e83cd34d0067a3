use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ApplyArgs {
    /// Pipeline document (YAML) describing the column operations to run
    #[arg(long, value_name = "FILE")]
    pub pipeline: PathBuf,

    /// Input table as columnar JSON
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Where to write the resulting table (stdout when omitted)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Pipeline document (YAML) to check against the built-in registry
    #[arg(long, value_name = "FILE")]
    pub pipeline: PathBuf,
}
