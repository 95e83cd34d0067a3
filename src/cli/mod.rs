pub mod args;
pub mod commands;

pub use args::{ApplyArgs, ValidateArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tabpipe")]
#[command(version = crate::VERSION)]
#[command(about = "Configuration-driven column transformation pipelines for tabular data")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Apply a pipeline to a table",
        after_help = "Example:\n    tabpipe apply --pipeline pipeline.yaml --input rows.json"
    )]
    Apply(ApplyArgs),
    #[command(
        about = "Validate a pipeline document without touching any table",
        after_help = "Example:\n    tabpipe validate --pipeline pipeline.yaml"
    )]
    Validate(ValidateArgs),
}

pub fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Apply(apply_args) => commands::apply(apply_args),
        Command::Validate(validate_args) => commands::validate(validate_args),
    }
}
