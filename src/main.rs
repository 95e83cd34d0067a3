use clap::Parser;
use tabpipe::{cli, logging};

fn main() -> tabpipe::Result<()> {
    let args = cli::Args::parse();
    logging::init()?;
    cli::run(args)
}
