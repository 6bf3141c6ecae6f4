use anyhow::Result;
use clap::Parser;
use ckvscan::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
