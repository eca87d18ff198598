use std::io;

use anyhow::Result;
use assetdesk_cli::{logging, run, Cli};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
