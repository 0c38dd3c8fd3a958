use std::io;

use clap::Parser;
use miette::miette;
use ringarray::Cli;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    log::debug!("ringarray v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    ringarray::run(&cli, &mut stdout.lock()).map_err(|e| miette!("{:#}", e))
}
