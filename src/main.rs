use anyhow::Result;
use clap::Parser;
use std::io;

use crudder::logging::init_logging;
use crudder::{Cli, Config, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(&cli);
    run(&config, &mut io::stdout()).await?;

    Ok(())
}
