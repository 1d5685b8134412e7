//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

mod app;
mod cli;
mod logging;

use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = cli::Cli::parse();
    logging::init_logger(cli.log_level, &cli.log_file)?;
    app::run(cli)
}
