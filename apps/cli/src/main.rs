use anyhow::Context;
use clap::Parser;
use plume::domain::config::PlumeConfig;
use plume::kernel::config::load_config;
use plume_cli::args::Cli;
use plume_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config: PlumeConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = Logger::from_config(env!("CARGO_BIN_NAME"), &config.logging)?;

    let catalog = plume::init(&config)?;
    let mut stdout = std::io::stdout().lock();
    plume_cli::run(cli.command, &catalog, &config.render, &mut stdout)
}
