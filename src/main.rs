use anyhow::Context;
use clap::Parser;
use fx_converter::config;
use fx_converter::domain::ports::ConfigProvider;
use fx_converter::utils::logger;
use fx_converter::{CliConfig, Session, StdConsole};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose());

    tracing::info!("Starting fx-converter");
    if config.verbose() {
        tracing::debug!("CLI config: {:?}", config);
    }

    let table = config::load_table(&config).with_context(|| match config.rates_file() {
        Some(path) => format!("Failed to load rates file '{}'", path),
        None => "Failed to build the builtin rate table".to_string(),
    })?;
    tracing::debug!(
        currencies = table.len(),
        base = %table.base(),
        "rate table ready"
    );

    let mut session = Session::new(table, StdConsole);
    session.run().context("Session ended unexpectedly")?;

    tracing::info!("Session finished");
    Ok(())
}
