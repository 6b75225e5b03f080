mod cli;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use pricefetch_core::{lookup, ReqwestHttpClient, YahooClient};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    let transport = ReqwestHttpClient::new()?;
    let client = YahooClient::new(Arc::new(transport));

    let report = lookup::current_price(&client, &cli.symbol).await;
    output::render(&report, cli.json)?;

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
