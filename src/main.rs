use anyhow::Context;
use clap::Parser;
use pavlok_zap::config::env::token_from_env;
use pavlok_zap::config::{is_informational, rejected_arguments};
use pavlok_zap::utils::logger;
use pavlok_zap::{dispatch, render_outcome, CliConfig, HttpStimulusSender, ZapError};
use std::io::Write;

fn fail(e: ZapError) -> ! {
    tracing::debug!("❌ {} (Category: {:?})", e, e.category());
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => fail(rejected_arguments(&e, token_from_env())),
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let result = match HttpStimulusSender::new(config.api_endpoint.clone(), config.timeout()) {
        Ok(sender) => {
            tracing::debug!("Using endpoint {}", sender.endpoint());
            dispatch(&sender, &config, token_from_env()).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", render_outcome(&outcome)).context("failed to write response")?;
            Ok(())
        }
        Err(e) => fail(e),
    }
}
