use clap::Parser;
use http_content_check::check::{CheckOutcome, ContentCheck};
use http_content_check::cli::Cli;
use http_content_check::config::{CheckConfig, LogFormat};
use http_content_check::kuberhealthy::KuberhealthyClient;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = http_content_check::logging::init_tracing(&cli.logging_config()) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if cli.log_format.parse::<LogFormat>().is_err() {
        tracing::warn!(log_format = %cli.log_format, "Unknown log format, using pretty");
    }

    let kuberhealthy = match KuberhealthyClient::new(cli.kuberhealthy_config()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build Kuberhealthy client");
            std::process::exit(1);
        }
    };

    let check = ContentCheck::new(kuberhealthy.clone(), kuberhealthy);

    match check.run(CheckConfig::load(&cli)).await {
        Ok(CheckOutcome::Passed) => {}
        Ok(CheckOutcome::Failed(message)) => {
            tracing::debug!(error = %message, "Check finished with reported failure");
        }
        Err(e) => {
            tracing::error!(error = %e, "error when reporting to kuberhealthy");
            std::process::exit(1);
        }
    }
}
