//! Chat Gateway - multi-provider AI chat with ordered fallback
//!
//! Loads `.env`, configuration and logging, then serves the chatbot API.

#![allow(missing_docs)]

use chat_gateway::config::Config;
use chat_gateway::server::{self, DEFAULT_CONFIG_PATH};
use chat_gateway::utils::logging::{LogFormat, init_logging};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about)]
struct Args {
    /// Configuration file; built-in defaults are used when it does not exist
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Bind host (overrides config and GATEWAY_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config and GATEWAY_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log output format
    #[arg(long, value_enum, env = "GATEWAY_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may live in .env; a missing file is fine
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();

    if let Err(e) = init_logging(args.log_format) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    if let Ok(path) = dotenv {
        debug!("Loaded environment from {:?}", path);
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> chat_gateway::Result<()> {
    let mut config = Config::load(&args.config).await?;

    if let Some(host) = args.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }
    config.validate()?;

    server::run_server(config).await
}
