//! `paycalc-server`: serves the paycheck calculator over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use paycalc::api::{AppState, create_router};
use paycalc::config::{DEFAULT_CONFIG_FILE, resolve};
use paycalc::logging;

/// Serve the paycheck calculator over HTTP.
#[derive(Parser, Debug)]
#[command(name = "paycalc-server", version)]
struct Args {
    /// Configuration file resolved once at startup
    #[arg(short, long, value_name = "json_file", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    logging::init_with_default("info");

    let args = Args::parse();
    let state = AppState::new(resolve(Some(args.config.as_path())));
    info!(
        categories = state.config().taxes.len(),
        pay_rate_configured = state.config().pay_rate.is_some(),
        "Configuration resolved"
    );

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, "Listening");
    axum::serve(listener, create_router(state)).await
}
