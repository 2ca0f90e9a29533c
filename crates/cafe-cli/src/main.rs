//! cafe - REST service for cafes with wifi, sockets and coffee prices.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::fmt::format::FmtSpan;

use cafe_config::CafeConfig;
use cafe_transport_http::HttpServer;

mod shared;

/// Serve the cafe API over HTTP.
#[derive(Debug, Parser)]
#[command(name = "cafe", version, about)]
struct Cli {
    /// Configuration file path (TOML).
    #[arg(short, long)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    host: Option<String>,

    /// TCP port to listen on (overrides `server.port`).
    #[arg(short, long)]
    port: Option<u16>,

    /// Database path (overrides `store.database_path`).
    #[arg(long)]
    db: Option<String>,

    /// Shared secret for closing cafes (overrides `auth.api_key`).
    #[arg(long)]
    api_key: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply(&self, mut config: CafeConfig) -> CafeConfig {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(db) = &self.db {
            config.store.database_path = db.clone();
        }
        if let Some(key) = &self.api_key {
            config.auth.api_key = key.clone();
        }
        config
    }

    /// `-v` flags win over the configured level.
    fn log_filter(&self, config: &CafeConfig) -> String {
        match self.verbose {
            0 => config.logging.level.clone(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(cafe_config::load_config(cli.config.as_deref())?);

    let filter = cli.log_filter(&config);
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!(
        config_file = ?cli.config,
        db = %config.store.database_path,
        "cafe starting"
    );

    let addr: SocketAddr = config.server.socket_addr().ok_or_else(|| {
        anyhow::anyhow!(
            "server.host must be an IP address, got '{}'",
            config.server.host
        )
    })?;
    let repo = shared::open_repository(&config.store.database_path)?;

    HttpServer::new(repo, addr, config.auth.api_key.as_str())
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))
}
