use std::io;

use friction_server::{FrictionServer, ServerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,friction_server=info,friction_store=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let server = FrictionServer::from_config(&config)
        .map_err(io::Error::other)?;
    server.serve_http(&config.http_addr)
}
