//! Mars rover photos HTTP server.
//!
//! # Usage
//!
//! ```bash
//! MARS_ROVER_SERVER_PORT=9090 NASA_API_KEY=... cargo run --bin mars-rover-server
//! curl -d '{"date": "2016-10-23"}' localhost:9090/
//! curl 'localhost:9090/past?h=36'
//! ```
//!
//! # Environment Variables
//!
//! - `MARS_ROVER_SERVER_PORT`: listen port (default: 8080, a leading `:` is accepted)
//! - `NASA_API_KEY`: api.nasa.gov key (default: `DEMO_KEY`)
//! - `RUST_LOG`: log filter (default: info)

use tracing::info;
use tracing_subscriber::EnvFilter;

use mars_photos_rs::RoverClient;
use mars_photos_rs::server::{self, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = ServerConfig::from_env()?;
    let client = RoverClient::builder().build()?;
    info!(version = %client.version(), user_agent = %client.user_agent(), "photos client ready");

    server::serve(&config, client).await?;
    Ok(())
}
