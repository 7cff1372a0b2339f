//! JSON front door over [`RoverClient`](crate::RoverClient).
//!
//! ```text
//! inbound request ─▶ handlers (parse date / hours) ─▶ RoverClient::fetch_photos
//!                                                          │
//! JSON response ◀── PhotoCollection or AppError ◀──────────┘
//! ```
//!
//! Routes:
//! - `/` (and any unmatched path): optional JSON body `{"date": "Y-M-D"}`.
//! - `/past`: `POST {"hours": N}` or `?h=N` for other methods.

pub mod config;
pub mod error;
pub mod handlers;
pub mod lookback;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::AppError;
pub use lookback::lookback;
pub use router::create_router;
pub use state::AppState;

use crate::RoverClient;

/// Bind `config.addr` and serve until the process is stopped.
///
/// # Errors
///
/// Returns the I/O error if the listener cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig, client: RoverClient) -> std::io::Result<()> {
    let app = create_router(AppState::new(client));
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "mars rover server listening");
    axum::serve(listener, app).await
}
