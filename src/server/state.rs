//! Application state for the HTTP server.

use crate::RoverClient;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide photos client; clones share its configuration.
    pub client: RoverClient,
}

impl AppState {
    pub fn new(client: RoverClient) -> Self {
        Self { client }
    }
}
