//! Centralized constants for default endpoints, credentials and UA.

/// UA sent when none is configured.
pub(crate) const USER_AGENT: &str = "mars-photos-rs";

/// NASA mars-photos API base (version is appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/mars-photos/api/";

/// Default API version segment.
pub(crate) const DEFAULT_API_VERSION: &str = "v1";

/// Shared public key handed out by api.nasa.gov; heavily rate limited.
pub(crate) const DEMO_API_KEY: &str = "DEMO_KEY";

/// Environment variable consulted for an API key when none is set on the builder.
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// The only rover this client queries.
pub(crate) const ROVER: &str = "curiosity";
