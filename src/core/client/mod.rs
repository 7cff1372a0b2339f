//! Public client surface + builder.
//! Defaults (endpoint, UA, demo key) live in `constants`.

mod constants;

pub use constants::API_KEY_ENV;
pub(crate) use constants::ROVER;

use crate::core::RoverError;
use constants::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEMO_API_KEY, USER_AGENT};
use parking_lot::RwLock;
use reqwest::Client;
use std::env;
use std::sync::Arc;
use url::Url;

/// Mutable connection settings shared by every clone of a [`RoverClient`].
#[derive(Debug)]
struct Config {
    api_key: Option<String>,
    version: Option<String>,
    user_agent: Option<String>,
    http: Client,
}

/// Handle to the NASA Mars rover photos API.
///
/// Cloning is cheap and clones share configuration: a setter called on one
/// clone is observed by all of them. Reads take a shared lock, setters an
/// exclusive one, and the lock is never held across a request.
#[derive(Debug, Clone)]
pub struct RoverClient {
    base_url: Url,
    config: Arc<RwLock<Config>>,
}

impl Default for RoverClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

/// A single configuration change, applied in order by [`RoverClient::new`].
#[derive(Debug, Clone)]
pub enum ClientOption {
    /// Sets the `api_key` query parameter.
    ApiKey(String),
    /// Sets the `User-Agent` header.
    UserAgent(String),
    /// Replaces the outbound HTTP transport.
    HttpClient(Client),
    /// Sets the API version path segment.
    Version(String),
}

impl ClientOption {
    fn apply(self, client: &RoverClient) {
        match self {
            ClientOption::ApiKey(key) => client.set_api_key(key),
            ClientOption::UserAgent(ua) => client.set_user_agent(ua),
            ClientOption::HttpClient(http) => client.set_http_client(http),
            ClientOption::Version(version) => client.set_version(version),
        }
    }
}

impl RoverClient {
    /// Create a new builder.
    pub fn builder() -> RoverClientBuilder {
        RoverClientBuilder::default()
    }

    /// Build a default client, then apply `options` in order.
    ///
    /// # Errors
    ///
    /// Fails only if the default HTTP transport cannot be initialized.
    pub fn new(options: impl IntoIterator<Item = ClientOption>) -> Result<Self, RoverError> {
        let client = Self::builder().build()?;
        for opt in options {
            opt.apply(&client);
        }
        Ok(client)
    }

    /// The configured API key, or the public demo key when unset or empty.
    pub fn api_key(&self) -> String {
        self.config
            .read()
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| DEMO_API_KEY.to_string())
    }

    pub fn set_api_key(&self, key: impl Into<String>) {
        self.config.write().api_key = Some(key.into());
    }

    /// The API version path segment, `v1` unless overridden.
    pub fn version(&self) -> String {
        self.config
            .read()
            .version
            .clone()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string())
    }

    pub fn set_version(&self, version: impl Into<String>) {
        self.config.write().version = Some(version.into());
    }

    pub fn user_agent(&self) -> String {
        self.config
            .read()
            .user_agent
            .clone()
            .filter(|ua| !ua.is_empty())
            .unwrap_or_else(|| USER_AGENT.to_string())
    }

    pub fn set_user_agent(&self, ua: impl Into<String>) {
        self.config.write().user_agent = Some(ua.into());
    }

    /// Swap the outbound transport; requests already in flight keep the old one.
    pub fn set_http_client(&self, http: Client) {
        self.config.write().http = http;
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> Client {
        self.config.read().http.clone()
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct RoverClientBuilder {
    api_key: Option<String>,
    version: Option<String>,
    user_agent: Option<String>,
    http: Option<Client>,
    base_url: Option<Url>,
}

impl RoverClientBuilder {
    /// Use this API key instead of `NASA_API_KEY` / the demo key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Bring your own transport (proxies, timeouts, custom TLS).
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Override the API version segment (default `v1`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// For tests or mirrors: customize the API base.
    /// Defaults to `https://api.nasa.gov/mars-photos/api/`.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn build(self) -> Result<RoverClient, RoverError> {
        self.build_with_lookup(|key| env::var(key).ok())
    }

    /// Like [`build`](Self::build), reading `NASA_API_KEY` through `lookup`
    /// instead of the process environment.
    pub fn build_with_lookup(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<RoverClient, RoverError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let api_key = self
            .api_key
            .or_else(|| lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()));

        let http = match self.http {
            Some(http) => http,
            None => Client::builder().build()?,
        };

        Ok(RoverClient {
            base_url,
            config: Arc::new(RwLock::new(Config {
                api_key,
                version: self.version,
                user_agent: self.user_agent,
                http,
            })),
        })
    }
}
