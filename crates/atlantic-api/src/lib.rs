//! Typed Rust client for the Atlantic.Net Cloud API.
//!
//! Covers instances (run, list, describe, reboot, shutdown, power on,
//! resize, reprovision, terminate), images, plans, locations, private
//! networks, public IPs and SSH keys.
//!
//! Every operation is a single signed form POST to the API endpoint. The
//! client holds no mutable state and can be cloned and shared across tasks.

mod action;
mod envelope;
mod images;
mod instances;
mod locations;
mod networks;
mod plans;
mod public_ips;
mod sign;
mod ssh_keys;
mod types;

pub use action::Action;
pub use sign::sign;
pub use types::*;

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::envelope::ErrorEnvelope;

pub const DEFAULT_ENDPOINT: &str = "https://cloudapi.atlantic.net/";
pub const API_VERSION: &str = "2010-12-30";
pub const RESPONSE_FORMAT: &str = "json";

const ERROR_PREFIX: &[u8] = br#"{"error":"#;

/// Error reported by the API itself, preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("atlantic: {message} ({code})")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Server timestamp, seconds since the epoch.
    #[serde(default)]
    pub time: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("atlantic: {0} must be provided")]
    Validation(&'static str),

    #[error("atlantic api request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("atlantic api response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("atlantic: ssh key not found: {0}")]
    SshKeyNotFound(String),

    #[error("missing env var: {0}")]
    MissingEnv(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Atlantic.Net Cloud API.
#[derive(Clone)]
pub struct AtlanticClient {
    access_key: String,
    private_key: String,
    endpoint: String,
    version: String,
    format: String,
    http: reqwest::Client,
}

impl fmt::Debug for AtlanticClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtlanticClient")
            .field("access_key", &self.access_key)
            .field("private_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("version", &self.version)
            .field("format", &self.format)
            .finish()
    }
}

impl AtlanticClient {
    pub fn new(access_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            private_key: private_key.into(),
            endpoint: DEFAULT_ENDPOINT.into(),
            version: API_VERSION.into(),
            format: RESPONSE_FORMAT.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Convenience constructor for binaries and scripts. It is not part of the
    /// client's contract: the client never reads the environment by itself,
    /// and [`AtlanticClient::new`] is the supported way to supply credentials.
    ///
    /// Loads `.env` if present, then reads `ATLANTIC_ACCESS_KEY` and
    /// `ATLANTIC_PRIVATE_KEY` (required) and `ATLANTIC_ENDPOINT` (optional).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let access_key = std::env::var("ATLANTIC_ACCESS_KEY")
            .map_err(|_| Error::MissingEnv("ATLANTIC_ACCESS_KEY".into()))?;
        let private_key = std::env::var("ATLANTIC_PRIVATE_KEY")
            .map_err(|_| Error::MissingEnv("ATLANTIC_PRIVATE_KEY".into()))?;

        let client = Self::new(access_key, private_key);
        Ok(match std::env::var("ATLANTIC_ENDPOINT") {
            Ok(endpoint) => client.with_endpoint(endpoint),
            Err(_) => client,
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a preconfigured HTTP client, e.g. one with timeouts or a proxy.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a signed request for a raw action string and return the response
    /// as indented JSON.
    ///
    /// Only whitespace changes: key order and number text are kept as sent,
    /// which relies on serde_json's `preserve_order` and `arbitrary_precision`.
    /// An error envelope from the provider is returned as [`Error::Api`], or as
    /// [`Error::Decode`] when it does not have the expected shape.
    pub async fn execute(&self, action: &str) -> Result<String> {
        let nonce = uuid::Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign(&self.private_key, timestamp, &nonce);
        let timestamp = timestamp.to_string();

        let operation = action.split('&').next().unwrap_or(action);
        debug!(action = operation, endpoint = %self.endpoint, "atlantic: sending request");

        let body = self
            .http
            .post(&self.endpoint)
            .form(&[
                ("Format", self.format.as_str()),
                ("Version", self.version.as_str()),
                ("ACSAccessKeyId", self.access_key.as_str()),
                ("Timestamp", timestamp.as_str()),
                ("Rndguid", nonce.as_str()),
                ("Signature", signature.as_str()),
                ("Action", action),
            ])
            .send()
            .await?
            .bytes()
            .await?;

        if body.starts_with(ERROR_PREFIX) {
            let envelope: ErrorEnvelope = serde_json::from_slice(&body)?;
            return Err(envelope.error.into());
        }

        let payload: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Run an action and decode the payload into its response envelope.
    pub(crate) async fn call<T: DeserializeOwned>(&self, action: &Action) -> Result<T> {
        let body = self.execute(action.as_str()).await?;
        let decoded = serde_json::from_str(&body)?;
        debug!(action = action.name(), "atlantic: response decoded");
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let client = AtlanticClient::new("ak", "pk");
        assert_eq!(client.access_key(), "ak");
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(client.version, API_VERSION);
        assert_eq!(client.format, RESPONSE_FORMAT);
    }

    #[test]
    fn debug_output_hides_private_key() {
        let client = AtlanticClient::new("ak", "super-secret");
        let rendered = format!("{client:?}");
        assert!(rendered.contains("ak"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn api_error_display_includes_code() {
        let err = Error::from(ApiError {
            code: "E0001".into(),
            message: "invalid instance".into(),
            time: 0,
        });
        assert_eq!(err.to_string(), "atlantic: invalid instance (E0001)");
    }

    #[test]
    fn validation_error_names_the_field() {
        assert_eq!(
            Error::Validation("Instance ID").to_string(),
            "atlantic: Instance ID must be provided"
        );
    }
}
