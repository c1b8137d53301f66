use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::*;
use crate::error::{PorkbunError, Result};

/// Credentials and endpoint, fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub secret_api_key: String,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn auth_payload(&self) -> AuthPayload<'_> {
        AuthPayload {
            apikey: &self.api_key,
            secretapikey: &self.secret_api_key,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("secret_api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Credential fields added to every request body.
#[derive(Debug)]
pub struct AuthPayload<'a> {
    pub apikey: &'a str,
    pub secretapikey: &'a str,
}

impl AuthPayload<'_> {
    /// Writes the credentials into `body`, replacing any caller supplied value.
    fn apply(&self, body: &mut Map<String, Value>) {
        body.insert("apikey".to_string(), Value::from(self.apikey));
        body.insert("secretapikey".to_string(), Value::from(self.secretapikey));
    }
}

/// Authenticated transport shared by the endpoint groups.
///
/// Cloning is cheap: the HTTP client is reference counted internally and the
/// config sits behind an [`Arc`]. Nothing here is mutated after construction,
/// so concurrent calls need no coordination.
#[derive(Clone, Debug)]
pub struct PorkbunClient {
    http: Client,
    config: Arc<ClientConfig>,
}

impl PorkbunClient {
    /// No network I/O happens until the first call.
    pub fn new(config: ClientConfig) -> Self {
        PorkbunClient::with_http_client(config, Client::new())
    }

    /// Uses a preconfigured reqwest client, e.g. one with a timeout or proxy.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        PorkbunClient {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POSTs `body` plus credentials to `base_url + path` and decodes the reply.
    ///
    /// Credentials are written last, so `apikey`/`secretapikey` keys in `body`
    /// never reach the wire.
    pub async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        mut body: Map<String, Value>,
    ) -> Result<T> {
        self.config.auth_payload().apply(&mut body);

        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!("POST {}", path);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PorkbunError::api(e.to_string(), e.status().map(|s| s.as_u16())))?;

        let status = response.status();
        debug!("POST {} returned {}", path, status.as_u16());

        if status == StatusCode::FORBIDDEN {
            warn!("Porkbun rejected the credentials for {}", path);
            return Err(PorkbunError::Auth);
        }

        let text = response
            .text()
            .await
            .map_err(|e| PorkbunError::api(e.to_string(), Some(status.as_u16())))?;

        if !status.is_success() {
            let message = remote_message(&text).unwrap_or_else(|| {
                format!("Request failed with status code {}", status.as_u16())
            });
            return Err(PorkbunError::api(message, Some(status.as_u16())));
        }

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| PorkbunError::api(e.to_string(), Some(status.as_u16())))?;

        if value.get("status").and_then(Value::as_str) == Some("ERROR") {
            let message = remote_message(&text).unwrap_or_else(|| "request failed".to_string());
            return Err(PorkbunError::api(message, Some(status.as_u16())));
        }

        serde_json::from_value(value)
            .map_err(|e| PorkbunError::api(e.to_string(), Some(status.as_u16())))
    }
}

/// Rejects a TTL below the Porkbun minimum. `None` leaves the remote default.
pub fn validate_ttl(ttl: Option<u32>) -> Result<()> {
    match ttl {
        Some(ttl) if ttl < MIN_TTL => Err(PorkbunError::validation(TTL_TOO_LOW_MESSAGE)),
        _ => Ok(()),
    }
}

/// Turns typed options into a request body.
pub(crate) fn body_of<S: Serialize>(options: &S) -> Result<Map<String, Value>> {
    match serde_json::to_value(options) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(PorkbunError::validation("request body must be a JSON object")),
        Err(e) => Err(PorkbunError::validation(e.to_string())),
    }
}

fn remote_message(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
