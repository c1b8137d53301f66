//! Client for the Porkbun JSON API.
//!
//! Every call is a single authenticated POST. Nothing is cached or retried,
//! each call returns the parsed response or one [`PorkbunError`].
//!
//! ```no_run
//! # async fn run() -> porkbun_api::Result<()> {
//! use porkbun_api::{ClientConfig, PorkbunApi};
//!
//! let api = PorkbunApi::new(ClientConfig::new("pk1_...", "sk1_..."));
//! let records = api.dns().retrieve("example.com", None).await?;
//! println!("{} records", records.records.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod constants;
mod dns;
mod domain;
mod error;
mod ssl;
mod types;

pub use crate::client::{validate_ttl, AuthPayload, ClientConfig, PorkbunClient};
pub use crate::config::{Config, GeneralConfig, PorkbunConfig};
pub use crate::constants::{DEFAULT_BASE_URL, MIN_TTL};
pub use crate::dns::DnsApi;
pub use crate::domain::DomainApi;
pub use crate::error::{ConfigError, PorkbunError, Result};
pub use crate::ssl::SslApi;
pub use crate::types::*;

/// Entry point grouping the domain, DNS and SSL operations over one client.
#[derive(Clone, Debug)]
pub struct PorkbunApi {
    domain: DomainApi,
    dns: DnsApi,
    ssl: SslApi,
}

impl PorkbunApi {
    pub fn new(config: ClientConfig) -> Self {
        PorkbunApi::from_client(PorkbunClient::new(config))
    }

    pub fn from_client(client: PorkbunClient) -> Self {
        PorkbunApi {
            domain: DomainApi::new(client.clone()),
            dns: DnsApi::new(client.clone()),
            ssl: SslApi::new(client),
        }
    }

    pub fn domain(&self) -> &DomainApi {
        &self.domain
    }

    pub fn dns(&self) -> &DnsApi {
        &self.dns
    }

    pub fn ssl(&self) -> &SslApi {
        &self.ssl
    }
}
