use serde_json::{Map, Value};

use crate::client::{body_of, PorkbunClient};
use crate::error::Result;
use crate::types::*;

/// Domain level operations: listing, nameservers, URL forwarding.
#[derive(Clone, Debug)]
pub struct DomainApi {
    client: PorkbunClient,
}

impl DomainApi {
    pub fn new(client: PorkbunClient) -> Self {
        DomainApi { client }
    }

    /// Lists the domains in the account, one page per call.
    pub async fn list_all(&self, options: &DomainListOptions) -> Result<DomainListResponse> {
        let mut body = Map::new();
        body.insert(
            "start".to_string(),
            Value::from(options.start.unwrap_or(0).to_string()),
        );
        body.insert(
            "includeLabels".to_string(),
            Value::from(yes_no_str(options.include_labels.unwrap_or(false))),
        );

        self.client.send("/domain/listAll", body).await
    }

    pub async fn get_name_servers(&self, domain: &str) -> Result<NameServersResponse> {
        self.client
            .send(&format!("/domain/getNs/{}", domain), Map::new())
            .await
    }

    /// Replaces the full nameserver list.
    pub async fn update_name_servers(
        &self,
        domain: &str,
        nameservers: &[String],
    ) -> Result<ApiResponse> {
        let mut body = Map::new();
        body.insert("ns".to_string(), Value::from(nameservers.to_vec()));

        self.client
            .send(&format!("/domain/updateNs/{}", domain), body)
            .await
    }

    pub async fn add_url_forward(
        &self,
        domain: &str,
        options: &UrlForwardingOptions,
    ) -> Result<ApiResponse> {
        self.client
            .send(&format!("/domain/addUrlForward/{}", domain), body_of(options)?)
            .await
    }

    pub async fn get_url_forwarding(&self, domain: &str) -> Result<UrlForwardingResponse> {
        self.client
            .send(&format!("/domain/getUrlForwarding/{}", domain), Map::new())
            .await
    }

    pub async fn delete_url_forward(&self, domain: &str, id: &str) -> Result<ApiResponse> {
        self.client
            .send(
                &format!("/domain/deleteUrlForward/{}/{}", domain, id),
                Map::new(),
            )
            .await
    }

    /// Checks the credentials and reports the caller's public IP.
    pub async fn ping(&self) -> Result<PingResponse> {
        self.client.send("/ping", Map::new()).await
    }
}
