use serde_json::Map;

use crate::client::{body_of, validate_ttl, PorkbunClient};
use crate::error::Result;
use crate::types::*;

/// DNS record operations. Edits replace the stored record, nothing is diffed here.
#[derive(Clone, Debug)]
pub struct DnsApi {
    client: PorkbunClient,
}

impl DnsApi {
    pub fn new(client: PorkbunClient) -> Self {
        DnsApi { client }
    }

    pub async fn create(
        &self,
        domain: &str,
        options: &DnsCreateOptions,
    ) -> Result<DnsCreateResponse> {
        validate_ttl(options.ttl)?;
        self.client
            .send(&format!("/dns/create/{}", domain), body_of(options)?)
            .await
    }

    pub async fn edit(&self, domain: &str, id: &str, options: &DnsEditOptions) -> Result<ApiResponse> {
        validate_ttl(options.ttl)?;
        self.client
            .send(&format!("/dns/edit/{}/{}", domain, id), body_of(options)?)
            .await
    }

    /// Edits every record matching `record_type` and `subdomain` (empty for the root).
    pub async fn edit_by_name_type(
        &self,
        domain: &str,
        record_type: DnsRecordType,
        subdomain: &str,
        options: &DnsEditOptions,
    ) -> Result<ApiResponse> {
        validate_ttl(options.ttl)?;
        self.client
            .send(
                &format!("/dns/editByNameType/{}/{}/{}", domain, record_type, subdomain),
                body_of(options)?,
            )
            .await
    }

    pub async fn delete(&self, domain: &str, id: &str) -> Result<ApiResponse> {
        self.client
            .send(&format!("/dns/delete/{}/{}", domain, id), Map::new())
            .await
    }

    pub async fn delete_by_name_type(
        &self,
        domain: &str,
        record_type: DnsRecordType,
        subdomain: &str,
    ) -> Result<ApiResponse> {
        self.client
            .send(
                &format!("/dns/deleteByNameType/{}/{}/{}", domain, record_type, subdomain),
                Map::new(),
            )
            .await
    }

    /// All records of `domain`, or only the one with `id`.
    pub async fn retrieve(&self, domain: &str, id: Option<&str>) -> Result<DnsRecordsResponse> {
        self.client.send(&retrieve_path(domain, id), Map::new()).await
    }

    pub async fn retrieve_by_name_type(
        &self,
        domain: &str,
        record_type: DnsRecordType,
        subdomain: &str,
    ) -> Result<DnsRecordsResponse> {
        self.client
            .send(
                &format!("/dns/retrieveByNameType/{}/{}/{}", domain, record_type, subdomain),
                Map::new(),
            )
            .await
    }
}

fn retrieve_path(domain: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/dns/retrieve/{}/{}", domain, id),
        None => format!("/dns/retrieve/{}", domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;

    #[test]
    fn retrieve_path_appends_optional_id() {
        assert_eq!(retrieve_path("example.com", None), "/dns/retrieve/example.com");
        assert_eq!(
            retrieve_path("example.com", Some("rec1")),
            "/dns/retrieve/example.com/rec1"
        );
    }

    #[tokio::test]
    async fn low_ttl_fails_before_any_request() {
        // Nothing listens here; a request would surface as an API error instead.
        let config = ClientConfig::new("pk1", "sk1").with_base_url("http://127.0.0.1:9");
        let dns = DnsApi::new(PorkbunClient::new(config));

        let options = DnsCreateOptions {
            record_type: DnsRecordType::A,
            content: "192.0.2.1".to_string(),
            ttl: Some(300),
            ..Default::default()
        };

        let err = dns.create("example.com", &options).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");

        let edit = DnsEditOptions {
            ttl: Some(599),
            ..Default::default()
        };
        let err = dns.edit("example.com", "rec1", &edit).await.unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
