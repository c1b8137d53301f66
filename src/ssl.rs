use serde_json::Map;

use crate::client::PorkbunClient;
use crate::error::Result;
use crate::types::SslBundleResponse;

#[derive(Clone, Debug)]
pub struct SslApi {
    client: PorkbunClient,
}

impl SslApi {
    pub fn new(client: PorkbunClient) -> Self {
        SslApi { client }
    }

    /// Fetches the free certificate bundle Porkbun issues for `domain`.
    pub async fn retrieve(&self, domain: &str) -> Result<SslBundleResponse> {
        self.client
            .send(&format!("/ssl/retrieve/{}", domain), Map::new())
            .await
    }
}
