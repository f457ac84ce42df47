use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use cat_wallet_core::{
    CollectionSummary, FeeSummary, PageRequest, PortError, TokenBalancePage, WalletServicePort,
};

use crate::WalletServiceConfig;

/// Wallet service backed by a JSON HTTP API.
#[derive(Debug, Clone)]
pub struct HttpWalletService {
    base_url: reqwest::Url,
    client: reqwest::blocking::Client,
}

/// Every response is wrapped as `{ code, msg, data }`; `code == 0` is success.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: i64,
    #[serde(default)]
    msg: String,
    data: Option<T>,
}

impl HttpWalletService {
    pub fn with_config(config: &WalletServiceConfig) -> Result<Self, PortError> {
        let base_url = reqwest::Url::parse(&config.service_base_url).map_err(|e| {
            PortError::Transport(format!(
                "invalid service url {}: {e}",
                config.service_base_url
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PortError::Transport(format!(
                "service url cannot be a base: {}",
                config.service_base_url
            )));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| PortError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, PortError> {
        let url = self.endpoint(segments);
        debug!(%url, "wallet service request");
        let response = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .map_err(|e| PortError::Transport(format!("request to {url} failed: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| PortError::Transport(format!("reading response from {url} failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Transport(format!("{url} returned status {status}")));
        }
        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| PortError::Decode(format!("unexpected response from {url}: {e}")))?;
        if envelope.code != 0 {
            return Err(PortError::Service {
                code: envelope.code,
                message: envelope.msg,
            });
        }
        envelope
            .data
            .ok_or_else(|| PortError::Decode(format!("response from {url} has no data")))
    }
}

impl WalletServicePort for HttpWalletService {
    fn fee_summary(&self) -> Result<FeeSummary, PortError> {
        self.get(&["v5", "default", "fee-summary"], &[])
    }

    fn address_cat721_collection_summary(
        &self,
        address: &str,
        collection_id: &str,
    ) -> Result<CollectionSummary, PortError> {
        self.get(
            &["v5", "cat721", "collection", collection_id, "address", address, "summary"],
            &[],
        )
    }

    fn cat20_list(
        &self,
        address: &str,
        page: u32,
        page_size: u32,
    ) -> Result<TokenBalancePage, PortError> {
        let request = PageRequest::new(page, page_size);
        self.get(
            &["v5", "cat20", "address", address, "tokens"],
            &[
                ("cursor", request.cursor().to_string()),
                ("size", request.page_size.to_string()),
            ],
        )
    }
}
