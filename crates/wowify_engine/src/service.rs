use std::collections::BTreeMap;
use std::time::Duration;

use crate::{FailureKind, PollStatus, WowError, WowifiedPayload};

/// Connection settings for the wowify service.
///
/// Both timeouts default to `None`: a hung request stalls the workflow in
/// its current state, matching the service's documented behavior.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "https://backend.wowemoji.dev".to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The remote wowify service, seen from the client.
#[async_trait::async_trait]
pub trait WowService: Send + Sync {
    /// Fetches the background thumbnail catalog. A 404 means no catalog
    /// exists yet and yields an empty map.
    async fn fetch_catalog(&self) -> Result<BTreeMap<String, String>, WowError>;

    /// Submits raw image bytes for wowification; one attempt, no retry.
    /// Returns the job token on success.
    async fn submit(&self, bytes: Vec<u8>, background_id: &str) -> Result<String, WowError>;

    /// Queries the status of a submitted job by token.
    async fn poll(&self, token: &str) -> Result<PollStatus, WowError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestWowService {
    settings: ServiceSettings,
    client: reqwest::Client,
}

impl ReqwestWowService {
    pub fn new(settings: ServiceSettings) -> Result<Self, WowError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| WowError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl WowService for ReqwestWowService {
    async fn fetch_catalog(&self) -> Result<BTreeMap<String, String>, WowError> {
        let response = self
            .client
            .get(&self.settings.base_url)
            .query(&[("thumbnails", "true")])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            // No catalog published yet.
            return Ok(BTreeMap::new());
        }
        if !status.is_success() {
            return Err(WowError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| WowError::new(FailureKind::MalformedResponse, err.to_string()))?;
        let mut catalog = BTreeMap::new();
        if let Some(thumbnails) = body.get("thumbnails").and_then(|v| v.as_object()) {
            for (id, thumbnail) in thumbnails {
                if let Some(encoded) = thumbnail.as_str() {
                    catalog.insert(id.clone(), encoded.to_string());
                }
            }
        }
        Ok(catalog)
    }

    async fn submit(&self, bytes: Vec<u8>, background_id: &str) -> Result<String, WowError> {
        let response = self
            .client
            .put(&self.settings.base_url)
            .query(&[("backgroundId", background_id)])
            .body(bytes)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WowError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| WowError::new(FailureKind::MalformedResponse, err.to_string()))?;
        body.get("token")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| WowError::new(FailureKind::MalformedResponse, "missing token field"))
    }

    async fn poll(&self, token: &str) -> Result<PollStatus, WowError> {
        let response = self
            .client
            .get(&self.settings.base_url)
            .query(&[("wowToken", token)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(PollStatus::Pending);
        }
        if !status.is_success() {
            return Err(WowError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| WowError::new(FailureKind::MalformedResponse, err.to_string()))?;
        let full_encoded = body
            .get("wowifiedOriginal")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                WowError::new(FailureKind::MalformedResponse, "missing wowifiedOriginal")
            })?;
        let small_encoded = body
            .get("wowifiedSmall")
            .and_then(|v| v.as_str())
            .ok_or_else(|| WowError::new(FailureKind::MalformedResponse, "missing wowifiedSmall"))?;

        Ok(PollStatus::Ready(WowifiedPayload {
            full_encoded: full_encoded.to_string(),
            small_encoded: small_encoded.to_string(),
        }))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> WowError {
    if err.is_timeout() {
        return WowError::new(FailureKind::Timeout, err.to_string());
    }
    WowError::new(FailureKind::Network, err.to_string())
}
