use crate::api::traits::PropertyService;
use crate::api::types::{ListingQuota, PhotoAttachRequest};
use crate::config::ApiConfig;
use crate::error::ServiceError;
use crate::models::{Payload, PropertyRecord};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Listing API over HTTP/JSON
pub struct HttpPropertyService {
    client: Client,
    config: ApiConfig,
    base_url: Url,
}

impl HttpPropertyService {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid listing API URL {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("Listing API URL {} cannot carry a path", config.base_url);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Append path segments to the base URL. Each segment is percent-encoded,
    /// so ids containing `/` or `?` stay inside their segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, ServiceError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Listing API returned status: {}", status);
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Received {} bytes", body.len());
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ServiceError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PropertyService for HttpPropertyService {
    async fn create_property(&self, payload: &Payload) -> Result<PropertyRecord, ServiceError> {
        let url = self.url(&["properties"]);
        debug!("POST {} ({} attributes)", url, payload.len());
        self.send_json(self.client.post(url).json(payload)).await
    }

    async fn update_property(&self, id: &str, payload: &Payload) -> Result<PropertyRecord, ServiceError> {
        let url = self.url(&["properties", id]);
        debug!("PATCH {} ({} attributes)", url, payload.len());
        self.send_json(self.client.patch(url).json(payload)).await
    }

    async fn fetch_property(&self, id: &str) -> Result<PropertyRecord, ServiceError> {
        let url = self.url(&["properties", id]);
        debug!("GET {}", url);
        self.send_json(self.client.get(url)).await
    }

    async fn attach_photos(&self, id: &str, urls: &[String]) -> Result<(), ServiceError> {
        let url = self.url(&["properties", id, "photos"]);
        debug!("POST {} ({} photos)", url, urls.len());
        self.send(self.client.post(url).json(&PhotoAttachRequest { photos: urls }))
            .await
            .map(|_| ())
    }

    async fn can_create_listing(&self) -> Result<ListingQuota, ServiceError> {
        let url = self.url(&["subscriptions", "can-create-listing"]);
        debug!("GET {}", url);
        self.send_json(self.client.get(url)).await
    }

    fn service_name(&self) -> &'static str {
        "Listing API"
    }
}
