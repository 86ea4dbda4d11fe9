use crate::api::types::ListingQuota;
use crate::error::ServiceError;
use crate::models::{Payload, PropertyRecord};
use async_trait::async_trait;

/// The property API the wizard reads from and submits to.
/// The HTTP client implements it; tests swap in an in-memory fake.
#[async_trait]
pub trait PropertyService: Send + Sync {
    async fn create_property(&self, payload: &Payload) -> Result<PropertyRecord, ServiceError>;

    async fn update_property(&self, id: &str, payload: &Payload) -> Result<PropertyRecord, ServiceError>;

    async fn fetch_property(&self, id: &str) -> Result<PropertyRecord, ServiceError>;

    /// Attach already-uploaded photos, primary first
    async fn attach_photos(&self, id: &str, urls: &[String]) -> Result<(), ServiceError>;

    /// Whether the seller's plan allows another listing
    async fn can_create_listing(&self) -> Result<ListingQuota, ServiceError>;

    /// Get the name of the backing service, for logs
    fn service_name(&self) -> &'static str;
}
