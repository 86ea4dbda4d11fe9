#![allow(dead_code)]

use async_trait::async_trait;
use listing_wizard::api::{ListingQuota, PropertyService};
use listing_wizard::{DraftRecord, Payload, PropertyRecord, ServiceError};
use serde_json::Map;
use std::sync::{Arc, Mutex};

/// Calls the fake received, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(serde_json::Value),
    Update(String, serde_json::Value),
    Fetch(String),
    AttachPhotos(String, Vec<String>),
    Quota,
}

/// In-memory listing API with switchable failures
#[derive(Clone, Default)]
pub struct FakeService {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub fail_save: Arc<Mutex<bool>>,
    pub fail_photos: bool,
    pub quota_exhausted: bool,
    pub stored: Option<PropertyRecord>,
}

impl FakeService {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_fail_save(&self, fail: bool) {
        *self.fail_save.lock().unwrap() = fail;
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn saved(id: &str) -> PropertyRecord {
        PropertyRecord {
            id: Some(id.to_string()),
            slug: Some(format!("listing-{id}")),
            fields: Map::new(),
        }
    }

    fn unavailable() -> ServiceError {
        ServiceError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        }
    }
}

#[async_trait]
impl PropertyService for FakeService {
    async fn create_property(&self, payload: &Payload) -> Result<PropertyRecord, ServiceError> {
        self.record(Call::Create(serde_json::to_value(payload).unwrap()));
        if *self.fail_save.lock().unwrap() {
            return Err(Self::unavailable());
        }
        Ok(Self::saved("new-1"))
    }

    async fn update_property(&self, id: &str, payload: &Payload) -> Result<PropertyRecord, ServiceError> {
        self.record(Call::Update(id.to_string(), serde_json::to_value(payload).unwrap()));
        if *self.fail_save.lock().unwrap() {
            return Err(Self::unavailable());
        }
        Ok(Self::saved(id))
    }

    async fn fetch_property(&self, id: &str) -> Result<PropertyRecord, ServiceError> {
        self.record(Call::Fetch(id.to_string()));
        self.stored.clone().ok_or(ServiceError::Status {
            status: 404,
            body: "not found".to_string(),
        })
    }

    async fn attach_photos(&self, id: &str, urls: &[String]) -> Result<(), ServiceError> {
        self.record(Call::AttachPhotos(id.to_string(), urls.to_vec()));
        if self.fail_photos {
            return Err(Self::unavailable());
        }
        Ok(())
    }

    async fn can_create_listing(&self) -> Result<ListingQuota, ServiceError> {
        self.record(Call::Quota);
        Ok(ListingQuota {
            can_create: !self.quota_exhausted,
            message: self
                .quota_exhausted
                .then(|| "Your free plan includes 1 active listing".to_string()),
        })
    }

    fn service_name(&self) -> &'static str {
        "fake"
    }
}

pub fn fill(draft: &mut DraftRecord, values: &[(&str, &str)]) {
    for (key, value) in values {
        draft.set(*key, *value);
    }
}

/// Stage-1 fields every listing needs
pub fn basic_info(property_type: &str, transaction_type: &str) -> DraftRecord {
    let mut draft = DraftRecord::new();
    fill(
        &mut draft,
        &[
            ("propertyType", property_type),
            ("transactionType", transaction_type),
            ("title", "Spacious home near the lake"),
            ("price", "8500000"),
            ("area", "1000"),
            ("address", "42 Lake View Road"),
            ("city", "Hyderabad"),
            ("state", "Telangana"),
        ],
    );
    match transaction_type {
        "sale" => draft.set("isResale", "resale"),
        _ => draft.set("availableFrom", "immediate"),
    }
    draft
}

pub fn contact(draft: &mut DraftRecord) {
    fill(
        draft,
        &[
            ("contactName", "Anita Rao"),
            ("contactPhone", "98480 12345"),
            ("contactEmail", "Anita.Rao@Example.com"),
        ],
    );
    draft.set("agreedToTerms", true);
    draft.set("verifiedInfo", true);
}

/// A sale apartment that passes every stage
pub fn complete_apartment() -> DraftRecord {
    let mut draft = basic_info("apartment", "sale");
    fill(
        &mut draft,
        &[
            ("bedrooms", "2"),
            ("bathrooms", "2"),
            ("floorNumber", "3"),
            ("totalFloors", "12"),
            ("totalFlats", "96"),
            ("flatsOnFloor", "8"),
            ("numberOfLifts", "2"),
            ("carParkingCount", "1"),
            ("furnishing", "semi_furnished"),
            ("carpetArea", "850"),
        ],
    );
    contact(&mut draft);
    draft
}
