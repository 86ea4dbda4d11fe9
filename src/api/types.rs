use serde::{Deserialize, Serialize};

/// Answer of the subscription check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuota {
    pub can_create: bool,
    /// Why not, when the plan is exhausted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of the photo attachment call
#[derive(Debug, Clone, Serialize)]
pub struct PhotoAttachRequest<'a> {
    pub photos: &'a [String],
}
