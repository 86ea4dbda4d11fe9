pub mod client;
pub mod traits;
pub mod types;

pub use client::HttpPropertyService;
pub use traits::PropertyService;
pub use types::{ListingQuota, PhotoAttachRequest};
