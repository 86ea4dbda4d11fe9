pub mod controller;
pub mod messages;
pub mod normalize;
pub mod schema;
pub mod stage;
pub mod validator;

pub use controller::{NextOutcome, SubmitReport, Wizard};
pub use messages::{describe, ValidationMessage, NO_PHOTOS_NOTICE};
pub use normalize::normalize;
pub use schema::{required_fields, requirements, ListingProfile, Requirement};
pub use stage::Stage;
pub use validator::{can_advance, check_stage, violations, Violation};
