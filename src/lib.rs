//! Property listing wizard: a four-step form state machine that validates a
//! loosely typed draft per property type and submits a typed payload to the
//! listing API.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parse;
pub mod validation;
pub mod wizard;

pub use api::{HttpPropertyService, PropertyService};
pub use config::ApiConfig;
pub use error::{ConfigError, ServiceError, WizardError};
pub use models::{DraftRecord, FieldValue, Payload, PayloadValue, PropertyRecord};
pub use wizard::{NextOutcome, Stage, SubmitReport, Wizard};
