use crate::wizard::messages::ValidationMessage;

/// Failure talking to the listing API
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Why the wizard refused an action
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("{0}")]
    Validation(ValidationMessage),

    #[error("Your plan does not allow more listings: {0}")]
    UpgradeRequired(String),

    #[error("Could not check your listing quota: {0}")]
    Quota(#[source] ServiceError),

    #[error("Could not load property {id}: {source}")]
    Fetch {
        id: String,
        #[source]
        source: ServiceError,
    },

    #[error("Could not create the listing: {0}")]
    Create(#[source] ServiceError),

    #[error("Could not save changes to property {id}: {source}")]
    Update {
        id: String,
        #[source]
        source: ServiceError,
    },

    #[error("Submitting is only possible from the review step")]
    NotOnReview,

    #[error("This listing has already been submitted")]
    Closed,
}

/// Problem reading settings from the environment
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}
