use crate::api::PropertyService;
use crate::error::WizardError;
use crate::models::{DraftRecord, PropertyRecord};
use crate::wizard::messages::{self, ValidationMessage, NO_PHOTOS_NOTICE};
use crate::wizard::normalize::normalize;
use crate::wizard::stage::Stage;
use crate::wizard::validator::{self, Violation};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Result of pressing "Next"
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    Advanced {
        stage: Stage,
        /// Non-blocking advice, e.g. leaving Photos with no photos
        notice: Option<&'static str>,
    },
    Rejected(ValidationMessage),
}

/// What a successful submission produced
#[derive(Debug, Clone)]
pub struct SubmitReport {
    pub property: PropertyRecord,
    /// Set when the listing was saved but its photos were not attached
    pub photo_warning: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Walks one listing through the four stages and submits it
pub struct Wizard<S: PropertyService> {
    service: S,
    draft: DraftRecord,
    stage: Stage,
    property_id: Option<String>,
    closed: bool,
}

impl<S: PropertyService> Wizard<S> {
    /// Open a wizard over an existing draft without touching the network
    pub fn with_draft(service: S, draft: DraftRecord, property_id: Option<String>) -> Self {
        Self {
            service,
            draft,
            stage: Stage::BasicInfo,
            property_id,
            closed: false,
        }
    }

    /// Start a new listing, provided the seller's plan allows one
    pub async fn start_create(service: S) -> Result<Self, WizardError> {
        let quota = service.can_create_listing().await.map_err(WizardError::Quota)?;
        if !quota.can_create {
            let reason = quota
                .message
                .unwrap_or_else(|| "upgrade your subscription to add another listing".to_string());
            info!("Listing quota exhausted: {}", reason);
            return Err(WizardError::UpgradeRequired(reason));
        }
        debug!("Starting new listing via {}", service.service_name());
        Ok(Self::with_draft(service, DraftRecord::new(), None))
    }

    /// Load a persisted property for editing
    pub async fn start_edit(service: S, id: &str) -> Result<Self, WizardError> {
        let record = service
            .fetch_property(id)
            .await
            .map_err(|source| WizardError::Fetch {
                id: id.to_string(),
                source,
            })?;
        let draft = DraftRecord::from_record(&record);
        let property_id = record.id.clone().or_else(|| Some(id.to_string()));
        info!("Loaded property {} for editing", id);
        Ok(Self::with_draft(service, draft, property_id))
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    /// Field edits go straight to the draft; validation runs on the next step change
    pub fn draft_mut(&mut self) -> &mut DraftRecord {
        &mut self.draft
    }

    pub fn property_id(&self) -> Option<&str> {
        self.property_id.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the current stage would let the user move on
    pub fn can_advance(&self) -> bool {
        validator::can_advance(self.stage, &self.draft)
    }

    /// Every unmet condition of a stage, worded for the user
    pub fn checklist(&self, stage: Stage) -> Vec<ValidationMessage> {
        validator::violations(stage, &self.draft)
            .iter()
            .map(messages::describe)
            .collect()
    }

    pub fn next(&mut self) -> Result<NextOutcome, WizardError> {
        self.ensure_open()?;

        if let Err(violation) = validator::check_stage(self.stage, &self.draft) {
            return Ok(NextOutcome::Rejected(self.reject(&violation)));
        }

        let notice = if self.stage == Stage::Photos && self.draft.photos.is_empty() {
            Some(NO_PHOTOS_NOTICE)
        } else {
            None
        };

        self.move_to(self.stage.next());
        Ok(NextOutcome::Advanced {
            stage: self.stage,
            notice,
        })
    }

    /// Go back one stage. Never validated.
    pub fn back(&mut self) -> Result<Stage, WizardError> {
        self.ensure_open()?;
        self.move_to(self.stage.previous());
        Ok(self.stage)
    }

    /// Validate the review stage, then create or update the property and attach
    /// its photos. On failure the draft is left untouched for another attempt.
    pub async fn submit(&mut self) -> Result<SubmitReport, WizardError> {
        self.ensure_open()?;
        if self.stage != Stage::Review {
            return Err(WizardError::NotOnReview);
        }
        if let Err(violation) = validator::check_stage(Stage::Review, &self.draft) {
            return Err(WizardError::Validation(self.reject(&violation)));
        }

        let payload = normalize(&self.draft);

        let property = match &self.property_id {
            Some(id) => {
                info!("Updating property {} ({} attributes)", id, payload.len());
                self.service
                    .update_property(id, &payload)
                    .await
                    .map_err(|source| WizardError::Update {
                        id: id.clone(),
                        source,
                    })?
            }
            None => {
                info!("Creating property ({} attributes)", payload.len());
                self.service
                    .create_property(&payload)
                    .await
                    .map_err(WizardError::Create)?
            }
        };

        let photo_warning = self.attach_photos(&property).await;

        info!(
            "Submitted property {}",
            property.id.as_deref().unwrap_or("<unassigned>")
        );
        self.closed = true;
        self.draft = DraftRecord::new();

        Ok(SubmitReport {
            property,
            photo_warning,
            submitted_at: Utc::now(),
        })
    }

    /// Attach photos after the property is saved. A failure here only warns;
    /// the saved property stays.
    async fn attach_photos(&self, property: &PropertyRecord) -> Option<String> {
        if self.draft.photos.is_empty() {
            return None;
        }
        let Some(id) = property.id.as_deref().or(self.property_id.as_deref()) else {
            warn!("Saved property has no id; photos were not attached");
            return Some("Your listing was saved, but its photos could not be attached. Please add them again from your dashboard.".to_string());
        };

        let urls = self.draft.photos.urls_primary_first();
        match self.service.attach_photos(id, &urls).await {
            Ok(()) => {
                debug!("Attached {} photos to {}", urls.len(), id);
                None
            }
            Err(e) => {
                warn!("Photo attachment failed for {}: {}", id, e);
                Some(format!(
                    "Your listing was saved, but its {} photo(s) could not be attached ({e}). Please add them again from your dashboard.",
                    urls.len()
                ))
            }
        }
    }

    fn reject(&self, violation: &Violation) -> ValidationMessage {
        let message = messages::describe(violation);
        debug!("{} blocked: {}", self.stage, message);
        message
    }

    fn move_to(&mut self, stage: Stage) {
        if stage != self.stage {
            debug!("Moving from {} to {}", self.stage, stage);
        }
        self.stage = stage;
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.closed {
            Err(WizardError::Closed)
        } else {
            Ok(())
        }
    }
}
