use crate::models::{field_spec, DraftRecord, FieldKind, FloorPlanEntry, PlotDimensionEntry};
use crate::parse::parse_int;
use crate::validation::{is_valid_email, is_valid_indian_mobile};
use crate::wizard::schema::{self, ListingProfile, Requirement, AVAILABLE_IMMEDIATELY, DATE_LENGTH};
use crate::wizard::stage::Stage;

/// An unmet condition, with the context needed to word the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub stage: Stage,
    /// Set for Details-stage violations once the property type is known
    pub profile: Option<ListingProfile>,
    pub requirement: Requirement,
}

/// True when every condition of `stage` holds for `draft`
pub fn can_advance(stage: Stage, draft: &DraftRecord) -> bool {
    check_stage(stage, draft).is_ok()
}

/// First unmet condition of `stage`, in declared order
pub fn check_stage(stage: Stage, draft: &DraftRecord) -> Result<(), Violation> {
    match violations(stage, draft).into_iter().next() {
        Some(v) => Err(v),
        None => Ok(()),
    }
}

/// Every unmet condition of `stage`
pub fn violations(stage: Stage, draft: &DraftRecord) -> Vec<Violation> {
    let property_type = draft.property_type();
    let category = draft.new_project_category();
    let profile = match stage {
        Stage::Details => property_type.map(|pt| ListingProfile::resolve(pt, category)),
        _ => None,
    };

    schema::requirements(stage, property_type, draft.transaction_type(), category)
        .into_iter()
        .filter(|req| !is_met(req, draft))
        .map(|requirement| Violation {
            stage,
            profile,
            requirement,
        })
        .collect()
}

pub fn is_met(requirement: &Requirement, draft: &DraftRecord) -> bool {
    match *requirement {
        Requirement::Present(key) => draft.get(key).map(|v| !v.is_blank()).unwrap_or(false),
        Requirement::Tag(key) => known_tag(key, draft),
        Requirement::Positive(key) => positive(draft.text(key)),
        Requirement::NonNegative(key) => parse_int(draft.text(key)).map(|n| n >= 0).unwrap_or(false),
        Requirement::Answered(key) => answered(key, draft.text(key)),
        Requirement::AvailableFrom => available_from(draft.text("availableFrom")),
        Requirement::MapPin => {
            !draft.text("latitude").trim().is_empty() && !draft.text("longitude").trim().is_empty()
        }
        Requirement::AnyOf(keys) => keys.iter().any(|key| !draft.list(key).is_empty()),
        Requirement::FloorPlan => draft.floor_plans.first_filled().map(complete_floor_plan).unwrap_or(false),
        Requirement::PlotDimension => draft
            .plot_dimensions
            .first_filled()
            .map(complete_plot_dimension)
            .unwrap_or(false),
        Requirement::Email(key) => is_valid_email(draft.text(key)),
        Requirement::Mobile(key) => is_valid_indian_mobile(draft.text(key)),
        Requirement::Checked(key) => draft.flag(key),
    }
}

/// Tag fields only pass with a value from their closed set
fn known_tag(key: &str, draft: &DraftRecord) -> bool {
    match key {
        "propertyType" => draft.property_type().is_some(),
        "transactionType" => draft.transaction_type().is_some(),
        "newProjectCategory" => draft.new_project_category().is_some(),
        _ => draft.get(key).map(|v| !v.is_blank()).unwrap_or(false),
    }
}

fn positive(text: &str) -> bool {
    parse_int(text).map(|n| n > 0).unwrap_or(false)
}

/// Tri-state questions count as answered once either option is picked
fn answered(key: &str, text: &str) -> bool {
    match field_spec(key).map(|f| f.kind) {
        Some(FieldKind::Resale) => matches!(text, "new" | "resale"),
        _ => matches!(text, "yes" | "no"),
    }
}

/// `"immediate"`, or anything exactly as long as `YYYY-MM-DD`
fn available_from(text: &str) -> bool {
    text == AVAILABLE_IMMEDIATELY || text.chars().count() == DATE_LENGTH
}

fn complete_floor_plan(entry: &FloorPlanEntry) -> bool {
    !entry.configuration.trim().is_empty() && positive(&entry.area) && positive(&entry.price)
}

fn complete_plot_dimension(entry: &PlotDimensionEntry) -> bool {
    positive(&entry.length) && positive(&entry.breadth) && positive(&entry.price)
}
