//! User-facing wording for validation failures.

use crate::models::label_for;
use crate::wizard::schema::{ListingProfile, Requirement};
use crate::wizard::stage::Stage;
use crate::wizard::validator::Violation;
use serde::Serialize;
use std::fmt;

/// Advisory shown when leaving the Photos stage with no photos
pub const NO_PHOTOS_NOTICE: &str =
    "No photos added. Listings with photos get far more enquiries; you can add them later from your dashboard.";

/// Title and explanation of why the user cannot move on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub stage: Stage,
    pub title: &'static str,
    pub detail: String,
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.detail)
    }
}

pub fn describe(violation: &Violation) -> ValidationMessage {
    let (title, detail) = match violation.stage {
        Stage::BasicInfo => basic_info(&violation.requirement),
        Stage::Details => details(violation.profile, &violation.requirement),
        Stage::Photos => ("Missing Information", "Please review your photos.".to_string()),
        Stage::Review => review(&violation.requirement),
    };
    ValidationMessage {
        stage: violation.stage,
        title,
        detail,
    }
}

fn basic_info(requirement: &Requirement) -> (&'static str, String) {
    match *requirement {
        Requirement::Tag("propertyType") => (
            "Missing Information",
            "Please select what kind of property you are listing.".into(),
        ),
        Requirement::Tag("transactionType") => (
            "Missing Information",
            "Please choose whether the property is for sale, rent or lease.".into(),
        ),
        Requirement::Tag("newProjectCategory") => (
            "Project Category Required",
            "Please choose whether the project offers apartments, row houses, villas or plots.".into(),
        ),
        Requirement::Present("projectId") => (
            "Project Required",
            "Please select the project this listing belongs to.".into(),
        ),
        Requirement::Present("locality") => (
            "Locality Required",
            "New projects need a locality so buyers can find them.".into(),
        ),
        Requirement::MapPin => (
            "Location Required",
            "Please drop a pin on the map to mark the project location.".into(),
        ),
        Requirement::Answered("isResale") => (
            "Missing Information",
            "Please tell buyers whether this is a new property or a resale.".into(),
        ),
        Requirement::AvailableFrom => (
            "Availability Required",
            "Please choose 'Immediately' or pick the date (YYYY-MM-DD) the property becomes available.".into(),
        ),
        ref other => generic("Missing Information", None, other),
    }
}

fn details(profile: Option<ListingProfile>, requirement: &Requirement) -> (&'static str, String) {
    let Some(profile) = profile else {
        return (
            "Missing Information",
            "Please go back and select a property type first.".into(),
        );
    };

    match (profile, *requirement) {
        (ListingProfile::Apartment, Requirement::Positive("totalFlats")) => (
            "Invalid Building Details",
            "Please enter how many flats the building has (at least 1).".into(),
        ),
        (ListingProfile::Apartment, Requirement::Positive("flatsOnFloor")) => (
            "Invalid Building Details",
            "Please enter how many flats share this floor (at least 1).".into(),
        ),
        (ListingProfile::Penthouse, Requirement::Present("terraceArea")) => (
            "Terrace Details Required",
            "Penthouse listings need the terrace area.".into(),
        ),
        (ListingProfile::Villa, Requirement::Positive("totalVillas")) => (
            "Invalid Community Details",
            "Please enter how many villas are in the community (at least 1).".into(),
        ),
        (ListingProfile::IndependentHouse, Requirement::Positive("totalFloors")) => (
            "Missing House Details",
            "Please enter how many floors the house has (at least 1).".into(),
        ),
        (
            ListingProfile::Land | ListingProfile::JointVenture,
            Requirement::Positive(key @ ("plotLength" | "plotBreadth")),
        ) => (
            "Invalid Plot Dimensions",
            format!("Please enter the {} of the plot as a whole number greater than 0.", side(key)),
        ),
        (ListingProfile::Commercial, Requirement::Present("commercialType")) => (
            "Missing Information",
            "Please choose the kind of commercial space (office, shop, showroom, warehouse...).".into(),
        ),
        (ListingProfile::Farmhouse, Requirement::Present("landArea")) => (
            "Missing Farmhouse Details",
            "Please enter the total land area of the farmhouse.".into(),
        ),
        (ListingProfile::PgCoLiving, Requirement::AnyOf(_)) => (
            "PG Details Incomplete",
            "Please select at least one facility, house rule or service offered by the PG.".into(),
        ),
        (ListingProfile::PgCoLiving, Requirement::Positive("pgTotalBeds")) => (
            "PG Details Incomplete",
            "Please enter the number of beds available (at least 1).".into(),
        ),
        (ListingProfile::NewProject(None), _) => (
            "Project Category Required",
            "Please go back and choose the project category.".into(),
        ),
        (ListingProfile::NewProject(Some(_)), Requirement::FloorPlan) => (
            "Floor Plan Required",
            "Please add at least one floor plan with its configuration, area and price.".into(),
        ),
        (ListingProfile::NewProject(Some(_)), Requirement::PlotDimension) => (
            "Plot Dimensions Required",
            "Please add at least one plot size with its length, breadth and price.".into(),
        ),
        (profile, ref other) => generic("Missing Information", Some(profile), other),
    }
}

fn review(requirement: &Requirement) -> (&'static str, String) {
    match *requirement {
        Requirement::Present(key) => (
            "Contact Details Required",
            format!("Please enter the {} buyers should use.", label_for(key)),
        ),
        Requirement::Email(_) => (
            "Invalid Email",
            "Please enter a valid email address, like name@example.com.".into(),
        ),
        Requirement::Mobile(_) => (
            "Invalid Phone Number",
            "Please enter a valid 10-digit mobile number starting with 6, 7, 8 or 9.".into(),
        ),
        Requirement::Checked("agreedToTerms") => (
            "Terms Not Accepted",
            "Please accept the terms and conditions to publish your listing.".into(),
        ),
        Requirement::Checked(_) => (
            "Confirmation Required",
            "Please confirm that the information you provided is accurate.".into(),
        ),
        ref other => generic("Missing Information", None, other),
    }
}

fn side(key: &str) -> &'static str {
    if key == "plotBreadth" {
        "breadth"
    } else {
        "length"
    }
}

/// Fallback wording built from the field label and, at the Details stage,
/// the kind of listing.
fn generic(
    title: &'static str,
    profile: Option<ListingProfile>,
    requirement: &Requirement,
) -> (&'static str, String) {
    let subject = match profile {
        Some(p) => format!("{} listings", capitalize(p.noun())),
        None => "Listings".to_string(),
    };
    let detail = match *requirement {
        Requirement::Present(key) => format!("{subject} need the {}.", label_for(key)),
        Requirement::Tag(key) => format!("Please choose one of the listed options for {}.", label_for(key)),
        Requirement::Positive(key) => {
            format!("{subject} need the {} as a whole number greater than 0.", label_for(key))
        }
        Requirement::NonNegative(key) => {
            format!("{subject} need the {} (enter 0 if there are none).", label_for(key))
        }
        Requirement::Answered(key) => {
            format!("{subject} need an answer for {}.", label_for(key))
        }
        Requirement::AnyOf(keys) => format!(
            "{subject} need at least one of: {}.",
            keys.iter().map(|k| label_for(k)).collect::<Vec<_>>().join(", ")
        ),
        Requirement::Email(key) | Requirement::Mobile(key) | Requirement::Checked(key) => {
            format!("Please check the {}.", label_for(key))
        }
        Requirement::AvailableFrom => "Please set when the property becomes available.".into(),
        Requirement::MapPin => "Please mark the location on the map.".into(),
        Requirement::FloorPlan => format!("{subject} need at least one complete floor plan."),
        Requirement::PlotDimension => format!("{subject} need at least one complete plot dimension."),
    };
    (title, detail)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
