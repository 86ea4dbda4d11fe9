//! Which fields each stage asks for, per property and transaction type.

use crate::models::fields::{FLOOR_PLANS, PLOT_DIMENSIONS};
use crate::models::{NewProjectCategory, PropertyType, TransactionType};
use crate::wizard::stage::Stage;
use std::collections::BTreeSet;

/// Literal accepted by `availableFrom` in place of a date
pub const AVAILABLE_IMMEDIATELY: &str = "immediate";

/// Length of a `YYYY-MM-DD` date
pub const DATE_LENGTH: usize = 10;

/// One condition a stage places on the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Non-blank text, a non-empty list or a ticked box
    Present(&'static str),
    /// One of the known tags for `propertyType`, `transactionType` or
    /// `newProjectCategory`
    Tag(&'static str),
    /// Leading base-10 integer greater than zero
    Positive(&'static str),
    /// Leading base-10 integer of zero or more
    NonNegative(&'static str),
    /// A tri-state question with an answer picked
    Answered(&'static str),
    /// `"immediate"` or a ten-character date
    AvailableFrom,
    /// Both latitude and longitude set
    MapPin,
    /// At least one of the multi-selects is non-empty
    AnyOf(&'static [&'static str]),
    /// A floor plan with configuration, area and price
    FloorPlan,
    /// A plot dimension with length, breadth and price
    PlotDimension,
    Email(&'static str),
    Mobile(&'static str),
    /// A consent checkbox that must be ticked
    Checked(&'static str),
}

impl Requirement {
    /// Draft keys the requirement reads
    pub fn keys(&self) -> Vec<&'static str> {
        match *self {
            Requirement::Present(key)
            | Requirement::Tag(key)
            | Requirement::Positive(key)
            | Requirement::NonNegative(key)
            | Requirement::Answered(key)
            | Requirement::Email(key)
            | Requirement::Mobile(key)
            | Requirement::Checked(key) => vec![key],
            Requirement::AvailableFrom => vec!["availableFrom"],
            Requirement::MapPin => vec!["latitude", "longitude"],
            Requirement::AnyOf(keys) => keys.to_vec(),
            Requirement::FloorPlan => vec![FLOOR_PLANS],
            Requirement::PlotDimension => vec![PLOT_DIMENSIONS],
        }
    }
}

/// Stage-2 rule set selected by the property type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingProfile {
    Apartment,
    Penthouse,
    Villa,
    IndependentHouse,
    Land,
    /// Same rule set as `Land`, worded for joint ventures
    JointVenture,
    Commercial,
    Farmhouse,
    PgCoLiving,
    /// `None` until the project category has been picked
    NewProject(Option<NewProjectCategory>),
}

pub const PG_SELECTIONS: &[&str] = &["pgFacilities", "pgRules", "pgServices"];

use Requirement::*;

const APARTMENT: &[Requirement] = &[
    Positive("bedrooms"),
    Positive("bathrooms"),
    NonNegative("floorNumber"),
    Positive("totalFloors"),
    Positive("totalFlats"),
    Positive("flatsOnFloor"),
    NonNegative("numberOfLifts"),
    NonNegative("carParkingCount"),
    Present("furnishing"),
    Present("carpetArea"),
];

const PENTHOUSE: &[Requirement] = &[
    Positive("bedrooms"),
    Positive("bathrooms"),
    NonNegative("floorNumber"),
    Positive("totalFloors"),
    Present("terraceArea"),
    Answered("privateTerrace"),
    Present("furnishing"),
];

const VILLA: &[Requirement] = &[
    Positive("totalVillas"),
    Present("villaType"),
    Positive("bedrooms"),
    Positive("bathrooms"),
    Present("plotArea"),
    Present("builtUpArea"),
    NonNegative("carParkingCount"),
    Answered("privateGarden"),
];

const INDEPENDENT_HOUSE: &[Requirement] = &[
    Positive("bedrooms"),
    Positive("bathrooms"),
    Positive("totalFloors"),
    Present("plotArea"),
    Present("builtUpArea"),
    NonNegative("carParkingCount"),
    Present("facing"),
];

const LAND: &[Requirement] = &[
    Positive("plotLength"),
    Positive("plotBreadth"),
    Present("roadWidth"),
    Answered("boundaryWall"),
    Present("landZoning"),
];

const COMMERCIAL: &[Requirement] = &[
    Present("commercialType"),
    Present("builtUpArea"),
    NonNegative("floorNumber"),
    Positive("totalFloors"),
    NonNegative("washrooms"),
    NonNegative("carParkingCount"),
];

const FARMHOUSE: &[Requirement] = &[
    Present("landArea"),
    Positive("bedrooms"),
    Positive("bathrooms"),
    Present("farmhouseWaterSource"),
    Answered("electricityConnection"),
];

const PG_CO_LIVING: &[Requirement] = &[
    Present("pgName"),
    Present("pgGender"),
    Present("pgSharingType"),
    Positive("pgTotalBeds"),
    Answered("pgMealsIncluded"),
    AnyOf(PG_SELECTIONS),
];

const NEW_PROJECT_UNCATEGORIZED: &[Requirement] = &[Tag("newProjectCategory")];

const NEW_PROJECT_APARTMENT: &[Requirement] = &[
    Present("projectStatus"),
    Positive("totalTowers"),
    Positive("totalFloors"),
    Positive("totalFlats"),
    Positive("flatsOnFloor"),
    NonNegative("numberOfLifts"),
    FloorPlan,
];

const NEW_PROJECT_VILLA: &[Requirement] = &[
    Present("projectStatus"),
    Positive("totalVillas"),
    FloorPlan,
];

const NEW_PROJECT_PLOT: &[Requirement] = &[
    Present("projectStatus"),
    Positive("totalPlots"),
    PlotDimension,
];

const CONTACT: &[Requirement] = &[
    Present("contactName"),
    Present("contactPhone"),
    Present("contactEmail"),
    Email("contactEmail"),
    Mobile("contactPhone"),
    Checked("agreedToTerms"),
    Checked("verifiedInfo"),
];

impl ListingProfile {
    pub fn resolve(property_type: PropertyType, category: Option<NewProjectCategory>) -> Self {
        match property_type {
            PropertyType::Apartment => ListingProfile::Apartment,
            PropertyType::Penthouse => ListingProfile::Penthouse,
            PropertyType::Villa => ListingProfile::Villa,
            PropertyType::IndependentHouse => ListingProfile::IndependentHouse,
            PropertyType::Plot => ListingProfile::Land,
            PropertyType::JointVenture => ListingProfile::JointVenture,
            PropertyType::Commercial => ListingProfile::Commercial,
            PropertyType::Farmhouse => ListingProfile::Farmhouse,
            PropertyType::PgCoLiving => ListingProfile::PgCoLiving,
            PropertyType::NewProjects => ListingProfile::NewProject(category),
        }
    }

    /// Conditions of the Details stage, in the order they are checked
    pub fn details(&self) -> &'static [Requirement] {
        match self {
            ListingProfile::Apartment => APARTMENT,
            ListingProfile::Penthouse => PENTHOUSE,
            ListingProfile::Villa => VILLA,
            ListingProfile::IndependentHouse => INDEPENDENT_HOUSE,
            ListingProfile::Land | ListingProfile::JointVenture => LAND,
            ListingProfile::Commercial => COMMERCIAL,
            ListingProfile::Farmhouse => FARMHOUSE,
            ListingProfile::PgCoLiving => PG_CO_LIVING,
            ListingProfile::NewProject(None) => NEW_PROJECT_UNCATEGORIZED,
            ListingProfile::NewProject(Some(category)) => match category {
                NewProjectCategory::Apartment => NEW_PROJECT_APARTMENT,
                NewProjectCategory::Villa | NewProjectCategory::RowHouse => NEW_PROJECT_VILLA,
                NewProjectCategory::Plot => NEW_PROJECT_PLOT,
            },
        }
    }

    /// Noun used in messages, e.g. "apartment"
    pub fn noun(&self) -> &'static str {
        match self {
            ListingProfile::Apartment => "apartment",
            ListingProfile::Penthouse => "penthouse",
            ListingProfile::Villa => "villa",
            ListingProfile::IndependentHouse => "independent house",
            ListingProfile::Land => "plot",
            ListingProfile::JointVenture => "joint venture",
            ListingProfile::Commercial => "commercial property",
            ListingProfile::Farmhouse => "farmhouse",
            ListingProfile::PgCoLiving => "PG",
            ListingProfile::NewProject(None) => "new project",
            ListingProfile::NewProject(Some(category)) => category.label(),
        }
    }
}

/// Ordered conditions for `stage`.
///
/// A missing or unknown property type at the Details stage yields a single
/// `Tag("propertyType")`, since no rule set applies yet.
pub fn requirements(
    stage: Stage,
    property_type: Option<PropertyType>,
    transaction_type: Option<TransactionType>,
    category: Option<NewProjectCategory>,
) -> Vec<Requirement> {
    match stage {
        Stage::BasicInfo => basic_info(property_type, transaction_type),
        Stage::Details => match property_type {
            Some(pt) => ListingProfile::resolve(pt, category).details().to_vec(),
            None => vec![Tag("propertyType")],
        },
        Stage::Photos => Vec::new(),
        Stage::Review => CONTACT.to_vec(),
    }
}

fn basic_info(
    property_type: Option<PropertyType>,
    transaction_type: Option<TransactionType>,
) -> Vec<Requirement> {
    let mut reqs = vec![
        Tag("propertyType"),
        Tag("transactionType"),
        Present("title"),
        Present("price"),
        Present("address"),
        Present("city"),
        Present("state"),
    ];

    if property_type == Some(PropertyType::NewProjects) {
        reqs.extend([
            Tag("newProjectCategory"),
            Present("projectId"),
            Present("locality"),
            MapPin,
        ]);
    }

    match transaction_type {
        Some(TransactionType::Sale) => reqs.push(Answered("isResale")),
        Some(t) if t.is_letting() => reqs.push(AvailableFrom),
        _ => {}
    }

    reqs
}

/// Keys a stage reads before it lets the user move on
pub fn required_fields(
    stage: Stage,
    property_type: Option<PropertyType>,
    transaction_type: Option<TransactionType>,
    category: Option<NewProjectCategory>,
) -> BTreeSet<&'static str> {
    requirements(stage, property_type, transaction_type, category)
        .iter()
        .flat_map(|r| r.keys())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: [&str; 7] = ["propertyType", "transactionType", "title", "price", "address", "city", "state"];

    #[test]
    fn basic_info_always_requires_core_fields() {
        for pt in PropertyType::ALL {
            let fields = required_fields(Stage::BasicInfo, Some(pt), None, None);
            for key in BASE {
                assert!(fields.contains(key), "{pt} missing {key}");
            }
        }
    }

    #[test]
    fn map_pin_only_for_new_projects() {
        let project = required_fields(Stage::BasicInfo, Some(PropertyType::NewProjects), None, None);
        assert!(project.contains("latitude"));
        assert!(project.contains("longitude"));
        assert!(project.contains("projectId"));
        assert!(project.contains("newProjectCategory"));

        let villa = required_fields(Stage::BasicInfo, Some(PropertyType::Villa), None, None);
        assert!(!villa.contains("latitude"));
        assert!(!villa.contains("locality"));
    }

    #[test]
    fn transaction_type_gates_resale_and_availability() {
        let sale = required_fields(Stage::BasicInfo, None, Some(TransactionType::Sale), None);
        assert!(sale.contains("isResale"));
        assert!(!sale.contains("availableFrom"));

        for t in [TransactionType::Rent, TransactionType::Lease] {
            let letting = required_fields(Stage::BasicInfo, None, Some(t), None);
            assert!(letting.contains("availableFrom"));
            assert!(!letting.contains("isResale"));
        }
    }

    #[test]
    fn plot_and_joint_venture_share_rules() {
        let plot = ListingProfile::resolve(PropertyType::Plot, None);
        let jv = ListingProfile::resolve(PropertyType::JointVenture, None);
        assert_eq!(plot.details(), jv.details());
        assert_ne!(plot.noun(), jv.noun());
    }

    #[test]
    fn unknown_property_type_keeps_details_closed() {
        assert_eq!(requirements(Stage::Details, None, None, None), vec![Tag("propertyType")]);
        assert_eq!(
            requirements(Stage::Details, Some(PropertyType::NewProjects), None, None),
            vec![Tag("newProjectCategory")]
        );
    }

    #[test]
    fn new_project_categories_pick_their_group() {
        let plot = requirements(
            Stage::Details,
            Some(PropertyType::NewProjects),
            None,
            Some(NewProjectCategory::Plot),
        );
        assert!(plot.contains(&PlotDimension));
        assert!(!plot.contains(&FloorPlan));

        let row = requirements(
            Stage::Details,
            Some(PropertyType::NewProjects),
            None,
            Some(NewProjectCategory::RowHouse),
        );
        assert!(row.contains(&FloorPlan));
        assert!(row.contains(&Positive("totalVillas")));
    }

    #[test]
    fn pg_requires_any_of_selections() {
        let fields = required_fields(Stage::Details, Some(PropertyType::PgCoLiving), None, None);
        for key in PG_SELECTIONS {
            assert!(fields.contains(key));
        }
    }

    #[test]
    fn photos_stage_has_no_requirements() {
        for pt in PropertyType::ALL {
            assert!(requirements(Stage::Photos, Some(pt), Some(TransactionType::Sale), None).is_empty());
        }
    }

    #[test]
    fn review_requires_contact_and_consent() {
        let fields = required_fields(Stage::Review, None, None, None);
        for key in ["contactName", "contactPhone", "contactEmail", "agreedToTerms", "verifiedInfo"] {
            assert!(fields.contains(key));
        }
    }
}
