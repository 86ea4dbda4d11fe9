/// How a draft attribute is edited and how it is typed on submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Single-select enum, kept as its tag
    Choice,
    /// Whole number typed as text
    Integer,
    /// Decimal number typed as text
    Decimal,
    /// `"yes" | "no" | ""`
    YesNo,
    /// `"new" | "resale" | ""`
    Resale,
    /// Multi-select
    List,
    Phone,
    Email,
    /// Checkbox that gates submission but is never sent
    Consent,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { key, label, kind }
}

use FieldKind::*;

/// Every attribute a listing can carry, across all property types
pub const FIELDS: &[FieldSpec] = &[
    // Basic information
    field("propertyType", "property type", Choice),
    field("transactionType", "transaction type", Choice),
    field("title", "listing title", Text),
    field("description", "description", Text),
    field("price", "price", Decimal),
    field("area", "area", Decimal),
    field("areaUnit", "area unit", Choice),
    field("isResale", "new or resale", Resale),
    field("availableFrom", "available from", Text),
    field("address", "address", Text),
    field("locality", "locality", Text),
    field("landmark", "landmark", Text),
    field("city", "city", Text),
    field("state", "state", Text),
    field("pincode", "pincode", Text),
    field("latitude", "latitude", Decimal),
    field("longitude", "longitude", Decimal),
    field("newProjectCategory", "project category", Choice),
    field("projectId", "project", Text),
    field("projectName", "project name", Text),
    field("builderName", "builder name", Text),
    field("reraId", "RERA registration number", Text),
    // Residential details
    field("bedrooms", "number of bedrooms", Integer),
    field("bathrooms", "number of bathrooms", Integer),
    field("balconies", "number of balconies", Integer),
    field("floorNumber", "floor number", Integer),
    field("totalFloors", "total floors", Integer),
    field("totalFlats", "total flats in the building", Integer),
    field("flatsOnFloor", "flats on the floor", Integer),
    field("numberOfLifts", "number of lifts", Integer),
    field("carParkingCount", "car parking spaces", Integer),
    field("twoWheelerParking", "two-wheeler parking spaces", Integer),
    field("carpetArea", "carpet area", Decimal),
    field("builtUpArea", "built-up area", Decimal),
    field("superBuiltUpArea", "super built-up area", Decimal),
    field("furnishing", "furnishing status", Choice),
    field("facing", "facing direction", Choice),
    field("ageOfProperty", "age of property", Choice),
    field("flooringType", "flooring type", Choice),
    field("waterSupply", "water supply", Choice),
    field("ownershipType", "ownership type", Choice),
    field("maintenanceCharges", "maintenance charges", Decimal),
    field("securityDeposit", "security deposit", Decimal),
    field("priceNegotiable", "price negotiable", YesNo),
    field("gatedCommunity", "gated community", YesNo),
    field("cornerProperty", "corner property", YesNo),
    field("powerBackup", "power backup", YesNo),
    field("petFriendly", "pet friendly", YesNo),
    field("servantRoom", "servant room", YesNo),
    field("poojaRoom", "pooja room", YesNo),
    field("studyRoom", "study room", YesNo),
    field("amenities", "amenities", List),
    field("highlights", "highlights", List),
    field("nearbyPlaces", "nearby places", List),
    // Villas and houses
    field("totalVillas", "total villas", Integer),
    field("villaType", "villa type", Choice),
    field("plotArea", "plot area", Decimal),
    field("privateGarden", "private garden", YesNo),
    field("privatePool", "private pool", YesNo),
    field("terraceArea", "terrace area", Decimal),
    field("privateTerrace", "private terrace", YesNo),
    // Plots and joint ventures
    field("plotLength", "plot length", Integer),
    field("plotBreadth", "plot breadth", Integer),
    field("roadWidth", "road width", Decimal),
    field("openSides", "open sides", Integer),
    field("boundaryWall", "boundary wall", YesNo),
    field("constructionDone", "construction done", YesNo),
    field("landZoning", "land zoning", Choice),
    field("jvDeveloperShare", "developer share", Decimal),
    field("jvLandownerShare", "landowner share", Decimal),
    field("jvGoodwillAmount", "goodwill amount", Decimal),
    // Commercial
    field("commercialType", "commercial property type", Choice),
    field("washrooms", "number of washrooms", Integer),
    field("cabins", "number of cabins", Integer),
    field("seats", "number of seats", Integer),
    field("pantry", "pantry", YesNo),
    field("conferenceRoom", "conference room", YesNo),
    field("fireSafety", "fire safety", YesNo),
    field("occupancyCertificate", "occupancy certificate", YesNo),
    // Farmhouse
    field("landArea", "land area", Decimal),
    field("farmhouseWaterSource", "water source", Choice),
    field("electricityConnection", "electricity connection", YesNo),
    field("cultivable", "cultivable land", YesNo),
    // PG / co-living
    field("pgName", "PG name", Text),
    field("pgGender", "tenant gender", Choice),
    field("pgSharingType", "sharing type", Choice),
    field("pgTotalBeds", "total beds", Integer),
    field("pgMealsIncluded", "meals included", YesNo),
    field("pgNoticePeriod", "notice period (days)", Integer),
    field("pgFacilities", "PG facilities", List),
    field("pgRules", "house rules", List),
    field("pgServices", "PG services", List),
    // New projects
    field("projectStatus", "project status", Choice),
    field("possessionDate", "possession date", Text),
    field("totalTowers", "total towers", Integer),
    field("totalPlots", "total plots", Integer),
    field("projectAreaAcres", "project area (acres)", Decimal),
    // Contact and consent
    field("contactName", "contact name", Text),
    field("contactPhone", "contact phone", Phone),
    field("contactEmail", "contact email", Email),
    field("agreedToTerms", "terms and conditions", Consent),
    field("verifiedInfo", "information accuracy confirmation", Consent),
];

/// Keys of the repeated groups, which live beside the flat fields
pub const FLOOR_PLANS: &str = "floorPlans";
pub const PLOT_DIMENSIONS: &str = "plotDimensions";
pub const PHOTOS: &str = "photos";

pub fn field_spec(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.key == key)
}

/// Human label for a key, falling back to the key itself
pub fn label_for(key: &str) -> &str {
    match key {
        FLOOR_PLANS => "floor plans",
        PLOT_DIMENSIONS => "plot dimensions",
        PHOTOS => "photos",
        _ => field_spec(key).map(|f| f.label).unwrap_or(key),
    }
}
