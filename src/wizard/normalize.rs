//! Turns the text-typed draft into the typed body sent to the API.

use crate::models::fields::{FieldKind, FIELDS, FLOOR_PLANS, PLOT_DIMENSIONS};
use crate::models::{DraftRecord, FieldValue, FloorPlanEntry, Payload, PayloadValue, PlotDimensionEntry, PropertyType};
use crate::parse::{parse_float, parse_int};
use crate::validation::{normalize_email, normalize_phone};
use std::collections::BTreeMap;

/// Build the submission payload. Pure: the same draft always gives the same payload.
pub fn normalize(draft: &DraftRecord) -> Payload {
    let mut payload = Payload::new();

    for spec in FIELDS {
        let Some(value) = draft.get(spec.key) else {
            continue;
        };
        if let Some(typed) = typed_value(spec.kind, value) {
            payload.insert(spec.key, typed);
        }
    }

    let plans: Vec<_> = draft.floor_plans.filled().map(floor_plan_value).collect();
    if !plans.is_empty() {
        payload.insert(FLOOR_PLANS, PayloadValue::Entries(plans));
    }
    let dimensions: Vec<_> = draft.plot_dimensions.filled().map(plot_dimension_value).collect();
    if !dimensions.is_empty() {
        payload.insert(PLOT_DIMENSIONS, PayloadValue::Entries(dimensions));
    }

    let (price, area) = primary_price_and_area(draft);
    payload.insert_opt("price", price.map(PayloadValue::number));
    payload.insert_opt("area", area.map(PayloadValue::number));
    payload.insert_opt("pricePerSqft", price_per_sqft(price, area).map(PayloadValue::Int));

    payload
}

fn typed_value(kind: FieldKind, value: &FieldValue) -> Option<PayloadValue> {
    match (kind, value) {
        (FieldKind::Consent, _) => None,
        (FieldKind::List, FieldValue::List(items)) => Some(PayloadValue::List(items.clone())),
        (_, FieldValue::Flag(b)) => Some(PayloadValue::Bool(*b)),
        (_, FieldValue::List(_)) => None,
        (kind, FieldValue::Text(text)) => typed_text(kind, text),
    }
}

fn typed_text(kind: FieldKind, text: &str) -> Option<PayloadValue> {
    match kind {
        FieldKind::Integer => parse_int(text).map(PayloadValue::Int),
        FieldKind::Decimal => parse_float(text).map(PayloadValue::number),
        FieldKind::YesNo => match text {
            "yes" => Some(PayloadValue::Bool(true)),
            "no" => Some(PayloadValue::Bool(false)),
            _ => None,
        },
        FieldKind::Resale => match text {
            "resale" => Some(PayloadValue::Bool(true)),
            "new" => Some(PayloadValue::Bool(false)),
            _ => None,
        },
        FieldKind::Phone => non_empty(normalize_phone(text)),
        FieldKind::Email => non_empty(normalize_email(text)),
        FieldKind::Text | FieldKind::Choice => non_empty(text.trim().to_string()),
        FieldKind::List | FieldKind::Consent => None,
    }
}

fn non_empty(s: String) -> Option<PayloadValue> {
    if s.is_empty() {
        None
    } else {
        Some(PayloadValue::Text(s))
    }
}

fn floor_plan_value(entry: &FloorPlanEntry) -> BTreeMap<String, PayloadValue> {
    let mut map = BTreeMap::new();
    if let Some(v) = non_empty(entry.configuration.trim().to_string()) {
        map.insert("configuration".to_string(), v);
    }
    insert_number(&mut map, "area", &entry.area);
    insert_number(&mut map, "price", &entry.price);
    map
}

fn plot_dimension_value(entry: &PlotDimensionEntry) -> BTreeMap<String, PayloadValue> {
    let mut map = BTreeMap::new();
    insert_number(&mut map, "length", &entry.length);
    insert_number(&mut map, "breadth", &entry.breadth);
    insert_number(&mut map, "area", &entry.area);
    insert_number(&mut map, "price", &entry.price);
    map
}

fn insert_number(map: &mut BTreeMap<String, PayloadValue>, key: &str, text: &str) {
    if let Some(n) = parse_float(text) {
        map.insert(key.to_string(), PayloadValue::number(n));
    }
}

/// Headline price and area.
///
/// New projects take them from the first filled floor plan (or plot
/// dimension, for plotted developments); each value falls back to the flat
/// field when the entry leaves it out.
fn primary_price_and_area(draft: &DraftRecord) -> (Option<f64>, Option<f64>) {
    let flat_price = parse_float(draft.text("price"));
    let flat_area = parse_float(draft.text("area"));

    if draft.property_type() != Some(PropertyType::NewProjects) {
        return (flat_price, flat_area);
    }

    let uses_plots = draft
        .new_project_category()
        .map(|c| c.uses_plot_dimensions())
        .unwrap_or(false);

    let entry = if uses_plots {
        draft
            .plot_dimensions
            .first_filled()
            .map(|e| (parse_float(&e.price), parse_float(&e.area)))
    } else {
        draft
            .floor_plans
            .first_filled()
            .map(|e| (parse_float(&e.price), parse_float(&e.area)))
    };

    match entry {
        Some((price, area)) => (price.or(flat_price), area.or(flat_area)),
        None => (flat_price, flat_area),
    }
}

fn price_per_sqft(price: Option<f64>, area: Option<f64>) -> Option<i64> {
    match (price, area) {
        (Some(price), Some(area)) if area != 0.0 => Some((price / area).round() as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_per_sqft_from_price_and_area() {
        let mut draft = DraftRecord::new();
        draft.set("price", "8500000");
        draft.set("area", "1000");
        let payload = normalize(&draft);
        assert_eq!(payload.get("pricePerSqft"), Some(&PayloadValue::Int(8500)));

        draft.set("area", "0");
        let payload = normalize(&draft);
        assert_eq!(payload.get("pricePerSqft"), None);
        assert_eq!(payload.get("area"), Some(&PayloadValue::Int(0)));
    }

    #[test]
    fn oversized_whole_numbers_are_kept() {
        let mut draft = DraftRecord::new();
        draft.set("bedrooms", "99999999999999999999");
        assert_eq!(normalize(&draft).get("bedrooms"), Some(&PayloadValue::Int(i64::MAX)));
    }

    #[test]
    fn unparseable_numbers_are_absent_not_zero() {
        let mut draft = DraftRecord::new();
        draft.set("bedrooms", "");
        draft.set("totalFloors", "-");
        draft.set("maintenanceCharges", "n/a");
        draft.set("balconies", "0");
        let payload = normalize(&draft);

        assert!(!payload.contains("bedrooms"));
        assert!(!payload.contains("totalFloors"));
        assert!(!payload.contains("maintenanceCharges"));
        assert_eq!(payload.get("balconies"), Some(&PayloadValue::Int(0)));
    }

    #[test]
    fn tri_state_answers_map_to_booleans() {
        let mut draft = DraftRecord::new();
        draft.set("gatedCommunity", "yes");
        draft.set("powerBackup", "no");
        draft.set("petFriendly", "");
        draft.set("isResale", "new");
        let payload = normalize(&draft);

        assert_eq!(payload.get("gatedCommunity"), Some(&PayloadValue::Bool(true)));
        assert_eq!(payload.get("powerBackup"), Some(&PayloadValue::Bool(false)));
        assert!(!payload.contains("petFriendly"));
        assert_eq!(payload.get("isResale"), Some(&PayloadValue::Bool(false)));

        draft.set("isResale", "resale");
        assert_eq!(normalize(&draft).get("isResale"), Some(&PayloadValue::Bool(true)));
    }

    #[test]
    fn contact_details_are_cleaned_and_consent_dropped() {
        let mut draft = DraftRecord::new();
        draft.set("contactPhone", "+91 98765-43210");
        draft.set("contactEmail", "  Seller@Example.COM ");
        draft.set("agreedToTerms", true);
        let payload = normalize(&draft);

        assert_eq!(payload.get("contactPhone"), Some(&PayloadValue::Text("919876543210".into())));
        assert_eq!(payload.get("contactEmail"), Some(&PayloadValue::Text("seller@example.com".into())));
        assert!(!payload.contains("agreedToTerms"));
    }

    #[test]
    fn new_project_headline_comes_from_first_floor_plan() {
        let mut draft = DraftRecord::new();
        draft.set("propertyType", "new_projects");
        draft.set("newProjectCategory", "apartment");
        draft.set("price", "5000000");
        draft.set("area", "900");
        *draft.floor_plans.slot_mut(1).unwrap() = FloorPlanEntry {
            configuration: "2 BHK".into(),
            area: "1100".into(),
            price: "7700000".into(),
        };
        *draft.floor_plans.slot_mut(2).unwrap() = FloorPlanEntry {
            configuration: "3 BHK".into(),
            area: "1500".into(),
            price: "9000000".into(),
        };

        let payload = normalize(&draft);
        assert_eq!(payload.get("price"), Some(&PayloadValue::Int(7_700_000)));
        assert_eq!(payload.get("area"), Some(&PayloadValue::Int(1100)));
        assert_eq!(payload.get("pricePerSqft"), Some(&PayloadValue::Int(7000)));
        match payload.get(FLOOR_PLANS) {
            Some(PayloadValue::Entries(entries)) => assert_eq!(entries.len(), 2),
            other => panic!("unexpected floor plans {other:?}"),
        }
    }

    #[test]
    fn plotted_project_uses_dimensions_and_falls_back_per_value() {
        let mut draft = DraftRecord::new();
        draft.set("propertyType", "new_projects");
        draft.set("newProjectCategory", "plot");
        draft.set("area", "1200");
        *draft.plot_dimensions.slot_mut(0).unwrap() = PlotDimensionEntry {
            length: "40".into(),
            breadth: "30".into(),
            area: String::new(),
            price: "3600000".into(),
        };

        let payload = normalize(&draft);
        assert_eq!(payload.get("price"), Some(&PayloadValue::Int(3_600_000)));
        assert_eq!(payload.get("area"), Some(&PayloadValue::Int(1200)));
        assert_eq!(payload.get("pricePerSqft"), Some(&PayloadValue::Int(3000)));
    }

    #[test]
    fn flat_listing_ignores_floor_plans_for_headline() {
        let mut draft = DraftRecord::new();
        draft.set("propertyType", "apartment");
        draft.set("price", "6000000");
        *draft.floor_plans.slot_mut(0).unwrap() = FloorPlanEntry {
            configuration: "2 BHK".into(),
            area: "1000".into(),
            price: "1".into(),
        };
        let payload = normalize(&draft);
        assert_eq!(payload.get("price"), Some(&PayloadValue::Int(6_000_000)));
        assert!(!payload.contains("pricePerSqft"));
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut draft = DraftRecord::new();
        draft.set("price", "4500000.50");
        draft.set("area", "850");
        draft.set("amenities", vec!["Gym", "Lift"]);
        assert_eq!(normalize(&draft), normalize(&draft));
    }
}
