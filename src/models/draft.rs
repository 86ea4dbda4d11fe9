use crate::models::fields::{self, FieldKind, FLOOR_PLANS, PHOTOS, PLOT_DIMENSIONS};
use crate::models::groups::{FloorPlanEntry, PlotDimensionEntry, RepeatedGroup};
use crate::models::photos::{PhotoEntry, PhotoList};
use crate::models::property::{NewProjectCategory, PropertyRecord, PropertyType, TransactionType};
use chrono::DateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Value of one draft attribute.
///
/// Numbers and yes/no answers stay text until submission, so half-typed input
/// such as `"-"` is representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Empty text, an empty list or an unticked box
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(b) => !b,
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(String::from).collect())
    }
}

/// Working state of one listing being created or edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftRecord {
    fields: BTreeMap<String, FieldValue>,
    pub floor_plans: RepeatedGroup<FloorPlanEntry>,
    pub plot_dimensions: RepeatedGroup<PlotDimensionEntry>,
    pub photos: PhotoList,
}

impl DraftRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    /// Add `item` to a multi-select if absent, remove it if present.
    /// A key holding something other than a list is replaced by a list.
    pub fn toggle_array_member(&mut self, key: &str, item: &str) {
        let entry = self
            .fields
            .entry(key.to_string())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        if !matches!(entry, FieldValue::List(_)) {
            *entry = FieldValue::List(Vec::new());
        }
        if let FieldValue::List(items) = entry {
            match items.iter().position(|i| i == item) {
                Some(pos) => {
                    items.remove(pos);
                }
                None => items.push(item.to_string()),
            }
        }
    }

    /// Text of a field, empty when absent or not text
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn list(&self, key: &str) -> &[String] {
        self.get(key).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        self.text("propertyType").parse().ok()
    }

    pub fn transaction_type(&self) -> Option<TransactionType> {
        self.text("transactionType").parse().ok()
    }

    pub fn new_project_category(&self) -> Option<NewProjectCategory> {
        self.text("newProjectCategory").parse().ok()
    }

    /// Seed an edit session from a persisted property
    pub fn from_record(record: &PropertyRecord) -> Self {
        let mut draft = Self::default();

        for (key, value) in &record.fields {
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                FLOOR_PLANS => {
                    draft.floor_plans = RepeatedGroup::from_entries(group_entries(value));
                }
                PLOT_DIMENSIONS => {
                    draft.plot_dimensions = RepeatedGroup::from_entries(group_entries(value));
                }
                PHOTOS => {
                    draft.photos = PhotoList::from_entries(photo_entries(value));
                }
                _ => match fields::field_spec(key) {
                    Some(spec) => {
                        if let Some(field_value) = hydrate_value(spec.key, spec.kind, value) {
                            draft.fields.insert(key.clone(), field_value);
                        }
                    }
                    None => debug!("Ignoring unknown property attribute {}", key),
                },
            }
        }

        draft
    }
}

fn hydrate_value(key: &str, kind: FieldKind, value: &Value) -> Option<FieldValue> {
    match (kind, value) {
        (FieldKind::List, Value::Array(items)) => Some(FieldValue::List(
            items.iter().filter_map(scalar_text).collect(),
        )),
        (FieldKind::Consent, Value::Bool(b)) => Some(FieldValue::Flag(*b)),
        (FieldKind::YesNo, Value::Bool(b)) => Some(text(if *b { "yes" } else { "no" })),
        (FieldKind::Resale, Value::Bool(b)) => Some(text(if *b { "resale" } else { "new" })),
        (_, Value::String(s)) if is_date_field(key) => Some(text(&date_only(s))),
        (_, other) => scalar_text(other).map(FieldValue::Text),
    }
}

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_date_field(key: &str) -> bool {
    matches!(key, "availableFrom" | "possessionDate")
}

/// Persisted dates may come back as full timestamps; the form edits `YYYY-MM-DD`
fn date_only(s: &str) -> String {
    match DateTime::parse_from_rfc3339(s) {
        Ok(ts) => ts.date_naive().format("%Y-%m-%d").to_string(),
        Err(_) => s.to_string(),
    }
}

fn group_entries<T: DeserializeOwned>(value: &Value) -> Vec<T> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(stringify_object)
        .filter_map(|obj| serde_json::from_value(obj).ok())
        .collect()
}

/// Numbers inside group entries become text, like the flat fields
fn stringify_object(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter_map(|(k, v)| scalar_text(v).map(|s| (k.clone(), Value::String(s))))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn photo_entries(value: &Value) -> Vec<PhotoEntry> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(url) => Some(PhotoEntry {
                url: url.clone(),
                caption: String::new(),
                is_primary: false,
            }),
            other => serde_json::from_value(other.clone()).ok(),
        })
        .collect()
}
