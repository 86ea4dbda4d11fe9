use serde::Serialize;
use std::collections::BTreeMap;

/// One typed value of the submission payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<String>),
    Entries(Vec<BTreeMap<String, PayloadValue>>),
}

impl PayloadValue {
    /// Whole numbers go out as integers so `8500000` does not become `8500000.0`
    pub fn number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            PayloadValue::Int(value as i64)
        } else {
            PayloadValue::Float(value)
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PayloadValue::Int(n) => Some(*n as f64),
            PayloadValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Strictly typed body for the create/update endpoints.
///
/// Serializes as a flat JSON object; absent attributes are simply missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload {
    values: BTreeMap<String, PayloadValue>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PayloadValue) {
        self.values.insert(key.into(), value);
    }

    /// Insert when present, drop the key otherwise
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<PayloadValue>) {
        let key = key.into();
        match value {
            Some(v) => {
                self.values.insert(key, v);
            }
            None => {
                self.values.remove(&key);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_numbers_serialize_as_integers() {
        assert_eq!(PayloadValue::number(8_500_000.0), PayloadValue::Int(8_500_000));
        assert_eq!(PayloadValue::number(1200.5), PayloadValue::Float(1200.5));
    }

    #[test]
    fn serializes_flat_object() {
        let mut payload = Payload::new();
        payload.insert("price", PayloadValue::Int(8_500_000));
        payload.insert("gatedCommunity", PayloadValue::Bool(true));
        payload.insert("amenities", PayloadValue::List(vec!["Gym".into()]));
        payload.insert_opt("area", None);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "price": 8500000, "gatedCommunity": true, "amenities": ["Gym"] })
        );
    }
}
