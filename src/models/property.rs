use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Kind of property being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    Villa,
    Plot,
    IndependentHouse,
    NewProjects,
    Commercial,
    JointVenture,
    PgCoLiving,
    Farmhouse,
    Penthouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 10] = [
        PropertyType::Apartment,
        PropertyType::Villa,
        PropertyType::Plot,
        PropertyType::IndependentHouse,
        PropertyType::NewProjects,
        PropertyType::Commercial,
        PropertyType::JointVenture,
        PropertyType::PgCoLiving,
        PropertyType::Farmhouse,
        PropertyType::Penthouse,
    ];

    /// Wire tag, as stored in the draft and sent to the API
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::Plot => "plot",
            PropertyType::IndependentHouse => "independent_house",
            PropertyType::NewProjects => "new_projects",
            PropertyType::Commercial => "commercial",
            PropertyType::JointVenture => "joint_venture",
            PropertyType::PgCoLiving => "pg_co_living",
            PropertyType::Farmhouse => "farmhouse",
            PropertyType::Penthouse => "penthouse",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Plot => "Plot",
            PropertyType::IndependentHouse => "Independent House",
            PropertyType::NewProjects => "New Project",
            PropertyType::Commercial => "Commercial",
            PropertyType::JointVenture => "Joint Venture",
            PropertyType::PgCoLiving => "PG / Co-living",
            PropertyType::Farmhouse => "Farmhouse",
            PropertyType::Penthouse => "Penthouse",
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the property is offered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Rent,
    Lease,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Rent => "rent",
            TransactionType::Lease => "lease",
        }
    }

    /// Rent and lease listings must say when the property becomes available
    pub fn is_letting(&self) -> bool {
        matches!(self, TransactionType::Rent | TransactionType::Lease)
    }
}

impl FromStr for TransactionType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(TransactionType::Sale),
            "rent" => Ok(TransactionType::Rent),
            "lease" => Ok(TransactionType::Lease),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

/// Sub-category of a new-project listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NewProjectCategory {
    Apartment,
    RowHouse,
    Villa,
    Plot,
}

impl NewProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewProjectCategory::Apartment => "apartment",
            NewProjectCategory::RowHouse => "row_house",
            NewProjectCategory::Villa => "villa",
            NewProjectCategory::Plot => "plot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NewProjectCategory::Apartment => "apartment project",
            NewProjectCategory::RowHouse => "row house project",
            NewProjectCategory::Villa => "villa project",
            NewProjectCategory::Plot => "plotted development",
        }
    }

    /// Plotted developments describe units by dimensions, the rest by floor plans
    pub fn uses_plot_dimensions(&self) -> bool {
        matches!(self, NewProjectCategory::Plot)
    }
}

impl FromStr for NewProjectCategory {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(NewProjectCategory::Apartment),
            "row_house" => Ok(NewProjectCategory::RowHouse),
            "villa" => Ok(NewProjectCategory::Villa),
            "plot" => Ok(NewProjectCategory::Plot),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag: {0:?}")]
pub struct UnknownTag(pub String);

/// A property as returned by the persistence service.
///
/// Every attribute is optional and nullable on input, so the record keeps the
/// attributes as a flat JSON object next to the identity fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PropertyRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
