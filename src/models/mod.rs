pub mod draft;
pub mod fields;
pub mod groups;
pub mod payload;
pub mod photos;
pub mod property;

pub use draft::{DraftRecord, FieldValue};
pub use fields::{field_spec, label_for, FieldKind, FieldSpec};
pub use groups::{FloorPlanEntry, PlotDimensionEntry, RepeatedGroup, MAX_GROUP_ENTRIES};
pub use payload::{Payload, PayloadValue};
pub use photos::{PhotoEntry, PhotoList};
pub use property::{NewProjectCategory, PropertyRecord, PropertyType, TransactionType};
