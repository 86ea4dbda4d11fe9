use serde::{Deserialize, Serialize};

/// Number of slots the listing form offers for repeated entries
pub const MAX_GROUP_ENTRIES: usize = 4;

/// A fixed-shape sub-record of a repeated group
pub trait GroupEntry: Default + Clone {
    /// True when nothing has been typed into any column
    fn is_blank(&self) -> bool;
}

/// One unit configuration offered by a new project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanEntry {
    /// e.g. "2 BHK"
    #[serde(default)]
    pub configuration: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub price: String,
}

impl GroupEntry for FloorPlanEntry {
    fn is_blank(&self) -> bool {
        [&self.configuration, &self.area, &self.price]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}

/// One plot size offered by a plotted development
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotDimensionEntry {
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub breadth: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub price: String,
}

impl GroupEntry for PlotDimensionEntry {
    fn is_blank(&self) -> bool {
        [&self.length, &self.breadth, &self.area, &self.price]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}

/// Four slots of a repeated group, as laid out on the form
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatedGroup<T: GroupEntry> {
    slots: [T; MAX_GROUP_ENTRIES],
}

impl<T: GroupEntry> Default for RepeatedGroup<T> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: GroupEntry> RepeatedGroup<T> {
    /// Fill slots in order; entries past the fourth are dropped
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Self {
        let mut group = Self::default();
        for (slot, entry) in group.slots.iter_mut().zip(entries) {
            *slot = entry;
        }
        group
    }

    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// The first slot with anything typed into it
    pub fn first_filled(&self) -> Option<&T> {
        self.slots.iter().find(|e| !e.is_blank())
    }

    pub fn filled(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|e| !e.is_blank())
    }

    pub fn is_blank(&self) -> bool {
        self.first_filled().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
