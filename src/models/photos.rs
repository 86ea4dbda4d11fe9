use serde::{Deserialize, Serialize};

/// A photo already uploaded to storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoEntry {
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// Ordered photos of a listing.
///
/// When the list is non-empty exactly one entry is primary. Every mutation
/// goes through [`PhotoList::repair`] to keep it that way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoList {
    entries: Vec<PhotoEntry>,
}

impl PhotoList {
    /// Build from hydrated entries, fixing up the primary flag
    pub fn from_entries(entries: Vec<PhotoEntry>) -> Self {
        let mut list = Self { entries };
        list.repair();
        list
    }

    pub fn entries(&self) -> &[PhotoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn primary(&self) -> Option<&PhotoEntry> {
        self.entries.iter().find(|p| p.is_primary)
    }

    pub fn add(&mut self, url: impl Into<String>, caption: impl Into<String>) {
        self.entries.push(PhotoEntry {
            url: url.into(),
            caption: caption.into(),
            is_primary: false,
        });
        self.repair();
    }

    /// Add an entry as given, then repair the primary flag.
    /// A new primary entry takes over from the previous one.
    pub fn push(&mut self, entry: PhotoEntry) {
        if entry.is_primary {
            for existing in &mut self.entries {
                existing.is_primary = false;
            }
        }
        self.entries.push(entry);
        self.repair();
    }

    pub fn remove(&mut self, index: usize) -> Option<PhotoEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.repair();
        Some(removed)
    }

    /// Returns false when the index is out of range
    pub fn set_primary(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.is_primary = i == index;
        }
        true
    }

    pub fn set_caption(&mut self, index: usize, caption: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.caption = caption.into();
                true
            }
            None => false,
        }
    }

    /// URLs in list order with the primary photo moved to the front
    pub fn urls_primary_first(&self) -> Vec<String> {
        let mut urls = Vec::with_capacity(self.entries.len());
        if let Some(primary) = self.primary() {
            urls.push(primary.url.clone());
        }
        urls.extend(
            self.entries
                .iter()
                .filter(|p| !p.is_primary)
                .map(|p| p.url.clone()),
        );
        urls
    }

    fn repair(&mut self) {
        let mut seen_primary = false;
        for entry in &mut self.entries {
            if entry.is_primary {
                if seen_primary {
                    entry.is_primary = false;
                }
                seen_primary = true;
            }
        }
        if !seen_primary {
            if let Some(first) = self.entries.first_mut() {
                first.is_primary = true;
            }
        }
    }
}
