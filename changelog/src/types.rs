use crate::error::ChangelogError;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// A change to be merged into the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub category: String,
    pub change: String,
}

impl ChangeEntry {
    pub fn new(category: impl Into<String>, change: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            change: change.into(),
        }
    }
}

/// Category name to entry texts, kept in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories(Vec<(String, Vec<String>)>);

impl Categories {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds items under `category`, appending when the category is already present
    pub fn extend(&mut self, category: &str, items: impl IntoIterator<Item = String>) {
        match self.0.iter_mut().find(|(name, _)| name == category) {
            Some((_, existing)) => existing.extend(items),
            None => self.0.push((category.to_string(), items.into_iter().collect())),
        }
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.0
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, items) in &self.0 {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

/// Plain record of one date section
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChangelogEntry {
    pub date: String,
    pub categories: Categories,
}
