//! Injectable furniture library.
//!
//! The placement engine is generic over any category vocabulary and never
//! consults a library implicitly; callers use one of these to mint the
//! `FurnitureItem`s that go into a solve batch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Dimensions, FurnitureItem};

/// Static identity of a product that can be staged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),
}

/// Furniture lookup table keyed by id. Iteration order is sorted by id so
/// listings stay deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurnitureCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl FurnitureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON array of catalog entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry)?;
        }
        Ok(catalog)
    }

    /// Adds one entry, rejecting ids that are already present.
    pub fn insert(&mut self, entry: CatalogEntry) -> Result<(), CatalogError> {
        if self.entries.contains_key(&entry.id) {
            return Err(CatalogError::DuplicateId(entry.id));
        }
        self.entries.insert(entry.id.clone(), entry);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Mints a `FurnitureItem` for a solve batch from the entry with `id`.
    pub fn furniture_item(&self, id: &str) -> Option<FurnitureItem> {
        self.entries.get(id).map(|entry| FurnitureItem {
            id: entry.id.clone(),
            name: entry.name.clone(),
            category: entry.category.clone(),
            image_url: None,
            dimensions: entry.dimensions,
        })
    }

    /// Entries in ascending id order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
