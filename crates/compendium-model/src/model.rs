//! The nested content model.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::value::FieldValue;

/// Reserved field holding an item's image URL.
pub const IMAGE_URL_FIELD: &str = "_imageUrl";

/// Reserved field remembering a herb row's raw category before
/// classification.
pub const ORIGINAL_CATEGORY_FIELD: &str = "_originalCategory";

/// Field name to stored value for one item.
pub type ItemFields = BTreeMap<String, FieldValue>;

/// Category -> item -> field -> value.
///
/// Built fresh on each ingestion pass and treated as immutable afterwards; a
/// data-source refresh replaces the whole model rather than patching it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentModel {
    categories: BTreeMap<String, BTreeMap<String, ItemFields>>,
}

impl ContentModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn item_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Category names in sorted order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Items of one category, if the category exists.
    pub fn category(&self, category: &str) -> Option<&BTreeMap<String, ItemFields>> {
        self.categories.get(category)
    }

    /// Fields of one item.
    pub fn item(&self, category: &str, item: &str) -> Option<&ItemFields> {
        self.categories.get(category)?.get(item)
    }

    /// Stored value of one field.
    pub fn field(&self, category: &str, item: &str, field: &str) -> Option<&FieldValue> {
        self.item(category, item)?.get(field)
    }

    /// Every (category, item, fields) triple, category-major.
    pub fn iter_items(&self) -> impl Iterator<Item = (&str, &str, &ItemFields)> {
        self.categories.iter().flat_map(|(category, items)| {
            items
                .iter()
                .map(move |(item, fields)| (category.as_str(), item.as_str(), fields))
        })
    }

    /// Create the category and item entries if absent. Entries already
    /// present are reused, never overwritten.
    pub fn ensure_item(&mut self, category: &str, item: &str) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .entry(item.to_string())
            .or_default();
    }

    /// Insert or replace the `basis` entry of one field, creating the
    /// category, item, and field slots as needed. Category and item entries
    /// already present are reused, never overwritten.
    pub fn insert_basis_value(
        &mut self,
        category: &str,
        item: &str,
        field: &str,
        basis: Basis,
        value: impl Into<String>,
    ) {
        let fields = self
            .categories
            .entry(category.to_string())
            .or_default()
            .entry(item.to_string())
            .or_default();
        match fields.entry(field.to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().insert(basis, value),
            Entry::Vacant(entry) => {
                entry.insert(FieldValue::single(basis, value));
            }
        }
    }
}
