//! In-memory item catalog.
//!
//! Stored entries are raw JSON documents, not structs. The distinction the
//! update/response chapters rely on - "field never set" vs "field set to
//! null" - is only representable on the document itself, so the catalog keeps
//! whatever keys were actually written and nothing else. Typed shapes
//! ([`CatalogItem`], [`ItemPatch`]) guard the edges.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{DomainError, DomainResult};

/// Default tax applied when a replacement omits the field.
pub const DEFAULT_TAX: f64 = 10.5;

fn default_tax() -> f64 {
    DEFAULT_TAX
}

/// Full catalog shape with defaults. Used to parse a stored document (absent
/// keys pick up the defaults) and as the replacement payload. Serializes every
/// field, including explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_tax")]
    pub tax: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update. Absent fields keep the stored value.
///
/// A field sent as explicit `null` also counts as absent; wholesale resets go
/// through a replacement instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ItemPatch {
    /// Merge this patch over a stored item. Fields present in the patch win;
    /// everything else keeps the stored value.
    pub fn apply_to(&self, stored: &CatalogItem) -> CatalogItem {
        CatalogItem {
            name: self.name.clone().or_else(|| stored.name.clone()),
            description: self
                .description
                .clone()
                .or_else(|| stored.description.clone()),
            price: self.price.or(stored.price),
            tax: self.tax.unwrap_or(stored.tax),
            tags: self.tags.clone().unwrap_or_else(|| stored.tags.clone()),
        }
    }
}

/// Shared catalog store.
#[derive(Debug)]
pub struct Catalog {
    items: RwLock<HashMap<String, Value>>,
}

impl Catalog {
    /// The three canonical fixtures the tour keeps referring to. Note the
    /// asymmetry: `foo` has only two keys set, `baz` has its description
    /// explicitly nulled.
    pub fn with_fixtures() -> Self {
        let mut items = HashMap::new();
        items.insert("foo".to_string(), json!({"name": "Foo", "price": 50.2}));
        items.insert(
            "bar".to_string(),
            json!({"name": "Bar", "description": "The bartenders", "price": 62.0, "tax": 20.2}),
        );
        items.insert(
            "baz".to_string(),
            json!({
                "name": "Baz",
                "description": null,
                "price": 50.2,
                "tax": 10.5,
                "tags": [],
            }),
        );
        Self {
            items: RwLock::new(items),
        }
    }

    /// Fetch the stored document exactly as written.
    pub fn get(&self, item_id: &str) -> DomainResult<Value> {
        let items = self
            .items
            .read()
            .map_err(|e| DomainError::internal(format!("catalog poisoned: {e}")))?;
        items.get(item_id).cloned().ok_or(DomainError::NotFound)
    }

    /// Parse the stored document into the full shape, defaults filled.
    pub fn get_parsed(&self, item_id: &str) -> DomainResult<CatalogItem> {
        let doc = self.get(item_id)?;
        serde_json::from_value(doc)
            .map_err(|e| DomainError::internal(format!("stored item {item_id} malformed: {e}")))
    }

    /// Replace the stored document wholesale with the full shape.
    pub fn replace(&self, item_id: &str, item: &CatalogItem) -> DomainResult<Value> {
        let doc = serde_json::to_value(item)
            .map_err(|e| DomainError::internal(format!("encode item {item_id}: {e}")))?;
        let mut items = self
            .items
            .write()
            .map_err(|e| DomainError::internal(format!("catalog poisoned: {e}")))?;
        items.insert(item_id.to_string(), doc.clone());
        Ok(doc)
    }

    /// Merge a partial update into the stored item and persist the result.
    pub fn merge_patch(&self, item_id: &str, patch: &ItemPatch) -> DomainResult<CatalogItem> {
        let stored = self.get_parsed(item_id)?;
        let updated = patch.apply_to(&stored);
        self.replace(item_id, &updated)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixtures_keep_only_written_keys() {
        let catalog = Catalog::with_fixtures();
        let foo = catalog.get("foo").unwrap();
        let keys: Vec<&String> = foo.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        let baz = catalog.get("baz").unwrap();
        assert!(baz.as_object().unwrap()["description"].is_null());
    }

    #[test]
    fn missing_item_is_not_found() {
        let catalog = Catalog::with_fixtures();
        assert_eq!(catalog.get("qux").unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn parsing_fills_defaults() {
        let catalog = Catalog::with_fixtures();
        let foo = catalog.get_parsed("foo").unwrap();
        assert_eq!(foo.tax, DEFAULT_TAX);
        assert!(foo.tags.is_empty());
    }

    #[test]
    fn replace_writes_every_field() {
        let catalog = Catalog::with_fixtures();
        let replacement: CatalogItem = serde_json::from_value(json!({
            "name": "Barz",
            "price": 3.0,
            "tags": [],
        }))
        .unwrap();
        let doc = catalog.replace("bar", &replacement).unwrap();
        let object = doc.as_object().unwrap();
        // Absent fields land as their defaults, explicitly.
        assert_eq!(object["tax"], json!(DEFAULT_TAX));
        assert!(object["description"].is_null());
    }

    #[test]
    fn patch_keeps_unmentioned_fields() {
        let catalog = Catalog::with_fixtures();
        let patch: ItemPatch = serde_json::from_value(json!({
            "name": "Barz",
            "price": 3.0,
        }))
        .unwrap();
        let updated = catalog.merge_patch("bar", &patch).unwrap();
        assert_eq!(updated.name.as_deref(), Some("Barz"));
        assert_eq!(updated.price, Some(3.0));
        // Stored values survive the merge.
        assert_eq!(updated.description.as_deref(), Some("The bartenders"));
        assert_eq!(updated.tax, 20.2);
    }

    fn arb_catalog_item() -> impl Strategy<Value = CatalogItem> {
        (
            proptest::option::of("[a-z]{1,8}"),
            proptest::option::of("[a-z ]{0,20}"),
            proptest::option::of(0.01f64..1000.0),
            0.0f64..50.0,
            proptest::collection::vec("[a-z]{1,6}", 0..4),
        )
            .prop_map(|(name, description, price, tax, tags)| CatalogItem {
                name,
                description,
                price,
                tax,
                tags,
            })
    }

    fn arb_patch() -> impl Strategy<Value = ItemPatch> {
        (
            proptest::option::of("[a-z]{1,8}"),
            proptest::option::of(0.01f64..1000.0),
            proptest::option::of(0.0f64..50.0),
        )
            .prop_map(|(name, price, tax)| ItemPatch {
                name,
                description: None,
                price,
                tax,
                tags: None,
            })
    }

    proptest! {
        #[test]
        fn patch_never_touches_absent_fields(stored in arb_catalog_item(), patch in arb_patch()) {
            let merged = patch.apply_to(&stored);
            // description and tags are never in the patch above
            prop_assert_eq!(&merged.description, &stored.description);
            prop_assert_eq!(&merged.tags, &stored.tags);
            if patch.name.is_none() {
                prop_assert_eq!(&merged.name, &stored.name);
            } else {
                prop_assert_eq!(&merged.name, &patch.name);
            }
            if patch.tax.is_none() {
                prop_assert_eq!(merged.tax, stored.tax);
            }
        }
    }
}
