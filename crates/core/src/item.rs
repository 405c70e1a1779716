//! The recurring item model family.
//!
//! `Item` is the draft shape the body-focused chapters accept: a name, a
//! price, and a handful of optional attributes. Field rules live on the model
//! itself so every chapter that accepts an item enforces the same contract.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Upper bound on a free-text description.
pub const MAX_DESCRIPTION_LEN: usize = 300;

/// A linked image. The URL must be absolute http(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub name: String,
}

impl Image {
    pub fn validate(&self) -> DomainResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(DomainError::validation(format!(
                "image url must be absolute http(s), got {:?}",
                self.url
            )));
        }
        Ok(())
    }
}

/// An item as submitted by a client.
///
/// `tags` is a set: duplicates collapse on the way in and serialize in a
/// stable order on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

impl Item {
    /// Enforce the field rules: price strictly positive, description bounded,
    /// image URLs well-formed.
    pub fn validate(&self) -> DomainResult<()> {
        if self.price <= 0.0 {
            return Err(DomainError::validation(
                "price: must be greater than zero",
            ));
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(DomainError::validation(format!(
                    "description: must be at most {MAX_DESCRIPTION_LEN} characters"
                )));
            }
        }
        if let Some(images) = &self.images {
            for image in images {
                image.validate()?;
            }
        }
        Ok(())
    }

    /// Total price when a tax amount was supplied.
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax.map(|tax| self.price + tax)
    }
}

/// A bundle of items, nested one level deeper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub items: Vec<Item>,
}

impl Offer {
    pub fn validate(&self) -> DomainResult<()> {
        if self.price <= 0.0 {
            return Err(DomainError::validation(
                "price: must be greater than zero",
            ));
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64) -> Item {
        Item {
            name: "Foo".to_string(),
            description: None,
            price,
            tax: None,
            tags: BTreeSet::new(),
            images: None,
        }
    }

    #[test]
    fn valid_item_passes() {
        assert!(item(42.0).validate().is_ok());
    }

    #[test]
    fn non_positive_price_rejected() {
        let err = item(0.0).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn oversized_description_rejected() {
        let mut it = item(42.0);
        it.description = Some("x".repeat(MAX_DESCRIPTION_LEN + 1));
        assert!(it.validate().is_err());
    }

    #[test]
    fn description_at_bound_accepted() {
        let mut it = item(42.0);
        it.description = Some("x".repeat(MAX_DESCRIPTION_LEN));
        assert!(it.validate().is_ok());
    }

    #[test]
    fn relative_image_url_rejected() {
        let mut it = item(42.0);
        it.images = Some(vec![Image {
            url: "ftp://example.com/a.png".to_string(),
            name: "a".to_string(),
        }]);
        assert!(it.validate().is_err());
    }

    #[test]
    fn tags_deduplicate_on_deserialize() {
        let it: Item = serde_json::from_value(serde_json::json!({
            "name": "Foo",
            "price": 1.0,
            "tags": ["rock", "metal", "rock"],
        }))
        .unwrap();
        assert_eq!(it.tags.len(), 2);
    }

    #[test]
    fn price_with_tax() {
        let mut it = item(42.0);
        assert_eq!(it.price_with_tax(), None);
        it.tax = Some(3.2);
        assert_eq!(it.price_with_tax(), Some(45.2));
    }

    #[test]
    fn offer_validates_nested_items() {
        let offer = Offer {
            name: "Bundle".to_string(),
            description: None,
            price: 10.0,
            items: vec![item(-1.0)],
        };
        assert!(offer.validate().is_err());
    }
}
