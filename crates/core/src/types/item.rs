//! Purchasable catalog items.

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, Price};

/// A purchasable item from the store catalog.
///
/// Catalog items are immutable and defined at startup. The cart holds full
/// item values rather than references so an order snapshot is
/// self-describing on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Item handle, also the cart grouping key.
    pub id: ItemId,
    /// Display name (e.g. "Wrench").
    pub name: String,
    /// Unit price in cents.
    pub price: Price,
    /// Asset path of the product image.
    pub image: String,
}

impl CatalogItem {
    /// Create a new catalog item.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_item_wire_format() {
        let item = CatalogItem::new(
            "wrench",
            "Wrench",
            Price::from_cents(500),
            "/static/images/wrench.png",
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "wrench",
                "name": "Wrench",
                "price": 500,
                "image": "/static/images/wrench.png",
            })
        );
    }
}
