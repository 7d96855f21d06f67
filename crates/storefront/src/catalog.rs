//! The product catalog.
//!
//! The catalog is a static list of purchasable items defined at startup.
//! There is no inventory backend; item images live under `/static`.

use hardware_store_core::{CatalogItem, ItemId, Price};

/// Immutable list of purchasable items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// The builtin hardware catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            items: vec![
                CatalogItem::new(
                    "wrench",
                    "Wrench",
                    Price::from_cents(500),
                    "/static/images/wrench.png",
                ),
                CatalogItem::new(
                    "nails",
                    "Nails",
                    Price::from_cents(25),
                    "/static/images/nails.png",
                ),
                CatalogItem::new(
                    "hammer",
                    "Hammer",
                    Price::from_cents(1000),
                    "/static/images/hammer.png",
                ),
            ],
        }
    }

    /// All items in display order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn find(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
