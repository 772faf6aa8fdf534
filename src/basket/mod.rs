//! Quote Basket

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    catalog::{CatalogItem, CatalogItemId},
    tags::collection::TagCollection,
};

pub mod store;

pub use store::{BasketEvent, BasketStore, SubscriptionKey};

/// The part of a catalog item kept in the basket. It is a copy, so later
/// catalog edits do not reach items already selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItem {
    /// Catalog item id
    pub id: CatalogItemId,

    /// Display name
    pub name: String,

    /// Stock code
    pub sku: String,

    /// Category
    pub category: String,

    /// Thumbnail reference
    pub thumbnail: Option<String>,
}

impl<T: TagCollection> From<&CatalogItem<T>> for BasketItem {
    fn from(item: &CatalogItem<T>) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            sku: item.sku.clone(),
            category: item.category.clone(),
            thumbnail: item.thumbnail.clone(),
        }
    }
}

/// Ordered selection of catalog items, unique by id.
#[derive(Debug, Clone, Default)]
pub struct QuoteBasket {
    items: Vec<BasketItem>,
    ids: FxHashSet<CatalogItemId>,
}

impl QuoteBasket {
    /// Create an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns `false` when the id is already present, in which
    /// case the basket is left exactly as it was.
    pub fn add_item<T: TagCollection>(&mut self, item: &CatalogItem<T>) -> bool {
        if !self.ids.insert(item.id) {
            debug!(id = %item.id, "item already in basket");
            return false;
        }

        self.items.push(BasketItem::from(item));

        true
    }

    /// Remove the item with `id`. Returns `false` if it was not present.
    pub fn remove_item(&mut self, id: CatalogItemId) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }

        self.items.retain(|item| item.id != id);

        true
    }

    /// Remove everything. Returns how many items were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();

        self.items.clear();
        self.ids.clear();

        removed
    }

    /// Whether an item with `id` is in the basket.
    pub fn contains(&self, id: CatalogItemId) -> bool {
        self.ids.contains(&id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    /// Iterate over the items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BasketItem> {
        self.items.iter()
    }

    /// Get the number of items in the basket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
