//! Shared basket store
//!
//! One store per session, created by the application shell and handed to
//! every screen that reads or mutates the basket. Clones are handles to the
//! same store. Mutations are visible to every handle as soon as the call
//! returns, and observers run synchronously before it does.

use std::{
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use slotmap::{SlotMap, new_key_type};
use tracing::debug;

use crate::{
    basket::{BasketItem, QuoteBasket},
    catalog::{CatalogItem, CatalogItemId},
    tags::collection::TagCollection,
};

new_key_type! {
    /// Observer subscription key
    pub struct SubscriptionKey;
}

/// A change to the basket, delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasketEvent {
    /// An item was added; `count` is the new item count.
    Added {
        /// Added item id
        id: CatalogItemId,
        /// Item count after the change
        count: usize,
    },

    /// An item was removed; `count` is the new item count.
    Removed {
        /// Removed item id
        id: CatalogItemId,
        /// Item count after the change
        count: usize,
    },

    /// The basket was emptied.
    Cleared {
        /// How many items were removed
        removed: usize,
    },
}

type Observer = Arc<dyn Fn(&BasketEvent) + Send + Sync>;

/// Session-scoped, shared quote basket.
#[derive(Clone, Default)]
pub struct BasketStore {
    basket: Arc<RwLock<QuoteBasket>>,
    observers: Arc<RwLock<SlotMap<SubscriptionKey, Observer>>>,
}

impl fmt::Debug for BasketStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasketStore")
            .field("basket", &*self.read())
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl BasketStore {
    /// Create a store holding an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Adding an id that is already present changes nothing.
    pub fn add_item<T: TagCollection>(&self, item: &CatalogItem<T>) {
        let count = {
            let mut basket = self.write();

            if !basket.add_item(item) {
                return;
            }

            basket.len()
        };

        debug!(id = %item.id, count, "added item to basket");

        self.notify(&BasketEvent::Added { id: item.id, count });
    }

    /// Remove an item. Removing an absent id changes nothing.
    pub fn remove_item(&self, id: CatalogItemId) {
        let count = {
            let mut basket = self.write();

            if !basket.remove_item(id) {
                return;
            }

            basket.len()
        };

        debug!(%id, count, "removed item from basket");

        self.notify(&BasketEvent::Removed { id, count });
    }

    /// Empty the basket.
    pub fn clear_basket(&self) {
        let removed = self.write().clear();

        if removed == 0 {
            return;
        }

        debug!(removed, "cleared basket");

        self.notify(&BasketEvent::Cleared { removed });
    }

    /// Current number of items.
    pub fn item_count(&self) -> usize {
        self.read().len()
    }

    /// Whether the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Whether an item with `id` is in the basket.
    pub fn contains(&self, id: CatalogItemId) -> bool {
        self.read().contains(id)
    }

    /// A copy of the items in insertion order.
    pub fn items(&self) -> Vec<BasketItem> {
        self.read().items().to_vec()
    }

    /// Run `f` against the current items without copying them.
    pub fn with_items<R>(&self, f: impl FnOnce(&[BasketItem]) -> R) -> R {
        f(self.read().items())
    }

    /// Register an observer. It is called synchronously after every change,
    /// outside the basket lock, so it may read the store.
    pub fn subscribe(&self, observer: impl Fn(&BasketEvent) + Send + Sync + 'static) -> SubscriptionKey {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Arc::new(observer))
    }

    /// Remove an observer. Unknown keys are ignored.
    pub fn unsubscribe(&self, key: SubscriptionKey) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn observer_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, event: &BasketEvent) {
        // Snapshot first so observers can subscribe or unsubscribe.
        let observers: Vec<Observer> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        for observer in observers {
            observer(event);
        }
    }

    // Basket operations cannot leave the basket half-updated, so a poisoned
    // lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, QuoteBasket> {
        self.basket.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, QuoteBasket> {
        self.basket.write().unwrap_or_else(PoisonError::into_inner)
    }
}
