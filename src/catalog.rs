//! Catalog

use std::{
    borrow::Cow,
    collections::BTreeSet,
    sync::{Arc, Weak},
};

use rustc_hash::FxHashMap;

use crate::{
    filter::Filterable,
    tags::{collection::TagCollection, string::StringTagCollection},
    uuids::TypedUuid,
};

/// Catalog item id
pub type CatalogItemId = TypedUuid<CatalogItem>;

/// One piece of rentable equipment.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem<T: TagCollection = StringTagCollection> {
    /// Stable, unique id
    pub id: CatalogItemId,

    /// Display name
    pub name: String,

    /// Short stock code shown to staff
    pub sku: String,

    /// Category
    pub category: String,

    /// Style tags
    pub tags: T,

    /// Event types this item suits
    pub recommended_event_types: BTreeSet<String>,

    /// Thumbnail image reference
    pub thumbnail: Option<String>,

    /// Short description
    pub description: Option<String>,

    /// Daily rate label, e.g. "$500/day". Display only.
    pub daily_rate: Option<String>,
}

impl<T: TagCollection> CatalogItem<T> {
    /// Creates a new item with no tags, event types or optional details.
    pub fn new(
        id: CatalogItemId,
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sku: sku.into(),
            category: category.into(),
            tags: T::empty(),
            recommended_event_types: BTreeSet::new(),
            thumbnail: None,
            description: None,
            daily_rate: None,
        }
    }

    /// Replaces the item's tags.
    #[must_use]
    pub fn with_tags(mut self, tags: T) -> Self {
        self.tags = tags;
        self
    }

    /// Replaces the item's recommended event types.
    #[must_use]
    pub fn with_event_types<I, S>(mut self, event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommended_event_types = event_types.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the thumbnail reference.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Sets the short description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl<T: TagCollection> Filterable for CatalogItem<T> {
    type Tags = T;

    fn category(&self) -> &str {
        &self.category
    }

    fn event_types(&self) -> &BTreeSet<String> {
        &self.recommended_event_types
    }

    fn tags(&self) -> &T {
        &self.tags
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.sku.as_str()),
            Cow::Borrowed(self.category.as_str()),
            Cow::Owned(self.tags.joined(" ")),
        ];

        if let Some(description) = &self.description {
            fields.push(Cow::Borrowed(description.as_str()));
        }

        fields
    }
}

/// An immutable catalog snapshot.
///
/// Each load from the catalog source produces a new snapshot; snapshots are
/// replaced wholesale, never patched. Cloning is cheap and shares the items.
#[derive(Debug)]
pub struct Catalog<I = CatalogItem> {
    items: Arc<[I]>,
}

impl<I> Clone for Catalog<I> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<I> Catalog<I> {
    /// Wrap a freshly loaded sequence of items.
    pub fn new(items: impl Into<Vec<I>>) -> Self {
        Self {
            items: Arc::from(items.into()),
        }
    }

    /// The items in load order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Number of items in the snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether both handles refer to the same load.
    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    pub(crate) fn downgrade(&self) -> Weak<[I]> {
        Arc::downgrade(&self.items)
    }
}

impl<T: TagCollection> Catalog<CatalogItem<T>> {
    /// Index the snapshot by id. Duplicate ids are a data error; the last
    /// occurrence wins.
    pub fn by_id(&self) -> FxHashMap<CatalogItemId, &CatalogItem<T>> {
        self.items.iter().map(|item| (item.id, item)).collect()
    }

    /// Look up an item by id, with the same last-wins rule as [`Self::by_id`].
    pub fn find(&self, id: CatalogItemId) -> Option<&CatalogItem<T>> {
        self.items.iter().rev().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u128, name: &str) -> CatalogItem {
        CatalogItem::new(CatalogItemId::from_u128(id), name, format!("SKU-{id}"), "Tables")
    }

    #[test]
    fn duplicate_ids_resolve_to_last_occurrence() {
        let catalog = Catalog::new(vec![item(1, "First"), item(2, "Other"), item(1, "Second")]);

        let by_id = catalog.by_id();

        assert_eq!(by_id.len(), 2);
        assert_eq!(by_id.get(&CatalogItemId::from_u128(1)).map(|item| item.name.as_str()), Some("Second"));
        assert_eq!(
            catalog.find(CatalogItemId::from_u128(1)).map(|item| item.name.as_str()),
            Some("Second")
        );
    }

    #[test]
    fn clones_share_a_snapshot_but_reloads_do_not() {
        let catalog = Catalog::new(vec![item(1, "Table")]);
        let clone = catalog.clone();
        let reload = Catalog::new(vec![item(1, "Table")]);

        assert!(catalog.same_snapshot(&clone));
        assert!(!catalog.same_snapshot(&reload));
    }

    #[test]
    fn search_fields_include_joined_tags_and_description() {
        let item = item(1, "Gold Chiavari")
            .with_tags(StringTagCollection::from_strs(&["Gold", "classic"]))
            .with_description("Stackable resin chair");

        let fields = item.search_fields();

        assert!(fields.iter().any(|field| field == "classic gold"));
        assert!(fields.iter().any(|field| field == "Stackable resin chair"));
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn search_fields_without_description() {
        let fields = item(1, "Bar").search_fields();

        assert_eq!(fields.len(), 4);
    }
}
