//! Catalog Facet Index
//!
//! The filter values a catalog offers, derived from a snapshot. The index is
//! rebuilt from scratch for every catalog load; it is never patched.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{
    filter::{FilterSelection, Filterable},
    tags::{collection::TagCollection, string::StringTagCollection},
};

/// Available values per facet.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetIndex<T: TagCollection = StringTagCollection> {
    categories: BTreeSet<String>,
    event_types: BTreeSet<String>,
    tags: T,
}

/// Derive the facet index from a catalog snapshot.
pub fn derive_facets<I: Filterable>(items: &[I]) -> FacetIndex<I::Tags> {
    let mut index = FacetIndex {
        categories: BTreeSet::new(),
        event_types: BTreeSet::new(),
        tags: I::Tags::empty(),
    };

    for item in items {
        index.categories.insert(item.category().to_string());
        index.event_types.extend(item.event_types().iter().cloned());
        index.tags |= item.tags().clone();
    }

    debug!(
        items = items.len(),
        categories = index.categories.len(),
        event_types = index.event_types.len(),
        tags = index.tags.len(),
        "derived catalog facets"
    );

    index
}

impl<T: TagCollection> FacetIndex<T> {
    /// Known categories
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Known event types
    pub fn event_types(&self) -> &BTreeSet<String> {
        &self.event_types
    }

    /// Known tags
    pub fn tags(&self) -> &T {
        &self.tags
    }

    /// Whether the catalog offered no facet values at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.event_types.is_empty() && self.tags.is_empty()
    }

    /// Selected values that this index does not know about, typically left
    /// over from before a catalog reload.
    pub fn stale_values(&self, selection: &FilterSelection<T>) -> StaleSelection {
        StaleSelection {
            categories: selection
                .categories()
                .difference(&self.categories)
                .cloned()
                .collect(),
            event_types: selection
                .event_types()
                .difference(&self.event_types)
                .cloned()
                .collect(),
            tags: selection
                .tags()
                .iter()
                .filter(|tag| !self.tags.contains(tag))
                .map(str::to_string)
                .collect(),
        }
    }

    /// A copy of `selection` with stale facet values removed. Search text and
    /// mode are kept.
    #[must_use]
    pub fn prune(&self, selection: &FilterSelection<T>) -> FilterSelection<T> {
        let mut tags = selection.tags().clone();

        for tag in selection.tags().iter().filter(|tag| !self.tags.contains(tag)) {
            tags.remove(tag);
        }

        let mut pruned = selection.clone();

        pruned.replace_facets(
            selection
                .categories()
                .intersection(&self.categories)
                .cloned()
                .collect(),
            selection
                .event_types()
                .intersection(&self.event_types)
                .cloned()
                .collect(),
            tags,
        );

        pruned
    }
}

/// Facet values selected but missing from the current index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaleSelection {
    /// Unknown categories
    pub categories: Vec<String>,

    /// Unknown event types
    pub event_types: Vec<String>,

    /// Unknown tags
    pub tags: Vec<String>,
}

impl StaleSelection {
    /// Whether every selected value is still known.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.event_types.is_empty() && self.tags.is_empty()
    }
}
