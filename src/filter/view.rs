//! Memoized filtered view
//!
//! Caches the visible subset keyed on the catalog snapshot and the selection,
//! so re-rendering without a change in either does not re-run the predicate.

use std::sync::Weak;

use tracing::debug;

use crate::{
    catalog::Catalog,
    filter::{FilterSelection, Filterable, matching_indices},
};

/// A filtered view over one browsing screen's catalog.
#[derive(Debug)]
pub struct FilteredView<I: Filterable> {
    snapshot: Option<Weak<[I]>>,
    selection: Option<FilterSelection<I::Tags>>,
    visible: Vec<usize>,
    recomputations: usize,
}

impl<I: Filterable> Default for FilteredView<I> {
    fn default() -> Self {
        Self {
            snapshot: None,
            selection: None,
            visible: Vec::new(),
            recomputations: 0,
        }
    }
}

impl<I: Filterable> FilteredView<I> {
    /// An empty view that will compute on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible records for `selection` over `catalog`, in catalog order.
    pub fn apply<'c>(
        &mut self,
        catalog: &'c Catalog<I>,
        selection: &FilterSelection<I::Tags>,
    ) -> Vec<&'c I> {
        if !self.is_current(catalog, selection) {
            self.visible = matching_indices(catalog.items(), selection);
            self.snapshot = Some(catalog.downgrade());
            self.selection = Some(selection.clone());
            self.recomputations = self.recomputations.saturating_add(1);

            debug!(
                total = catalog.len(),
                visible = self.visible.len(),
                "recomputed filtered view"
            );
        }

        self.visible
            .iter()
            .filter_map(|index| catalog.items().get(*index))
            .collect()
    }

    /// How many times the predicate has been re-run over the catalog.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Drop the cached result.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
        self.selection = None;
        self.visible.clear();
    }

    fn is_current(&self, catalog: &Catalog<I>, selection: &FilterSelection<I::Tags>) -> bool {
        let same_snapshot = self
            .snapshot
            .as_ref()
            .is_some_and(|snapshot| Weak::ptr_eq(snapshot, &catalog.downgrade()));

        same_snapshot && self.selection.as_ref() == Some(selection)
    }
}
