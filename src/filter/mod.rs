//! Filter Engine
//!
//! Narrows a catalog by free-text search and by three facets: category,
//! recommended event type and style tags. Within a facet any selected value
//! is enough (OR); across facets every non-empty facet must match (AND). An
//! empty facet places no constraint.

use std::{borrow::Cow, collections::BTreeSet};

use tracing::trace;

use crate::tags::{collection::TagCollection, string::StringTagCollection};

pub mod view;

/// Anything the filter engine can match: catalog items, portfolio entries,
/// blog posts.
pub trait Filterable {
    /// Tag collection type used by this record.
    type Tags: TagCollection;

    /// The record's single category.
    fn category(&self) -> &str;

    /// Event types the record is associated with.
    fn event_types(&self) -> &BTreeSet<String>;

    /// Style tags.
    fn tags(&self) -> &Self::Tags;

    /// Text fields searched by free-text search, in their original case.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// How category selections combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Any number of values per facet.
    #[default]
    Multi,

    /// At most one category at a time; selecting another replaces it.
    /// Event type and tag facets are fixed to "no constraint".
    Single,
}

/// The user's current filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection<T: TagCollection = StringTagCollection> {
    mode: SelectionMode,
    search_text: String,
    categories: BTreeSet<String>,
    event_types: BTreeSet<String>,
    tags: T,
}

impl<T: TagCollection> Default for FilterSelection<T> {
    fn default() -> Self {
        Self::with_mode(SelectionMode::Multi)
    }
}

impl<T: TagCollection> FilterSelection<T> {
    /// An empty multi-select selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty single-category selection, as used by the portfolio and
    /// blog browsing surfaces.
    #[must_use]
    pub fn single_select() -> Self {
        Self::with_mode(SelectionMode::Single)
    }

    fn with_mode(mode: SelectionMode) -> Self {
        Self {
            mode,
            search_text: String::new(),
            categories: BTreeSet::new(),
            event_types: BTreeSet::new(),
            tags: T::empty(),
        }
    }

    /// Selection mode
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Current search text, as typed.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Selected categories
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Selected event types
    pub fn event_types(&self) -> &BTreeSet<String> {
        &self.event_types
    }

    /// Selected tags
    pub fn tags(&self) -> &T {
        &self.tags
    }

    /// Whether no facet and no search text constrains the result.
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && self.categories.is_empty()
            && self.event_types.is_empty()
            && self.tags.is_empty()
    }

    /// Replace the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Select a category. In single mode this replaces any current category.
    pub fn select_category(&mut self, category: impl Into<String>) {
        if self.mode == SelectionMode::Single {
            self.categories.clear();
        }

        self.categories.insert(category.into());
    }

    /// Deselect a category if selected.
    pub fn deselect_category(&mut self, category: &str) {
        self.categories.remove(category);
    }

    /// Toggle a category on or off.
    pub fn toggle_category(&mut self, category: &str) {
        if self.categories.contains(category) {
            self.deselect_category(category);
        } else {
            self.select_category(category);
        }
    }

    /// Select an event type. Ignored in single mode.
    pub fn select_event_type(&mut self, event_type: impl Into<String>) {
        if self.mode == SelectionMode::Single {
            trace!("event type facet is fixed in single-select mode");
            return;
        }

        self.event_types.insert(event_type.into());
    }

    /// Deselect an event type if selected.
    pub fn deselect_event_type(&mut self, event_type: &str) {
        self.event_types.remove(event_type);
    }

    /// Toggle an event type on or off.
    pub fn toggle_event_type(&mut self, event_type: &str) {
        if self.event_types.contains(event_type) {
            self.deselect_event_type(event_type);
        } else {
            self.select_event_type(event_type);
        }
    }

    /// Select a tag. Ignored in single mode.
    pub fn select_tag(&mut self, tag: &str) {
        if self.mode == SelectionMode::Single {
            trace!("tag facet is fixed in single-select mode");
            return;
        }

        self.tags.add(tag);
    }

    /// Deselect a tag if selected.
    pub fn deselect_tag(&mut self, tag: &str) {
        self.tags.remove(tag);
    }

    /// Toggle a tag on or off.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.tags.contains(tag) {
            self.deselect_tag(tag);
        } else {
            self.select_tag(tag);
        }
    }

    /// Reset every facet and the search text. The mode is kept.
    pub fn clear(&mut self) {
        *self = Self::with_mode(self.mode);
    }

    /// Builder form of [`Self::set_search_text`].
    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.set_search_text(text);
        self
    }

    /// Builder form of [`Self::select_category`].
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.select_category(category);
        self
    }

    /// Builder form of [`Self::select_event_type`].
    #[must_use]
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.select_event_type(event_type);
        self
    }

    /// Builder form of [`Self::select_tag`].
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.select_tag(tag);
        self
    }

    /// Whether a single record passes every active facet.
    pub fn matches<I>(&self, item: &I) -> bool
    where
        I: Filterable<Tags = T>,
    {
        Predicate::new(self).matches(item)
    }

    pub(crate) fn replace_facets(
        &mut self,
        categories: BTreeSet<String>,
        event_types: BTreeSet<String>,
        tags: T,
    ) {
        self.categories = categories;
        self.event_types = event_types;
        self.tags = tags;
    }
}

/// A selection prepared for matching many records.
struct Predicate<'s, T: TagCollection> {
    selection: &'s FilterSelection<T>,
    needle: Option<String>,
}

impl<'s, T: TagCollection> Predicate<'s, T> {
    fn new(selection: &'s FilterSelection<T>) -> Self {
        let needle = (!selection.search_text.is_empty())
            .then(|| selection.search_text.to_lowercase());

        Self { selection, needle }
    }

    fn matches<I>(&self, item: &I) -> bool
    where
        I: Filterable<Tags = T>,
    {
        self.matches_search(item)
            && self.matches_category(item)
            && self.matches_event_types(item)
            && self.matches_tags(item)
    }

    fn matches_search<I: Filterable<Tags = T>>(&self, item: &I) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };

        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
    }

    fn matches_category<I: Filterable<Tags = T>>(&self, item: &I) -> bool {
        self.selection.categories.is_empty() || self.selection.categories.contains(item.category())
    }

    fn matches_event_types<I: Filterable<Tags = T>>(&self, item: &I) -> bool {
        self.selection.event_types.is_empty()
            || !self.selection.event_types.is_disjoint(item.event_types())
    }

    fn matches_tags<I: Filterable<Tags = T>>(&self, item: &I) -> bool {
        self.selection.tags.is_empty() || item.tags().intersects(&self.selection.tags)
    }
}

/// Return the records that pass `selection`, in their original order.
pub fn filter<'a, I>(items: &'a [I], selection: &FilterSelection<I::Tags>) -> Vec<&'a I>
where
    I: Filterable,
{
    let predicate = Predicate::new(selection);

    let visible: Vec<&I> = items.iter().filter(|item| predicate.matches(*item)).collect();

    trace!(total = items.len(), visible = visible.len(), "filtered records");

    visible
}

pub(crate) fn matching_indices<I>(items: &[I], selection: &FilterSelection<I::Tags>) -> Vec<usize>
where
    I: Filterable,
{
    let predicate = Predicate::new(selection);

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| predicate.matches(item).then_some(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::catalog::{CatalogItem, CatalogItemId};

    use super::*;

    fn item(id: u128, category: &str, tags: &[&str]) -> CatalogItem {
        CatalogItem::new(CatalogItemId::from_u128(id), format!("Item {id}"), format!("SKU-{id}"), category)
            .with_tags(StringTagCollection::from_strs(tags))
    }

    fn ids(items: &[&CatalogItem]) -> Vec<CatalogItemId> {
        items.iter().map(|item| item.id).collect()
    }

    fn tables_and_seating() -> Vec<CatalogItem> {
        vec![
            item(1, "Tables", &["gold"]),
            item(2, "Seating", &["gold", "modern"]),
            item(3, "Tables", &["modern"]),
        ]
    }

    #[test]
    fn category_and_tag_are_anded() {
        let catalog = tables_and_seating();
        let selection = FilterSelection::new().with_category("Tables").with_tag("modern");

        let visible = filter(&catalog, &selection);

        assert_eq!(ids(&visible), vec![CatalogItemId::from_u128(3)]);
    }

    #[test]
    fn tags_within_facet_are_ored() {
        let catalog = tables_and_seating();
        let selection = FilterSelection::new().with_tag("gold").with_tag("modern");

        let visible = filter(&catalog, &selection);

        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn categories_within_facet_are_ored() {
        let catalog = tables_and_seating();
        let selection = FilterSelection::new().with_category("Tables").with_category("Seating");

        assert_eq!(filter(&catalog, &selection).len(), 3);
    }

    #[test]
    fn empty_selection_returns_everything_in_order() {
        let catalog = tables_and_seating();

        let visible = filter(&catalog, &FilterSelection::new());

        assert_eq!(
            ids(&visible),
            catalog.iter().map(|item| item.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn stale_category_matches_nothing() {
        let catalog = tables_and_seating();
        let selection = FilterSelection::new().with_category("Discontinued");

        assert!(filter(&catalog, &selection).is_empty());
    }

    #[test]
    fn event_type_facet_requires_overlap() {
        let catalog = vec![
            item(1, "Lighting", &[]).with_event_types(["Wedding", "Gala"]),
            item(2, "Lighting", &[]).with_event_types(["Corporate"]),
            item(3, "Lighting", &[]),
        ];
        let selection = FilterSelection::new()
            .with_event_type("Gala")
            .with_event_type("Birthday");

        let visible = filter(&catalog, &selection);

        assert_eq!(ids(&visible), vec![CatalogItemId::from_u128(1)]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = vec![
            CatalogItem::new(CatalogItemId::from_u128(1), "Velvet Sofa", "LNG-001", "Lounge Furniture"),
            CatalogItem::new(CatalogItemId::from_u128(2), "Uplight", "AV-014", "Audio Visual"),
        ];

        let by_name = filter(&catalog, &FilterSelection::new().with_search_text("VELV"));
        let by_sku = filter(&catalog, &FilterSelection::new().with_search_text("av-01"));
        let by_category = filter(&catalog, &FilterSelection::new().with_search_text("lounge"));

        assert_eq!(ids(&by_name), vec![CatalogItemId::from_u128(1)]);
        assert_eq!(ids(&by_sku), vec![CatalogItemId::from_u128(2)]);
        assert_eq!(ids(&by_category), vec![CatalogItemId::from_u128(1)]);
    }

    #[test]
    fn search_covers_tags_and_description() {
        let catalog = vec![
            item(1, "Tables", &["rustic"]),
            item(2, "Tables", &[]).with_description("Reclaimed oak farm table"),
        ];

        let by_tag = filter(&catalog, &FilterSelection::new().with_search_text("Rust"));
        let by_description = filter(&catalog, &FilterSelection::new().with_search_text("oak farm"));

        assert_eq!(ids(&by_tag), vec![CatalogItemId::from_u128(1)]);
        assert_eq!(ids(&by_description), vec![CatalogItemId::from_u128(2)]);
    }

    #[test]
    fn search_does_not_tokenize() {
        let catalog = vec![CatalogItem::new(CatalogItemId::from_u128(1), "Velvet Sofa", "LNG-001", "Lounge")];

        let visible = filter(&catalog, &FilterSelection::new().with_search_text("sofa velvet"));

        assert!(visible.is_empty());
    }

    #[test]
    fn single_mode_replaces_category() {
        let mut selection = FilterSelection::<StringTagCollection>::single_select();

        selection.select_category("Weddings");
        selection.select_category("Corporate");

        assert_eq!(selection.categories().len(), 1);
        assert!(selection.categories().contains("Corporate"));
    }

    #[test]
    fn single_mode_ignores_event_types_and_tags() {
        let mut selection = FilterSelection::<StringTagCollection>::single_select();

        selection.select_event_type("Gala");
        selection.select_tag("gold");

        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = FilterSelection::<StringTagCollection>::new();

        selection.toggle_tag("Gold");
        assert!(selection.tags().contains("gold"));

        selection.toggle_tag("gold");
        assert!(selection.tags().is_empty());

        selection.toggle_category("Tables");
        selection.toggle_event_type("Gala");
        assert!(!selection.is_empty());

        selection.toggle_category("Tables");
        selection.toggle_event_type("Gala");
        assert!(selection.is_empty());
    }

    #[test]
    fn clear_keeps_mode() {
        let mut selection = FilterSelection::<StringTagCollection>::single_select()
            .with_category("Weddings")
            .with_search_text("tent");

        selection.clear();

        assert!(selection.is_empty());
        assert_eq!(selection.mode(), SelectionMode::Single);
    }

    #[test]
    fn matches_agrees_with_filter() {
        let catalog = tables_and_seating();
        let selection = FilterSelection::new().with_tag("gold");

        let visible = filter(&catalog, &selection);

        for item in &catalog {
            assert_eq!(
                selection.matches(item),
                visible.iter().any(|visible| visible.id == item.id),
                "item {} disagrees",
                item.id
            );
        }
    }
}
