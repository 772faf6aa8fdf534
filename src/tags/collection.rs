//! Tag Collection
//!
//! A collection-based tagging system for facet matching and union.

use std::{fmt::Debug, ops::{BitOr, BitOrAssign}};

/// Trait for tag collections that support the set operations used by facet
/// derivation and filtering.
pub trait TagCollection: Clone + Debug + PartialEq + BitOr<Output = Self> + BitOrAssign {
    /// Whether the two collections share at least one tag.
    fn intersects(&self, other: &Self) -> bool;

    /// Whether `tag`, once normalized, is present.
    fn contains(&self, tag: &str) -> bool;

    /// Whether there are no tags.
    fn is_empty(&self) -> bool;

    /// Number of distinct tags.
    fn len(&self) -> usize;

    /// A collection with no tags.
    fn empty() -> Self;

    /// Insert a tag; blank tags and duplicates are ignored.
    fn add(&mut self, tag: &str);

    /// Drop a tag if present.
    fn remove(&mut self, tag: &str);

    /// Iterate over the tags in a stable order.
    fn iter(&self) -> impl Iterator<Item = &str>;

    /// Join all tags into a single string with the given separator.
    fn joined(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }
}
