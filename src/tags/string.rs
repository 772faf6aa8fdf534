//! String-based Tag Collection
//!
//! A `SmallVec<[String; 5]>`-based implementation of [`TagCollection`]. Tags are
//! case-normalized on the way in, so `"Gold"` and `" gold "` are the same tag.

use std::{
    cmp::Ordering,
    ops::{BitOr, BitOrAssign},
};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tags::collection::TagCollection;

/// Normalize a raw tag label. Returns `None` for labels that are blank.
fn normalize(tag: &str) -> Option<String> {
    let trimmed = tag.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// A string-based tag collection kept sorted, deduplicated and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StringTagCollection {
    tags: SmallVec<[String; 5]>,
}

impl StringTagCollection {
    /// Create a new string tag collection from raw labels.
    #[must_use]
    pub fn new(tags: SmallVec<[String; 5]>) -> Self {
        let mut collection = Self {
            tags: tags.iter().filter_map(|tag| normalize(tag)).collect(),
        };

        collection.tags.sort();
        collection.tags.dedup();

        collection
    }

    /// Create a new string tag collection from string slices.
    pub fn from_strs(tags: &[&str]) -> Self {
        tags.iter().copied().collect()
    }

    /// Convert the tag collection to a vector of strings.
    #[must_use]
    pub fn to_strs(&self) -> SmallVec<[String; 5]> {
        self.tags.clone()
    }
}

impl TagCollection for StringTagCollection {
    fn empty() -> Self {
        Self {
            tags: SmallVec::with_capacity(0),
        }
    }

    fn intersects(&self, other: &Self) -> bool {
        // Both sides are sorted, so walk them together in O(n + m).
        let mut left = self.tags.iter();
        let mut right = other.tags.iter();
        let mut left_tag = left.next();
        let mut right_tag = right.next();

        while let (Some(left_tag_ref), Some(right_tag_ref)) = (left_tag, right_tag) {
            match left_tag_ref.cmp(right_tag_ref) {
                Ordering::Equal => return true,
                Ordering::Less => left_tag = left.next(),
                Ordering::Greater => right_tag = right.next(),
            }
        }

        false
    }

    fn contains(&self, tag: &str) -> bool {
        normalize(tag).is_some_and(|tag| self.tags.binary_search(&tag).is_ok())
    }

    fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn len(&self) -> usize {
        self.tags.len()
    }

    fn add(&mut self, tag: &str) {
        let Some(tag) = normalize(tag) else {
            return;
        };

        if let Err(pos) = self.tags.binary_search(&tag) {
            self.tags.insert(pos, tag);
        }
    }

    fn remove(&mut self, tag: &str) {
        let Some(tag) = normalize(tag) else {
            return;
        };

        if let Ok(pos) = self.tags.binary_search(&tag) {
            self.tags.remove(pos);
        }
    }

    fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for StringTagCollection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for StringTagCollection {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags.into_iter().collect())
    }
}

impl From<StringTagCollection> for Vec<String> {
    fn from(collection: StringTagCollection) -> Self {
        collection.tags.into_vec()
    }
}

impl BitOr for StringTagCollection {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitOrAssign for StringTagCollection {
    fn bitor_assign(&mut self, rhs: Self) {
        let capacity = self.tags.len().saturating_add(rhs.tags.len());
        let mut result = SmallVec::with_capacity(capacity);
        let mut left = std::mem::take(&mut self.tags).into_iter().peekable();
        let mut right = rhs.tags.into_iter().peekable();

        // Merge two sorted vectors (union).
        while let (Some(left_tag), Some(right_tag)) = (left.peek(), right.peek()) {
            match left_tag.cmp(right_tag) {
                Ordering::Less => {
                    if let Some(tag) = left.next() {
                        result.push(tag);
                    }
                }
                Ordering::Greater => {
                    if let Some(tag) = right.next() {
                        result.push(tag);
                    }
                }
                Ordering::Equal => {
                    if let Some(tag) = left.next() {
                        result.push(tag);
                    }
                    right.next();
                }
            }
        }

        result.extend(left);
        result.extend(right);

        self.tags = result;
    }
}
