//! Fixtures
//!
//! YAML catalog snapshots, standing in for the remote catalog source in the
//! demo binary and in tests.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{Catalog, CatalogItem, CatalogItemId},
    tags::string::StringTagCollection,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// An item has a category outside the fixture's declared set
    #[error("Item {sku} has unknown category {category}")]
    UnknownCategory {
        /// Offending item
        sku: String,
        /// Its category
        category: String,
    },
}

/// One catalog item as written in a fixture file.
#[derive(Debug, Deserialize)]
struct ItemFixture {
    id: CatalogItemId,
    name: String,
    sku: String,
    category: String,
    #[serde(default)]
    tags: StringTagCollection,
    #[serde(default)]
    event_types: BTreeSet<String>,
    thumbnail: Option<String>,
    description: Option<String>,
    daily_rate: Option<String>,
}

impl From<ItemFixture> for CatalogItem {
    fn from(fixture: ItemFixture) -> Self {
        Self {
            id: fixture.id,
            name: fixture.name,
            sku: fixture.sku,
            category: fixture.category,
            tags: fixture.tags,
            recommended_event_types: fixture.event_types,
            thumbnail: fixture.thumbnail,
            description: fixture.description,
            daily_rate: fixture.daily_rate,
        }
    }
}

/// A catalog fixture file.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Closed category set. When empty, any category is accepted.
    #[serde(default)]
    categories: BTreeSet<String>,

    items: Vec<ItemFixture>,
}

impl CatalogFixture {
    /// Parse a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or an item's category is
    /// not in the declared category set.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: Self = serde_norway::from_str(yaml)?;

        fixture.validate()?;

        Ok(fixture)
    }

    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();

        let yaml = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loading catalog fixture");

        Self::from_yaml_str(&yaml)
    }

    /// Load a named set from `./fixtures/catalog/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_path(Path::new("./fixtures/catalog").join(format!("{name}.yml")))
    }

    /// Number of items in the fixture.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the fixture has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Turn the fixture into a catalog snapshot.
    pub fn into_catalog(self) -> Catalog {
        Catalog::new(
            self.items
                .into_iter()
                .map(CatalogItem::from)
                .collect::<Vec<_>>(),
        )
    }

    fn validate(&self) -> Result<(), FixtureError> {
        if self.categories.is_empty() {
            return Ok(());
        }

        match self
            .items
            .iter()
            .find(|item| !self.categories.contains(&item.category))
        {
            Some(item) => Err(FixtureError::UnknownCategory {
                sku: item.sku.clone(),
                category: item.category.clone(),
            }),
            None => Ok(()),
        }
    }
}
