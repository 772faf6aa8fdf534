//! The portfolio and blog surfaces run the same filter engine over their own
//! records with a single-category selection.

use std::{borrow::Cow, collections::BTreeSet};

use testresult::TestResult;

use quotebook::prelude::*;

#[derive(Debug, Clone)]
struct PortfolioEntry {
    title: String,
    category: String,
    event_types: BTreeSet<String>,
    tags: StringTagCollection,
    summary: String,
}

impl PortfolioEntry {
    fn new(title: &str, category: &str, event_types: &[&str], tags: &[&str], summary: &str) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            event_types: event_types.iter().map(ToString::to_string).collect(),
            tags: StringTagCollection::from_strs(tags),
            summary: summary.to_string(),
        }
    }
}

impl Filterable for PortfolioEntry {
    type Tags = StringTagCollection;

    fn category(&self) -> &str {
        &self.category
    }

    fn event_types(&self) -> &BTreeSet<String> {
        &self.event_types
    }

    fn tags(&self) -> &Self::Tags {
        &self.tags
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.category.as_str()),
            Cow::Owned(self.tags.joined(" ")),
            Cow::Borrowed(self.summary.as_str()),
        ]
    }
}

fn portfolio() -> Vec<PortfolioEntry> {
    vec![
        PortfolioEntry::new(
            "Vineyard Vows",
            "Weddings",
            &["Wedding"],
            &["rustic", "gold"],
            "Harvest tables under an Edison canopy",
        ),
        PortfolioEntry::new(
            "Launch Night",
            "Corporate",
            &["Corporate"],
            &["modern"],
            "Uplit stage and lounge seating",
        ),
        PortfolioEntry::new(
            "Garden Gala",
            "Galas",
            &["Gala"],
            &["gold", "classic"],
            "Round tables with gold chargers",
        ),
        PortfolioEntry::new(
            "Barn Reception",
            "Weddings",
            &["Wedding"],
            &["rustic"],
            "Farmhouse tables and hay bale lounges",
        ),
    ]
}

fn titles<'a>(entries: &[&'a PortfolioEntry]) -> Vec<&'a str> {
    entries.iter().map(|entry| entry.title.as_str()).collect()
}

#[test]
fn picking_a_category_replaces_the_previous_one() -> TestResult {
    let entries = portfolio();
    let mut selection: FilterSelection = FilterSelection::single_select();

    selection.select_category("Weddings");
    assert_eq!(
        titles(&filter(&entries, &selection)),
        vec!["Vineyard Vows", "Barn Reception"]
    );

    selection.select_category("Galas");
    assert_eq!(selection.categories().len(), 1);
    assert_eq!(titles(&filter(&entries, &selection)), vec!["Garden Gala"]);

    Ok(())
}

#[test]
fn event_types_and_tags_stay_unconstrained() -> TestResult {
    let entries = portfolio();
    let mut selection: FilterSelection = FilterSelection::single_select();

    selection.select_event_type("Corporate");
    selection.select_tag("gold");

    assert!(selection.event_types().is_empty());
    assert!(selection.tags().is_empty());
    assert_eq!(filter(&entries, &selection).len(), entries.len());

    Ok(())
}

#[test]
fn search_combines_with_the_single_category() -> TestResult {
    let entries = portfolio();
    let mut selection: FilterSelection = FilterSelection::single_select();

    selection.select_category("Weddings");
    selection.set_search_text("FARMHOUSE");

    assert_eq!(titles(&filter(&entries, &selection)), vec!["Barn Reception"]);

    // Search also reaches tags.
    selection.set_search_text("gold");

    assert_eq!(titles(&filter(&entries, &selection)), vec!["Vineyard Vows"]);

    Ok(())
}

#[test]
fn clearing_keeps_single_mode() -> TestResult {
    let entries = portfolio();
    let mut selection: FilterSelection = FilterSelection::single_select();

    selection.select_category("Corporate");
    selection.clear();

    assert_eq!(selection.mode(), SelectionMode::Single);
    assert_eq!(filter(&entries, &selection).len(), entries.len());

    selection.select_tag("rustic");

    assert!(selection.tags().is_empty());

    Ok(())
}

#[test]
fn facets_derive_from_any_filterable_record() -> TestResult {
    let entries = portfolio();
    let facets = derive_facets(&entries);

    assert_eq!(
        facets.categories().iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["Corporate", "Galas", "Weddings"]
    );
    assert!(facets.tags().contains("classic"));

    Ok(())
}
