//! Quotebook catalog browser
//!
//! Loads a catalog snapshot, applies facet filters from the command line and
//! prints the visible items. SKUs passed with `--add` go into a quote basket,
//! and the browser reports which request a submission would produce.

use std::process::ExitCode;

use tabled::{Table, Tabled};
use tracing::{error, warn};

use quotebook::prelude::*;

use crate::config::BrowseConfig;

mod config;
mod observability;

/// Table row for a visible catalog item.
#[derive(Debug, Tabled)]
struct ItemRow {
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Daily rate")]
    daily_rate: String,
    #[tabled(rename = "In quote")]
    in_quote: &'static str,
}

impl ItemRow {
    fn new(item: &CatalogItem, basket: &BasketStore) -> Self {
        Self {
            sku: item.sku.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            tags: item.tags.joined(", "),
            daily_rate: item.daily_rate.clone().unwrap_or_default(),
            in_quote: if basket.contains(item.id) { "yes" } else { "" },
        }
    }
}

fn selection_from(config: &BrowseConfig) -> FilterSelection {
    let mut selection = if config.single {
        FilterSelection::single_select()
    } else {
        FilterSelection::new()
    };

    selection.set_search_text(config.search.clone());

    for category in &config.categories {
        selection.select_category(category.clone());
    }

    for event_type in &config.event_types {
        selection.select_event_type(event_type.clone());
    }

    for tag in &config.tags {
        selection.select_tag(tag);
    }

    selection
}

fn fill_basket(catalog: &Catalog, skus: &[String], basket: &BasketStore) {
    for sku in skus {
        match catalog.items().iter().rev().find(|item| &item.sku == sku) {
            Some(item) => basket.add_item(item),
            None => warn!(%sku, "no catalog item with this SKU"),
        }
    }
}

#[expect(clippy::print_stdout, reason = "the browser's output is the rendered tables")]
fn render(facets: &FacetIndex, visible: &[&CatalogItem], basket: &BasketStore) {
    println!(
        "Categories: {}",
        facets.categories().iter().cloned().collect::<Vec<_>>().join(", ")
    );
    println!(
        "Event types: {}",
        facets.event_types().iter().cloned().collect::<Vec<_>>().join(", ")
    );
    println!("Tags: {}", facets.tags().joined(", "));
    println!();

    let rows: Vec<ItemRow> = visible.iter().map(|item| ItemRow::new(item, basket)).collect();

    println!("{}", Table::new(rows));
    println!("{} item(s) shown", visible.len());

    if basket.is_empty() {
        return;
    }

    let basket_items = basket.items();

    println!();
    println!(
        "Quote basket ({} item(s)): {}",
        basket.item_count(),
        basket_items
            .iter()
            .map(|item| item.sku.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mode = basket.with_items(SubmissionMode::for_basket);
    let required = submission_required_fields(mode);

    println!("Submitting now sends a {mode:?} request; required fields: {required}");
}

fn submission_required_fields(mode: SubmissionMode) -> String {
    quotebook::submission::required_fields(mode)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> ExitCode {
    let config = match BrowseConfig::load() {
        Ok(config) => config,
        Err(error) => {
            // Logging is not initialised yet; clap renders its own message.
            _ = error.print();
            return ExitCode::from(2);
        }
    };

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, so stderr is the only channel"
        )]
        {
            eprintln!("failed to initialise logging: {init_error}");
        }

        return ExitCode::FAILURE;
    }

    let catalog = match CatalogFixture::from_path(&config.catalog) {
        Ok(fixture) => fixture.into_catalog(),
        Err(load_error) => {
            error!("failed to load catalog: {load_error}");
            return ExitCode::FAILURE;
        }
    };

    let facets = derive_facets(catalog.items());
    let mut selection = selection_from(&config);

    let stale = facets.stale_values(&selection);
    if !stale.is_empty() {
        warn!(?stale, "selection includes values this catalog does not offer");

        if config.prune {
            selection = facets.prune(&selection);
        }
    }

    let basket = BasketStore::new();
    fill_basket(&catalog, &config.add, &basket);

    let mut view = FilteredView::new();
    let visible = view.apply(&catalog, &selection);

    render(&facets, &visible, &basket);

    ExitCode::SUCCESS
}
