//! Quotebook prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{BasketEvent, BasketItem, BasketStore, QuoteBasket, SubscriptionKey},
    catalog::{Catalog, CatalogItem, CatalogItemId},
    facets::{FacetIndex, StaleSelection, derive_facets},
    filter::{FilterSelection, Filterable, SelectionMode, filter, view::FilteredView},
    fixtures::{CatalogFixture, FixtureError},
    submission::{
        ChannelError, ContactForm, EventTypeId, Field, InquiryPayload, QuoteLineItem,
        QuotePayload, ScreenLifetime, SubmissionChannel, SubmissionController, SubmissionError,
        SubmissionMode, SubmissionOutcome, SubmissionPayload, reconcile,
    },
    tags::{collection::TagCollection, string::StringTagCollection},
    uuids::TypedUuid,
};
