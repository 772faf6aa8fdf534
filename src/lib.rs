//! Quotebook
//!
//! Catalog selection pipeline for an event-rental storefront: faceted
//! filtering of the equipment catalog, a session-scoped quote basket, and
//! reconciliation of the basket and contact form into an inquiry or a quote
//! request.

pub mod basket;
pub mod catalog;
pub mod facets;
pub mod filter;
pub mod fixtures;
pub mod prelude;
pub mod submission;
pub mod tags;
pub mod uuids;
