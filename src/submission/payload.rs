//! Outbound payloads
//!
//! The two request shapes sent to the submission channel. Field names are
//! the wire contract.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    basket::BasketItem,
    catalog::CatalogItemId,
    submission::form::EventTypeId,
};

/// Which shape a submission takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    /// No items selected: a plain contact inquiry.
    Inquiry,

    /// Items selected: a quote request bundling them.
    Quote,
}

impl SubmissionMode {
    /// The mode for a basket with these items.
    pub fn for_basket(items: &[BasketItem]) -> Self {
        if items.is_empty() {
            Self::Inquiry
        } else {
            Self::Quote
        }
    }
}

/// Where an inquiry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquirySource {
    /// The public contact form
    ContactForm,
}

/// A contact inquiry with no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryPayload {
    /// Visitor name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Message
    pub message: String,

    /// Origin of the inquiry
    pub source: InquirySource,
}

/// One selected item in a quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    /// Catalog item id
    pub id: CatalogItemId,

    /// Always 1; there is no quantity picker.
    pub quantity: u32,

    /// Display name
    pub name: String,

    /// Thumbnail reference
    pub thumbnail: Option<String>,
}

impl From<&BasketItem> for QuoteLineItem {
    fn from(item: &BasketItem) -> Self {
        Self {
            id: item.id,
            quantity: 1,
            name: item.name.clone(),
            thumbnail: item.thumbnail.clone(),
        }
    }
}

/// A quote request bundling the basket's items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePayload {
    /// Visitor name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,

    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Kind of event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type_id: Option<EventTypeId>,

    /// Event date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<Date>,

    /// Venue or location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_location: Option<String>,

    /// Expected guests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,

    /// Selected items
    pub items: Vec<QuoteLineItem>,

    /// Message
    pub message: String,
}

/// What gets sent to the submission channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionPayload {
    /// Plain inquiry
    Inquiry(InquiryPayload),

    /// Quote request
    Quote(QuotePayload),
}

impl SubmissionPayload {
    /// The mode this payload was built in.
    pub fn mode(&self) -> SubmissionMode {
        match self {
            Self::Inquiry(_) => SubmissionMode::Inquiry,
            Self::Quote(_) => SubmissionMode::Quote,
        }
    }
}
