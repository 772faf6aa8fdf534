//! Submission
//!
//! Turns the contact form and quote basket into exactly one outbound request:
//! an inquiry when the basket is empty, a quote when it is not.

pub mod channel;
pub mod controller;
pub mod errors;
pub mod form;
pub mod payload;
pub mod reconcile;

pub use channel::{MockSubmissionChannel, SubmissionChannel};
pub use controller::{ScreenLifetime, SubmissionController, SubmissionOutcome};
pub use errors::{ChannelError, SubmissionError};
pub use form::{ContactForm, EventTypeId, Field};
pub use payload::{
    InquiryPayload, InquirySource, QuoteLineItem, QuotePayload, SubmissionMode, SubmissionPayload,
};
pub use reconcile::{missing_fields, reconcile, required_fields};
