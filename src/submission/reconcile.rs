//! Submission reconciliation
//!
//! Chooses the payload shape from the basket and checks the fields that shape
//! requires. Phone is required for quotes only.

use crate::{
    basket::BasketItem,
    submission::{
        errors::SubmissionError,
        form::{ContactForm, Field},
        payload::{
            InquiryPayload, InquirySource, QuoteLineItem, QuotePayload, SubmissionMode,
            SubmissionPayload,
        },
    },
};

const INQUIRY_REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

const QUOTE_REQUIRED: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

/// Fields that must be filled in for `mode`.
pub fn required_fields(mode: SubmissionMode) -> &'static [Field] {
    match mode {
        SubmissionMode::Inquiry => &INQUIRY_REQUIRED,
        SubmissionMode::Quote => &QUOTE_REQUIRED,
    }
}

/// Required fields for `mode` that are blank on `form`.
pub fn missing_fields(mode: SubmissionMode, form: &ContactForm) -> Vec<Field> {
    required_fields(mode)
        .iter()
        .copied()
        .filter(|field| form.text(*field).is_none())
        .collect()
}

/// Build the payload for the current basket and form.
///
/// # Errors
///
/// Returns [`SubmissionError::MissingFields`] naming every blank required
/// field for the selected mode.
pub fn reconcile(
    items: &[BasketItem],
    form: &ContactForm,
) -> Result<SubmissionPayload, SubmissionError> {
    let mode = SubmissionMode::for_basket(items);
    let missing = missing_fields(mode, form);

    if !missing.is_empty() {
        return Err(SubmissionError::MissingFields(missing));
    }

    let required = |field| form.owned_text(field).unwrap_or_default();

    let payload = match mode {
        SubmissionMode::Inquiry => SubmissionPayload::Inquiry(InquiryPayload {
            name: required(Field::Name),
            email: required(Field::Email),
            phone: form.owned_text(Field::Phone),
            company: form.owned_text(Field::Company),
            message: required(Field::Message),
            source: InquirySource::ContactForm,
        }),
        SubmissionMode::Quote => SubmissionPayload::Quote(QuotePayload {
            name: required(Field::Name),
            email: required(Field::Email),
            phone: required(Field::Phone),
            company: form.owned_text(Field::Company),
            event_type_id: form.event_type_id,
            event_date: form.event_date,
            event_location: form.owned_text(Field::EventLocation),
            guest_count: form.guest_count,
            items: items.iter().map(QuoteLineItem::from).collect(),
            message: required(Field::Message),
        }),
    };

    Ok(payload)
}
