//! Contact form fields

use std::fmt;

use jiff::civil::Date;

use crate::uuids::TypedUuid;

/// Event type record, owned by the remote data store.
#[derive(Debug)]
pub struct EventType;

/// Event type id
pub type EventTypeId = TypedUuid<EventType>;

/// The values a visitor has entered on the contact screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Visitor name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,

    /// Company name
    pub company: String,

    /// Free-text message
    pub message: String,

    /// Kind of event being planned
    pub event_type_id: Option<EventTypeId>,

    /// Date of the event
    pub event_date: Option<Date>,

    /// Venue or location
    pub event_location: String,

    /// Expected number of guests
    pub guest_count: Option<u32>,
}

impl ContactForm {
    /// Empty every field, as after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The trimmed value of a text field, or `None` if it is blank.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Message => &self.message,
            Field::EventLocation => &self.event_location,
        };

        let trimmed = value.trim();

        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub(crate) fn owned_text(&self, field: Field) -> Option<String> {
        self.text(field).map(str::to_string)
    }
}

/// Text fields on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Visitor name
    Name,
    /// Contact email
    Email,
    /// Contact phone
    Phone,
    /// Company name
    Company,
    /// Free-text message
    Message,
    /// Venue or location
    EventLocation,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Message => "message",
            Self::EventLocation => "event_location",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_reads_as_none() {
        let form = ContactForm {
            name: "  Ada  ".to_string(),
            phone: "   ".to_string(),
            ..ContactForm::default()
        };

        assert_eq!(form.text(Field::Name), Some("Ada"));
        assert_eq!(form.text(Field::Phone), None);
        assert_eq!(form.text(Field::Company), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            guest_count: Some(120),
            event_date: Some(jiff::civil::date(2026, 6, 20)),
            ..ContactForm::default()
        };

        form.reset();

        assert_eq!(form, ContactForm::default());
    }
}
