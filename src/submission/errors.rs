//! Submission errors.

use thiserror::Error;

use crate::submission::form::Field;

/// Failures reported by an outbound submission channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The receiving side answered but refused the request.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The receiving side could not be reached.
    #[error("submission channel unreachable: {0}")]
    Unreachable(String),
}

/// Errors from a submission attempt. None of them mutate the basket or the
/// contact form.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Required fields for the current mode are blank.
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<Field>),

    /// Another submission from the same screen has not finished yet.
    #[error("a submission is already in flight")]
    InFlight,

    /// The outbound channel failed.
    #[error("failed to send submission")]
    Channel(#[from] ChannelError),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn missing_fields_message_lists_fields() {
        let error = SubmissionError::MissingFields(vec![Field::Phone, Field::Message]);

        assert_eq!(error.to_string(), "missing required fields: phone, message");
    }

    #[test]
    fn channel_error_is_kept_as_source() {
        let error = SubmissionError::from(ChannelError::Unreachable("timed out".to_string()));

        assert_eq!(
            error.source().map(ToString::to_string),
            Some("submission channel unreachable: timed out".to_string())
        );
    }
}
