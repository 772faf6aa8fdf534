//! Outbound submission channel.

use async_trait::async_trait;
use mockall::automock;

use crate::submission::{errors::ChannelError, payload::SubmissionPayload};

/// Delivers a submission to whoever handles inquiries and quotes. Transport
/// and serialization are up to the implementation.
#[automock]
#[async_trait]
pub trait SubmissionChannel: Send + Sync {
    /// Send one payload. `Ok` means the receiver acknowledged it.
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), ChannelError>;
}
