//! Trait abstraction for the relay to enable mocking in tests

use super::SubmitError;
use crate::state::FormData;
use async_trait::async_trait;

/// Something that can deliver a finished form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Deliver the form once. No retries.
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError>;
}
