//! The transport seam for replaying origin requests.

use crate::{ReplayRequest, ReplayResponse};
use async_trait::async_trait;
use fresco_error::TransportResult;

/// Trait for transports that can replay origin requests.
///
/// This is the only capability the refresh coordinator requires from its
/// environment. Implementations own session state, encryption and retries
/// below this seam; the coordinator never retries on their behalf.
#[async_trait]
pub trait RequestSender: Send + Sync {
    /// Send one replay request and decode the response.
    ///
    /// # Arguments
    ///
    /// * `request` - The origin replay to perform
    ///
    /// # Returns
    ///
    /// The decoded response shape matching the request.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The transport cannot reach the server
    /// - The server rejects the request
    /// - The response cannot be decoded into a known shape
    async fn send(&self, request: ReplayRequest) -> TransportResult<ReplayResponse>;
}
