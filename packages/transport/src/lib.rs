pub mod http;
pub mod response;

pub use http::{HttpTransport, TransportError};
pub use response::ApiResponse;

use async_trait::async_trait;
use mockall::automock;
use services::SubmissionFailure;

/// Sends form payloads to the backend.
///
/// Implementations map every failure onto the three submission failure kinds: no
/// response, rejection, or error status. Deciding whether a successful response is an
/// application-level rejection is left to the caller.
#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, SubmissionFailure>;
}

#[cfg(test)]
mod test_helpers;
