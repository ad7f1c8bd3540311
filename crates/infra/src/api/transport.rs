//! Transport seam between the client and the network

use async_trait::async_trait;
use smartpath_domain::ApiError;

use super::normalize::RawResponse;
use super::request::WireRequest;

/// Sends one fully built request and returns the raw response.
///
/// Implementations report only transport failures (`ApiError::Network`);
/// non-2xx statuses come back as ordinary responses for the normalizer.
/// Dropping the returned future must abort the request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: WireRequest) -> Result<RawResponse, ApiError>;
}
