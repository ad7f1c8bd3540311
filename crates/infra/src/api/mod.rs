//! SmartPath API access layer
//!
//! One call flows leaf-first through these pieces:
//!
//! - [`TokenStore`] supplies the bearer credential
//! - [`RequestBuilder`] turns a [`RequestDescriptor`] into a wire request
//! - [`TimeoutGuard`] runs the [`Transport`] under the category deadline
//! - [`normalize`] turns the raw response into a payload or an `ApiError`
//!
//! [`ApiClient`] composes them; the facades in [`endpoints`] map each
//! feature operation onto exactly one client call.

pub mod client;
pub mod endpoints;
pub mod normalize;
pub mod request;
pub mod timeout;
pub mod token_store;
pub mod transport;

pub use client::{ApiClient, ApiClientBuilder};
pub use endpoints::{
    AuthApi, CareerApi, ChatApi, FlashcardsApi, HealthApi, InsightsApi, MathApi, PerformanceApi,
    RelationshipsApi, ReportsApi, SmartPathApi, StudyPlansApi,
};
pub use normalize::{decode, normalize, Envelope, RawResponse};
pub use request::{
    FilePart, MultipartForm, QueryValue, RequestBody, RequestBuilder, RequestDescriptor, WireBody,
    WireRequest,
};
pub use timeout::{TimeoutCategory, TimeoutGuard, TimeoutPolicy};
pub use token_store::TokenStore;
pub use transport::Transport;
