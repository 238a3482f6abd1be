//! Partner Client - HTTP client for the fourtrip server
//!
//! Provides network-based HTTP calls to the partner-facing API.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::PartnerApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{LoginReply, LoginRequest, RegisterReply, RegisterRequest};
pub use shared::response::ApiEnvelope;
