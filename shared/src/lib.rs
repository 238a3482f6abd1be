//! Shared types for the partner dashboard
//!
//! Wire models and API DTOs exchanged verbatim with the fourtrip server,
//! used by both the HTTP client and the dashboard core.

pub mod client;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginIdentity, LoginReply, LoginRequest, RegisterReply, RegisterRequest};
pub use response::ApiEnvelope;
