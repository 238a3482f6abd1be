//! Data models
//!
//! Records exchanged verbatim with the remote API. The client does not
//! enforce invariants beyond what is needed to render; all IDs are
//! server-issued strings.

pub mod activity;
pub mod booking;
pub mod dish;
pub mod partner;

// Re-exports
pub use activity::*;
pub use booking::*;
pub use dish::*;
pub use partner::*;
