//! Data models
//!
//! Shapes returned by the venues API (`GET /api/venues`).
//! Every field is optional: the upstream API dumps database rows as-is.

pub mod column;
pub mod venue;

// Re-exports
pub use column::*;
pub use venue::*;
