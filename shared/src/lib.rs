//! Shared types for the venue table
//!
//! Data model used by the renderer and by anything that produces venue
//! payloads (test fixtures, mock backends).

pub mod models;

// Re-exports
pub use models::{Column, EVENT_DATE_KEY, FieldValue, VENUE_COLUMNS, Venue};
pub use serde::{Deserialize, Serialize};
