//! Venue Table - render the venues API as an HTML table
//!
//! One GET to the venues endpoint, then the page's container element gets
//! either the venue table, a "no venues" notice, or an error paragraph.

pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod http;
pub mod logger;
pub mod render;

pub use config::{ClientConfig, DisplayZone};
pub use dom::{Document, Element, Node};
pub use error::{ConfigError, FetchError, FetchResult, PageError};
pub use format::{CELL_RULES, CellFormatter, CellRule};
pub use http::{NetworkVenueSource, VenueSource};
pub use render::{RenderState, VenueTableRenderer};

// Re-export shared types for convenience
pub use shared::{Column, EVENT_DATE_KEY, FieldValue, VENUE_COLUMNS, Venue};
