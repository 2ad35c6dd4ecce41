//! Column Specification
//!
//! Fixed, ordered mapping from venue keys to table header labels.

/// One table column: the venue key it reads and the header it shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Key of the event-date field.
///
/// Not part of [`VENUE_COLUMNS`]; cells only get date formatting when a
/// column with this key is rendered.
pub const EVENT_DATE_KEY: &str = "upcoming_event_date";

/// Columns in display order
pub const VENUE_COLUMNS: [Column; 10] = [
    Column::new("name", "Venue"),
    Column::new("address", "Address"),
    Column::new("category", "Category"),
    Column::new("phone_number", "Phone Number"),
    Column::new("rating", "Rating"),
    Column::new("x_coordinate", "X Coordinate"),
    Column::new("y_coordinate", "Y Coordinate"),
    Column::new("website_url", "website"),
    Column::new("instagram", "Instagram"),
    Column::new("facebook", "Facebook"),
];
