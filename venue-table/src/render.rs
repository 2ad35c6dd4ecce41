// venue-table/src/render.rs
// Venue table renderer - fetch once, then fill the container

use crate::dom::{Document, Element, Node};
use crate::format::CellFormatter;
use crate::http::VenueSource;
use crate::{ClientConfig, FetchError, FetchResult, PageError};
use shared::{Column, VENUE_COLUMNS, Venue};

/// Notice shown when the API returns no venues
pub const NO_VENUES_TEXT: &str = "No venues found.";

const TABLE_CLASS: &str = "min-w-full bg-white border-collapse";
const THEAD_CLASS: &str = "bg-gray-800 text-white";
const TBODY_CLASS: &str = "text-gray-700";
const ROW_CLASS: &str = "border-b";
const CELL_CLASS: &str = "py-2 px-4 border";

/// Renderer lifecycle.
///
/// `Idle -> Loading -> {Rendered | EmptyRendered | ErrorRendered}`; all three
/// outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Loading,
    Rendered,
    EmptyRendered,
    ErrorRendered,
}

impl RenderState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Rendered | Self::EmptyRendered | Self::ErrorRendered
        )
    }
}

/// Build the venue table: one header row from `columns`, one body row per venue
pub fn build_table(venues: &[Venue], columns: &[Column], formatter: &CellFormatter) -> Element {
    let header_row = columns.iter().fold(Element::new("tr"), |row, column| {
        row.with_child(
            Element::new("th")
                .with_class(CELL_CLASS)
                .with_text(column.label),
        )
    });
    let thead = Element::new("thead")
        .with_class(THEAD_CLASS)
        .with_child(header_row);

    let mut tbody = Element::new("tbody").with_class(TBODY_CLASS);
    for venue in venues {
        let mut row = Element::new("tr").with_class(ROW_CLASS);
        for column in columns {
            let value = venue.get(column.key);
            row.push(
                Element::new("td")
                    .with_class(CELL_CLASS)
                    .with_text(formatter.format(column.key, value.as_ref())),
            );
        }
        tbody.push(row);
    }

    Element::new("table")
        .with_class(TABLE_CLASS)
        .with_child(thead)
        .with_child(tbody)
}

/// Paragraph shown for an empty venue list
pub fn empty_notice() -> Element {
    Element::new("p")
        .with_class("text-gray-500")
        .with_text(NO_VENUES_TEXT)
}

/// Paragraph shown when the fetch failed
pub fn error_message(endpoint: &str, err: &FetchError) -> Element {
    Element::new("p")
        .with_class("text-red-500")
        .with_text(format!(
            "Error: Check backend at {}. Details: {}",
            endpoint, err
        ))
}

/// Replace the container's content with the outcome of a fetch
pub fn render_outcome(
    container: &mut Element,
    outcome: FetchResult<Vec<Venue>>,
    endpoint: &str,
    columns: &[Column],
    formatter: &CellFormatter,
) -> RenderState {
    let (child, state) = match outcome {
        Ok(venues) if venues.is_empty() => {
            tracing::info!("No venues returned");
            (empty_notice(), RenderState::EmptyRendered)
        }
        Ok(venues) => {
            tracing::info!(count = venues.len(), "Rendered venue table");
            (
                build_table(&venues, columns, formatter),
                RenderState::Rendered,
            )
        }
        Err(err) => {
            tracing::error!(endpoint = %endpoint, error = %err, "Failed to load venues");
            (error_message(endpoint, &err), RenderState::ErrorRendered)
        }
    };
    container.replace_children(vec![Node::Element(child)]);
    state
}

/// Fetches venues once and renders them into the page's container
pub struct VenueTableRenderer<S: VenueSource> {
    source: S,
    container_id: String,
    columns: &'static [Column],
    formatter: CellFormatter,
    state: RenderState,
}

impl<S: VenueSource> VenueTableRenderer<S> {
    pub fn new(source: S, config: &ClientConfig) -> Self {
        Self {
            source,
            container_id: config.container_id.clone(),
            columns: &VENUE_COLUMNS,
            formatter: CellFormatter::from_config(config),
            state: RenderState::Idle,
        }
    }

    /// Override the column layout
    pub fn with_columns(mut self, columns: &'static [Column]) -> Self {
        self.columns = columns;
        self
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the single fetch and render pass.
    ///
    /// Only an idle renderer issues a request; later calls leave the page
    /// untouched and return the terminal state. A missing container is a
    /// page fault and is reported before any request goes out.
    pub async fn load(&mut self, doc: &mut Document) -> Result<RenderState, PageError> {
        if self.state != RenderState::Idle {
            tracing::warn!(state = ?self.state, "Renderer already ran, skipping");
            return Ok(self.state);
        }
        if doc.get_element_by_id(&self.container_id).is_none() {
            return Err(PageError::ContainerNotFound(self.container_id.clone()));
        }

        self.state = RenderState::Loading;
        let outcome = self.source.fetch_venues().await;

        let container = doc.container_mut(&self.container_id)?;
        self.state = render_outcome(
            container,
            outcome,
            self.source.endpoint(),
            self.columns,
            &self.formatter,
        );
        Ok(self.state)
    }
}
