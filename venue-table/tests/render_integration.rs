// venue-table/tests/render_integration.rs
// End-to-end: in-process backend -> renderer -> page

use axum::{Json, Router, http::StatusCode, routing::get};
use chrono::FixedOffset;
use serde_json::json;
use tokio::net::TcpListener;
use venue_table::{
    ClientConfig, DisplayZone, Document, NetworkVenueSource, RenderState, VENUE_COLUMNS,
    VenueTableRenderer,
};

/// Serve `router` on an ephemeral port, returning the venues URL
async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api/venues", addr)
}

fn config_for(endpoint: &str) -> ClientConfig {
    ClientConfig::new(endpoint)
        .with_display_zone(DisplayZone::Fixed(FixedOffset::east_opt(0).unwrap()))
        .with_timeout(10)
}

async fn render(config: &ClientConfig) -> (RenderState, Document) {
    let source = NetworkVenueSource::new(config).unwrap();
    let mut doc = Document::page_shell(&config.container_id);
    let mut renderer = VenueTableRenderer::new(source, config);
    let state = renderer.load(&mut doc).await.unwrap();
    (state, doc)
}

fn container_text(doc: &Document, config: &ClientConfig) -> String {
    doc.get_element_by_id(&config.container_id)
        .unwrap()
        .text_content()
}

fn has_table(doc: &Document, config: &ClientConfig) -> bool {
    !doc.get_element_by_id(&config.container_id)
        .unwrap()
        .descendants_by_tag("table")
        .is_empty()
}

#[tokio::test]
async fn test_renders_venue_rows_in_order() {
    let router = Router::new().route(
        "/api/venues",
        get(|| async {
            Json(json!([
                {
                    "id": 1,
                    "name": "Blue Note",
                    "address": "131 W 3rd St",
                    "category": "Jazz Club",
                    "phone_number": "+1 212-475-8592",
                    "rating": 4.6,
                    "x_coordinate": -73.9991,
                    "y_coordinate": 40.7309,
                    "website_url": "https://www.bluenotejazz.com",
                    "instagram": true,
                    "facebook": false,
                    "upcoming_event_date": "2025-06-01T20:00:00"
                },
                {
                    "id": 2,
                    "name": "Corner Bar",
                    "address": null,
                    "rating": 4.0
                }
            ]))
        }),
    );
    let config = config_for(&spawn_backend(router).await);

    let (state, doc) = render(&config).await;
    assert_eq!(state, RenderState::Rendered);

    let container = doc.get_element_by_id(&config.container_id).unwrap();
    let headers: Vec<_> = container
        .descendants_by_tag("th")
        .iter()
        .map(|th| th.text_content())
        .collect();
    let labels: Vec<_> = VENUE_COLUMNS.iter().map(|c| c.label).collect();
    assert_eq!(headers, labels);

    let tbody = container.descendants_by_tag("tbody")[0];
    let rows: Vec<Vec<String>> = tbody
        .child_elements()
        .map(|row| row.child_elements().map(|td| td.text_content()).collect())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        [
            "Blue Note",
            "131 W 3rd St",
            "Jazz Club",
            "+1 212-475-8592",
            "4.6",
            "-73.9991",
            "40.7309",
            "https://www.bluenotejazz.com",
            "Yes",
            "No",
        ]
    );
    assert_eq!(
        rows[1],
        [
            "Corner Bar", "N/A", "N/A", "N/A", "4", "N/A", "N/A", "N/A", "N/A", "N/A",
        ]
    );
}

#[tokio::test]
async fn test_empty_list_shows_notice() {
    let router = Router::new().route("/api/venues", get(|| async { Json(json!([])) }));
    let config = config_for(&spawn_backend(router).await);

    let (state, doc) = render(&config).await;
    assert_eq!(state, RenderState::EmptyRendered);
    assert_eq!(container_text(&doc, &config), "No venues found.");
    assert!(!has_table(&doc, &config));
}

#[tokio::test]
async fn test_null_body_shows_notice() {
    let router = Router::new().route(
        "/api/venues",
        get(|| async { Json(serde_json::Value::Null) }),
    );
    let config = config_for(&spawn_backend(router).await);

    let (state, doc) = render(&config).await;
    assert_eq!(state, RenderState::EmptyRendered);
    assert_eq!(container_text(&doc, &config), "No venues found.");
}

#[tokio::test]
async fn test_server_error_shows_status() {
    let router = Router::new().route(
        "/api/venues",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database is locked") }),
    );
    let endpoint = spawn_backend(router).await;
    let config = config_for(&endpoint);

    let (state, doc) = render(&config).await;
    assert_eq!(state, RenderState::ErrorRendered);
    assert_eq!(
        container_text(&doc, &config),
        format!(
            "Error: Check backend at {}. Details: Backend error: 500",
            endpoint
        )
    );
    assert!(!has_table(&doc, &config));
}

#[tokio::test]
async fn test_not_found_shows_status() {
    let router = Router::new();
    let config = config_for(&spawn_backend(router).await);

    let (state, doc) = render(&config).await;
    assert_eq!(state, RenderState::ErrorRendered);
    assert!(container_text(&doc, &config).ends_with("Backend error: 404"));
}

#[tokio::test]
async fn test_malformed_body_is_network_error() {
    let router = Router::new().route("/api/venues", get(|| async { "<html>oops</html>" }));
    let config = config_for(&spawn_backend(router).await);

    let (state, doc) = render(&config).await;
    assert_eq!(state, RenderState::ErrorRendered);
    let text = container_text(&doc, &config);
    assert!(text.starts_with("Error: Check backend at "));
    assert!(!text.contains("Backend error"));
    assert!(!has_table(&doc, &config));
}

#[tokio::test]
async fn test_connection_refused_shows_detail() {
    // Grab a free port, then close it so nothing is listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{}/api/venues", addr);
    let config = config_for(&endpoint);

    let (state, doc) = render(&config).await;
    assert_eq!(state, RenderState::ErrorRendered);

    let text = container_text(&doc, &config);
    let prefix = format!("Error: Check backend at {}. Details: ", endpoint);
    assert!(text.starts_with(&prefix));
    assert!(
        text.to_lowercase().contains("refused"),
        "missing cause in {text}"
    );
    assert!(!has_table(&doc, &config));
}

#[tokio::test]
async fn test_page_written_to_file() {
    let router = Router::new().route(
        "/api/venues",
        get(|| async { Json(json!([{ "name": "Tom & Jerry's" }])) }),
    );
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("venues.html");
    let config = config_for(&spawn_backend(router).await).with_output(&output);

    let (_, doc) = render(&config).await;
    doc.write_to(&config.output).unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<table class=\"min-w-full bg-white border-collapse\">"));
    assert!(html.contains("<td class=\"py-2 px-4 border\">Tom &amp; Jerry's</td>"));
}
