// venue-table/src/http.rs
// Venue source - network fetch of the venue list

use crate::{ClientConfig, FetchError, FetchResult};
use async_trait::async_trait;
use reqwest::Client;
use shared::Venue;

/// Where the renderer gets its venues from
#[async_trait]
pub trait VenueSource: Send + Sync {
    /// URL shown to the user when the fetch fails
    fn endpoint(&self) -> &str;

    /// Fetch the full venue list in server order.
    ///
    /// A `null` body is treated as an empty list.
    async fn fetch_venues(&self) -> FetchResult<Vec<Venue>>;
}

/// HTTP venue source backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkVenueSource {
    client: Client,
    endpoint: String,
}

impl NetworkVenueSource {
    /// Create a new source from configuration
    pub fn new(config: &ClientConfig) -> FetchResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    async fn handle_response(response: reqwest::Response) -> FetchResult<Vec<Venue>> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let venues: Option<Vec<Venue>> = serde_json::from_slice(&body)?;
        Ok(venues.unwrap_or_default())
    }
}

#[async_trait]
impl VenueSource for NetworkVenueSource {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_venues(&self) -> FetchResult<Vec<Venue>> {
        tracing::debug!(endpoint = %self.endpoint, "Requesting venues");
        let response = self.client.get(&self.endpoint).send().await?;
        Self::handle_response(response).await
    }
}
