//! Distance Resolver: one GET to the route page per lookup, no retries.

use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::error::LookupError;
use crate::extract::extract_distance;

/// Route page queried by default.
pub const DEFAULT_DISTANCE_URL: &str = "https://poisk-vagonov.ru/route.php";

/// Turns origin stations and a destination into a distance text.
#[async_trait]
pub trait DistanceResolver: Send + Sync {
    /// Resolves the distance. Failures come back as user-facing placeholder text, never as errors.
    async fn resolve(&self, stations: &[String], destination: &str) -> String;
}

/// [`DistanceResolver`] backed by the route web page.
#[derive(Debug, Clone)]
pub struct HttpDistanceResolver {
    client: reqwest::Client,
    url: String,
}

impl HttpDistanceResolver {
    /// Creates a resolver for the given route page URL with a default HTTP client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Creates a resolver that shares an existing HTTP client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the route page and extracts the distance.
    ///
    /// Query parameters: `from` holds the stations joined by `\n`, `to` the destination.
    #[instrument(skip(self, stations), fields(url = %self.url, stations = stations.len()))]
    pub async fn lookup(&self, stations: &[String], destination: &str) -> Result<String, LookupError> {
        let from = stations.join("\n");
        let request_error = |source: reqwest::Error| LookupError::Request {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.url)
            .query(&[("from", from.as_str()), ("to", destination)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(request_error)?;

        let body = response.text().await.map_err(request_error)?;

        extract_distance(&body).ok_or(LookupError::DistanceNotFound)
    }
}

#[async_trait]
impl DistanceResolver for HttpDistanceResolver {
    async fn resolve(&self, stations: &[String], destination: &str) -> String {
        match self.lookup(stations, destination).await {
            Ok(distance) => {
                info!(
                    destination = %destination,
                    distance = %distance,
                    "Distance resolved"
                );
                distance
            }
            Err(e) => {
                match &e {
                    LookupError::Request { url, source } => {
                        error!(url = %url, error = %source, "Route page request failed");
                    }
                    LookupError::DistanceNotFound => {
                        error!(url = %self.url, destination = %destination, "Distance element not found on the page");
                    }
                }
                e.user_message().to_string()
            }
        }
    }
}
