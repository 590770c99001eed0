// Core Client Implementation

use crate::types::*;
use reqwest::{header, Client as HttpClient};
use std::time::Duration;
use url::Url;

const SCRAPE_PATH: &str = "/api/hotels/scrape";
const SAVE_PATH: &str = "/api/hotels";

/// Client for the hotel scraping and persistence service.
///
/// Wraps the two remote operations (`fetch_hotel`, `save_hotel`) behind a
/// stable interface: inputs are normalized, every expected failure mode
/// (network, malformed response, server rejection) comes back as a
/// [`HotelError`] instead of a panic, and the client holds no state between
/// calls. The base URL is injected at construction so tests can point the
/// client at a mock endpoint.
#[derive(Clone)]
pub struct HotelDataClient {
    pub(crate) http_client: HttpClient,
    pub base_url: String, // Made public for testing
}

impl HotelDataClient {
    /// Create a new client pointed at the given endpoint root.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: build_http_client(Duration::from_secs(30)),
            base_url: base_url.into(),
        }
    }

    /// Set the transport timeout for both operations.
    ///
    /// Timeouts live at the transport layer; the operations themselves
    /// impose none.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http_client = build_http_client(timeout);
        self
    }

    /// Fetch scraped data for a hotel by name.
    ///
    /// Issues `GET <base>/api/hotels/scrape?hotel_name=<name>` and returns
    /// the record exactly as the server reported it. The review score is not
    /// coerced here; display code may want the raw value, and coercion
    /// happens on the save path. Empty names are not rejected locally, the
    /// remote service decides what to do with them.
    pub async fn fetch_hotel(&self, name: &str) -> HotelResult<Hotel> {
        self.fetch_hotel_inner(name).await.map_err(|err| {
            log::error!("Error fetching hotel {:?}: {}", name, err);
            err
        })
    }

    async fn fetch_hotel_inner(&self, name: &str) -> HotelResult<Hotel> {
        let endpoint = self.endpoint(SCRAPE_PATH)?;
        log::debug!("Fetching hotel data for {:?} from {}", name, endpoint);

        let response = self
            .http_client
            .get(endpoint)
            .query(&[("hotel_name", name)])
            .send()
            .await?;

        let response = self.handle_error_response(response).await?;

        // Keep the raw body around: it is the diagnostic record of the
        // response, and the source text for parse failures.
        let body = response.text().await?;
        log::debug!("Scrape response: {}", body);

        serde_json::from_str::<Hotel>(&body).map_err(|e| HotelError::ParseError {
            message: e.to_string(),
            source_text: Some(body),
        })
    }

    /// Submit a hotel record to the persistence endpoint.
    ///
    /// The submission contains exactly `name`, `address`, `description` and
    /// `review` coerced to a floating-point number. If the review cannot be
    /// coerced the operation fails fast with a `ValidationError` and no
    /// network request is made.
    pub async fn save_hotel(&self, hotel: &Hotel) -> HotelResult<SaveAck> {
        self.save_hotel_inner(hotel).await.map_err(|err| {
            log::error!("Error saving hotel {:?}: {}", hotel.name, err);
            err
        })
    }

    async fn save_hotel_inner(&self, hotel: &Hotel) -> HotelResult<SaveAck> {
        let submission = hotel.to_submission()?;

        let endpoint = self.endpoint(SAVE_PATH)?;
        log::debug!("Saving hotel {:?} to {}", submission.name, endpoint);

        let response = self
            .http_client
            .post(endpoint)
            .json(&submission)
            .send()
            .await?;

        let response = self.handle_error_response(response).await?;

        let ack = response.json::<SaveAck>().await?;
        log::debug!("Save acknowledged: {:?}", ack.message);
        Ok(ack)
    }

    /// Resolve a request URL against the configured base.
    ///
    /// A malformed base URL surfaces here as a `ClientError`, before any
    /// network activity.
    fn endpoint(&self, path: &str) -> HotelResult<Url> {
        let base = Url::parse(&self.base_url).map_err(|e| HotelError::ClientError {
            message: format!("invalid base URL {:?}: {}", self.base_url, e),
        })?;
        base.join(path).map_err(|e| HotelError::ClientError {
            message: format!("invalid request path {:?}: {}", path, e),
        })
    }

    /// Map a non-success response to `ServerError`, capturing the status and
    /// any error body for diagnostics.
    async fn handle_error_response(
        &self,
        response: reqwest::Response,
    ) -> HotelResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.ok().filter(|b| !b.is_empty());

        Err(HotelError::ServerError { status, body })
    }
}

fn build_http_client(timeout: Duration) -> HttpClient {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    HttpClient::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}
