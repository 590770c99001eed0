//! # hotel-data-rs: an async client for a hotel scraping and persistence API
//!
//! This crate wraps a remote hotel-data service behind a small, stable
//! interface: look up a hotel by name against a scraping endpoint, hold the
//! normalized result, and submit it to a persistence endpoint. Every
//! expected failure mode (bad input, transport failure, server rejection,
//! malformed response) comes back as a distinct [`HotelError`] so callers
//! can present an accurate message.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use hotel_data_rs::HotelDataClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HotelDataClient::new("http://localhost:8000");
//!
//!     // Look the hotel up against the scraping endpoint
//!     let hotel = client.fetch_hotel("Grand Hotel").await?;
//!     println!("{}: {}", hotel.name, hotel.address);
//!
//!     // Submit it for persistence; the review score is coerced to a
//!     // number here, not at fetch time
//!     let ack = client.save_hotel(&hotel).await?;
//!     println!("{:?}", ack.message);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod types;
pub mod utils;
pub mod workflow;

// Re-export core components
pub use client::HotelDataClient;
pub use types::{Hotel, HotelError, HotelResult, HotelSubmission, ReviewScore, SaveAck};
pub use workflow::{HotelWorkflow, WorkflowState};

use utils::StringValidator;

// Entry point functions
pub fn new_client(base_url: impl Into<String>) -> HotelDataClient {
    HotelDataClient::new(base_url)
}

/// Create a client from the `HOTEL_API_BASE_URL` environment variable.
pub fn from_env() -> HotelResult<HotelDataClient> {
    match std::env::var("HOTEL_API_BASE_URL") {
        Ok(url) => {
            let url = StringValidator::not_empty(url, "HOTEL_API_BASE_URL")?;
            Ok(HotelDataClient::new(url))
        }
        Err(_) => Err(HotelError::ValidationError(
            "HOTEL_API_BASE_URL is not set".to_string(),
        )),
    }
}
