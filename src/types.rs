// Core types and errors

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::utils::parse_review;

/// The result type used throughout the hotel data client
pub type HotelResult<T> = Result<T, HotelError>;

#[derive(Debug, Error, Clone)]
pub enum HotelError {
    /// Bad local input. No network request was attempted.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The request never reached the server or no response was received
    /// (connection failure, timeout, DNS failure).
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },

    /// The server responded with a non-success status.
    #[error("Server returned error: {status}")]
    ServerError {
        status: u16,
        body: Option<String>,
    },

    /// The outgoing request could not be constructed or serialized.
    #[error("Client error: {message}")]
    ClientError { message: String },

    /// The server responded with a success status but the body could not
    /// be decoded as the expected record.
    #[error("Failed to parse response: {message}")]
    ParseError {
        message: String,
        source_text: Option<String>,
    },
}

/// Convert reqwest::Error into our taxonomy.
///
/// Builder errors mean the request was never valid; decode errors mean a
/// response arrived but its body was not what we expected; everything else
/// is a transport-level failure.
impl From<reqwest::Error> for HotelError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            HotelError::ClientError {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            HotelError::ParseError {
                message: err.to_string(),
                source_text: None,
            }
        } else {
            HotelError::NetworkError {
                message: err.to_string(),
                source: Some(Arc::new(err) as Arc<dyn std::error::Error + Send + Sync>),
            }
        }
    }
}

impl HotelError {
    /// Status code of a server rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True if no network request was issued for this failure.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ClientError { .. })
    }
}

/// A review score as reported by the scrape source.
///
/// The upstream scraper may deliver the score either as a JSON number or as
/// text (possibly with a comma decimal separator). The raw form is kept
/// until save time; coercion happens in [`ReviewScore::as_f64`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ReviewScore {
    Number(f64),
    Text(String),
}

impl ReviewScore {
    /// Coerce the score to a floating-point number.
    ///
    /// Textual scores are trimmed and may use a comma as the decimal
    /// separator. Non-numeric text is a `ValidationError`, never a default.
    pub fn as_f64(&self) -> HotelResult<f64> {
        match self {
            ReviewScore::Number(n) => Ok(*n),
            ReviewScore::Text(s) => parse_review(s),
        }
    }
}

/// A hotel record as reported by the scrape endpoint.
///
/// `address` and `description` may be empty if unknown. `review` is kept
/// exactly as the server reported it; it is only coerced to a number when
/// the record is submitted for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub review: Option<ReviewScore>,
}

impl Hotel {
    /// Build the record submitted to the persistence endpoint.
    ///
    /// Fails with `ValidationError("invalid review value")` if the review
    /// is missing or cannot be coerced to a number.
    pub fn to_submission(&self) -> HotelResult<HotelSubmission> {
        let review = self
            .review
            .as_ref()
            .ok_or_else(|| HotelError::ValidationError("invalid review value".to_string()))?
            .as_f64()?;

        Ok(HotelSubmission {
            name: self.name.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
            review,
        })
    }
}

/// The wire record for the persistence endpoint. `review` is strictly numeric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelSubmission {
    pub name: String,
    pub address: String,
    pub description: String,
    pub review: f64,
}

/// Server acknowledgment of a save.
///
/// The backend replies with a message and the stored record, but both are
/// tolerated as absent so an opaque success body still counts as saved.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub hotel: Option<HotelSubmission>,
}
