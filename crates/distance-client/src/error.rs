use thiserror::Error;

use crate::{DISTANCE_NOT_FOUND_TEXT, REQUEST_FAILED_TEXT};

#[derive(Error, Debug)]
pub enum LookupError {
    /// Connection error, non-success status, or unreadable body.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Distance element not found on the page")]
    DistanceNotFound,
}

impl LookupError {
    /// Text shown to the user in place of the distance.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::Request { .. } => REQUEST_FAILED_TEXT,
            LookupError::DistanceNotFound => DISTANCE_NOT_FOUND_TEXT,
        }
    }
}
