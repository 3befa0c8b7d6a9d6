use std::error;
use std::fmt;
use std::sync::Arc;

pub mod client;
pub mod model;

pub use client::{DirectionsClient, Profile};

#[derive(Debug, Clone)]
pub enum DirectionsError {
    RequestError(Arc<reqwest::Error>),
    JsonError(Arc<serde_json::Error>),
    InvalidResponse {
        status_code: reqwest::StatusCode,
        url: String,
        response: Option<String>,
    },
}

impl error::Error for DirectionsError {}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DirectionsError::RequestError(e) => write!(f, "HTTP request error: {}", e),
            DirectionsError::JsonError(e) => write!(f, "JSON parse error: {}", e),
            DirectionsError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid Response ({}) {}: {}", status_code, url, text)
                }
                None => write!(f, "Invalid Response ({}) {}", status_code, url),
            },
        }
    }
}

impl From<reqwest::Error> for DirectionsError {
    fn from(e: reqwest::Error) -> Self {
        DirectionsError::RequestError(Arc::new(e))
    }
}

impl From<serde_json::Error> for DirectionsError {
    fn from(e: serde_json::Error) -> Self {
        DirectionsError::JsonError(Arc::new(e))
    }
}
