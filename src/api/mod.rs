//! Typed accessors for the panorama backend endpoints.

pub mod client;
pub mod endpoints;
pub mod models;

pub use client::PanoramaApiClient;
pub use endpoints::IdEncoding;
pub use models::{PanoramaImage, PhotoDetail, PhotoId, PhotoLocations};

use crate::transport::TransportError;

/// Error types for panorama API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failure reported by the transport, surfaced as is.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Photo identifier must not be empty")]
    InvalidIdentifier,

    #[error("Unexpected {found} response body, expected {expected}")]
    UnexpectedBody {
        expected: &'static str,
        found: &'static str,
    },
}
