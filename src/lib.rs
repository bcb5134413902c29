pub mod api;
pub mod cli;
pub mod config;
pub mod logger;
pub mod transport;

pub use api::{ApiError, PanoramaApiClient};
pub use config::Settings;
pub use transport::{HttpTransport, RequestDescriptor, ResponseBody, Transport, TransportError};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
