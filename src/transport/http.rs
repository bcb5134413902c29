use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use super::{Method, RequestDescriptor, ResponseBody, ResponseType, Transport, TransportError};
use crate::config::ApiConfig;

/// `reqwest`-backed transport that owns the base URL, timeout and user agent.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        Url::parse(&config.base_url)?;

        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_seconds));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends `path` to the base, keeping any context path such as `/prod-api`.
    fn resolve(&self, path: &str) -> Result<Url, TransportError> {
        let joined = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        Ok(Url::parse(&joined)?)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn request(&self, descriptor: RequestDescriptor) -> Result<ResponseBody, TransportError> {
        let url = self.resolve(&descriptor.url)?;
        let method = match descriptor.method {
            Method::Get => reqwest::Method::GET,
        };

        info!("{} {}", method, url);
        let response = self.client.request(method, url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            warn!("{} answered {}: {}", url, status, message);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = match descriptor.response_type {
            Some(ResponseType::Blob) => ResponseBody::Binary(response.bytes().await?.to_vec()),
            Some(ResponseType::Text) => ResponseBody::Text(response.text().await?),
            Some(ResponseType::Json) => ResponseBody::Json(serde_json::from_str(&response.text().await?)?),
            None => {
                let text = response.text().await?;
                match serde_json::from_str(&text) {
                    Ok(value) => ResponseBody::Json(value),
                    Err(_) => ResponseBody::Text(text),
                }
            }
        };

        debug!("{} returned a {} body", url, body.kind());
        Ok(body)
    }
}
