use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::endpoints::{self, IdEncoding};
use super::models::{PanoramaImage, PhotoDetail, PhotoId, PhotoLocations};
use super::ApiError;
use crate::config::ApiConfig;
use crate::transport::{HttpTransport, RequestDescriptor, ResponseBody, Transport, TransportError};

/// Client for the panorama photo endpoints. Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct PanoramaApiClient {
    transport: Arc<dyn Transport>,
    id_encoding: IdEncoding,
}

impl PanoramaApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            id_encoding: IdEncoding::default(),
        }
    }

    /// Builds a client over an [`HttpTransport`] configured from `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)).with_id_encoding(config.id_encoding))
    }

    pub fn with_id_encoding(mut self, id_encoding: IdEncoding) -> Self {
        self.id_encoding = id_encoding;
        self
    }

    pub fn id_encoding(&self) -> IdEncoding {
        self.id_encoding
    }

    /// Fetch the coordinates and address info of every panorama photo.
    pub async fn get_photo_data_list(&self) -> Result<PhotoLocations, ApiError> {
        let body = self.send(endpoints::photo_locations()).await?;
        Ok(PhotoLocations(json_payload(body)?))
    }

    /// Fetch the raw panorama image for `id`.
    pub async fn get_pano(&self, id: impl Into<PhotoId>) -> Result<PanoramaImage, ApiError> {
        let id = checked(id.into(), self.id_encoding)?;
        match self.send(endpoints::pano(&id, self.id_encoding)).await? {
            ResponseBody::Binary(bytes) => Ok(PanoramaImage::new(bytes)),
            other => Err(ApiError::UnexpectedBody {
                expected: "binary",
                found: other.kind(),
            }),
        }
    }

    /// Fetch the detail record for `id`.
    pub async fn get_pano_detail(&self, id: impl Into<PhotoId>) -> Result<PhotoDetail, ApiError> {
        let id = checked(id.into(), self.id_encoding)?;
        let body = self.send(endpoints::pano_detail(&id, self.id_encoding)).await?;
        Ok(PhotoDetail(json_payload(body)?))
    }

    async fn send(&self, descriptor: RequestDescriptor) -> Result<ResponseBody, ApiError> {
        debug!(url = %descriptor.url, method = ?descriptor.method, "panorama request");
        Ok(self.transport.request(descriptor).await?)
    }
}

fn checked(id: PhotoId, encoding: IdEncoding) -> Result<PhotoId, ApiError> {
    if id.is_blank() || !encoding.accepts(&id) {
        return Err(ApiError::InvalidIdentifier);
    }
    Ok(id)
}

fn json_payload(body: ResponseBody) -> Result<Value, ApiError> {
    match body {
        ResponseBody::Json(value) => Ok(value),
        ResponseBody::Text(text) => Ok(Value::String(text)),
        ResponseBody::Binary(_) => Err(ApiError::UnexpectedBody {
            expected: "json",
            found: "binary",
        }),
    }
}
