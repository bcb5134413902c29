use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies a panorama photo on the backend, either by number or by string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhotoId {
    Numeric(i64),
    Text(String),
}

impl PhotoId {
    /// True for empty text ids and, stricter than plain non-emptiness, for
    /// whitespace-only ones. Neither can name a photo, and both collapse the request path.
    pub fn is_blank(&self) -> bool {
        match self {
            PhotoId::Numeric(_) => false,
            PhotoId::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoId::Numeric(n) => write!(f, "{}", n),
            PhotoId::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for PhotoId {
    fn from(id: i64) -> Self {
        PhotoId::Numeric(id)
    }
}

impl From<i32> for PhotoId {
    fn from(id: i32) -> Self {
        PhotoId::Numeric(id.into())
    }
}

impl From<u32> for PhotoId {
    fn from(id: u32) -> Self {
        PhotoId::Numeric(id.into())
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        PhotoId::Text(id)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        PhotoId::Text(id.to_string())
    }
}

impl From<&String> for PhotoId {
    fn from(id: &String) -> Self {
        PhotoId::Text(id.clone())
    }
}

/// Photo coordinates and address metadata exactly as the backend returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoLocations(pub Value);

impl PhotoLocations {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Per-photo metadata record, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoDetail(pub Value);

impl PhotoDetail {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanoramaImage {
    bytes: Vec<u8>,
}

impl PanoramaImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
