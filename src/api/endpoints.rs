use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::models::PhotoId;
use crate::transport::{RequestDescriptor, ResponseType};

pub const LOCATION_PATH: &str = "/panorama/pano/getLocation";
pub const PANO_PATH: &str = "/panorama/pano/getPano";
pub const DETAIL_BASE_PATH: &str = "/panorama/pano";

/// How a photo id is written into a URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdEncoding {
    /// Concatenate the id verbatim.
    #[default]
    Raw,
    /// Form-encode query values and percent-encode path segments.
    Percent,
}

impl IdEncoding {
    /// Percent mode refuses `.` and `..`: URL parsers resolve them (escaped or not) as dot
    /// segments, which would send the detail request to a different path.
    pub fn accepts(self, id: &PhotoId) -> bool {
        match (self, id) {
            (IdEncoding::Percent, PhotoId::Text(text)) => text != "." && text != "..",
            _ => true,
        }
    }

    pub fn query_value(self, id: &PhotoId) -> String {
        match self {
            IdEncoding::Raw => id.to_string(),
            IdEncoding::Percent => form_urlencoded::byte_serialize(id.to_string().as_bytes()).collect(),
        }
    }

    pub fn path_segment(self, id: &PhotoId) -> String {
        match self {
            IdEncoding::Raw => id.to_string(),
            // Form encoding escapes every reserved byte; only the space needs a path-safe form.
            IdEncoding::Percent => form_urlencoded::byte_serialize(id.to_string().as_bytes())
                .collect::<String>()
                .replace('+', "%20"),
        }
    }
}

pub fn photo_locations() -> RequestDescriptor {
    RequestDescriptor::get(LOCATION_PATH)
}

pub fn pano(id: &PhotoId, encoding: IdEncoding) -> RequestDescriptor {
    RequestDescriptor::get(format!("{}?id={}", PANO_PATH, encoding.query_value(id)))
        .with_response_type(ResponseType::Blob)
}

pub fn pano_detail(id: &PhotoId, encoding: IdEncoding) -> RequestDescriptor {
    RequestDescriptor::get(format!("{}/{}", DETAIL_BASE_PATH, encoding.path_segment(id)))
}
