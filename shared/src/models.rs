use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::symbology::Symbology;

/// Output image format for a rendered barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Png,
    Svg,
}

impl ImageType {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A fully validated render request.
///
/// Built once per HTTP request by the validation layer and handed to the
/// render dispatcher; immutable afterwards. `code` has already been through
/// the symbology's normalization policy.
#[derive(Debug, Clone)]
pub struct BarcodeRequest {
    pub code: String,
    pub symbology: Symbology,
    pub image_type: ImageType,
    pub foreground: HexColor,
    pub background: HexColor,
    pub height_mm: f64,
    pub width_mm: f64,
}
