//! Conversion of raw query parameters into a validated `BarcodeRequest`.

use serde::Deserialize;

use shared::models::BarcodeRequest;
use shared::symbology::{normalize_code, SymbologyRegistry};

use super::extractors::{ValidationBuilder, ValidationError};
use super::validators::{parse_dimension, parse_image_type, validate_color};

const DEFAULT_FOREGROUND: &str = "000000";
const DEFAULT_BACKGROUND: &str = "ffffff";

/// Raw query mirror of the barcode endpoint. Every field is optional; the
/// defaults and grammars live in the validators, not in serde.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BarcodeParams {
    pub code: Option<String>,
    pub code_type: Option<String>,
    pub image_type: Option<String>,
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub height: Option<String>,
    pub width: Option<String>,
}

impl BarcodeParams {
    /// Validate every field independently and accumulate all failures; a
    /// request with a bad color and a bad dimension reports both. Code-type
    /// resolution cannot fail (unknown keys fall back to the registry
    /// default), and normalization runs after it because the policy depends
    /// on the symbology.
    pub fn into_request(
        self,
        registry: &SymbologyRegistry,
    ) -> Result<BarcodeRequest, ValidationError> {
        let mut builder = ValidationBuilder::new();

        let foreground = builder.capture(
            "foreground",
            validate_color(non_empty(self.foreground.as_deref()).unwrap_or(DEFAULT_FOREGROUND)),
        );
        let background = builder.capture(
            "background",
            validate_color(non_empty(self.background.as_deref()).unwrap_or(DEFAULT_BACKGROUND)),
        );
        let height_mm = builder.capture("height", parse_dimension(self.height.as_deref()));
        let width_mm = builder.capture("width", parse_dimension(self.width.as_deref()));
        let image_type = builder.capture("image_type", parse_image_type(self.image_type.as_deref()));

        let descriptor = registry.resolve(self.code_type.as_deref());
        let code = normalize_code(descriptor, self.code.as_deref());

        builder.finish()?;

        // Every capture succeeded once finish() returned Ok.
        match (foreground, background, height_mm, width_mm, image_type) {
            (
                Some(foreground),
                Some(background),
                Some(height_mm),
                Some(width_mm),
                Some(image_type),
            ) => Ok(BarcodeRequest {
                code,
                symbology: descriptor.symbology,
                image_type,
                foreground,
                background,
                height_mm,
                width_mm,
            }),
            _ => Err(ValidationError::single("request", "validation failed")),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
