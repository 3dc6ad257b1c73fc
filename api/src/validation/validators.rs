//! Field validators for the barcode endpoint's query parameters.

use shared::color::HexColor;
use shared::models::ImageType;
use shared::units::DEFAULT_DIMENSION_MM;

pub const COLOR_MESSAGE: &str =
    "Foreground and background colors must be valid hex RRGGBB or CCMMYYKK values.";
pub const DIMENSION_FORMAT_MESSAGE: &str = "Height and width must be valid numbers.";
pub const DIMENSION_RANGE_MESSAGE: &str = "Height and width must be numbers greater than zero.";
pub const IMAGE_TYPE_MESSAGE: &str = "Image type must be either png or svg.";

/// Dimension failures keep format and range problems apart so callers can
/// tell a malformed number from an out-of-range one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    NotANumber,
    NotPositive,
}

impl std::fmt::Display for DimensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => f.write_str(DIMENSION_FORMAT_MESSAGE),
            Self::NotPositive => f.write_str(DIMENSION_RANGE_MESSAGE),
        }
    }
}

impl std::error::Error for DimensionError {}

pub fn validate_color(value: &str) -> Result<HexColor, String> {
    HexColor::parse(value).map_err(|_| COLOR_MESSAGE.to_string())
}

/// Parse a millimeter dimension; a missing value defaults to one inch.
/// Non-finite values count as out of range, not as parse failures, since the
/// float parser accepted them.
pub fn parse_dimension(raw: Option<&str>) -> Result<f64, DimensionError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_DIMENSION_MM);
    };
    let value: f64 = raw.parse().map_err(|_| DimensionError::NotANumber)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(DimensionError::NotPositive);
    }
    Ok(value)
}

/// Parse the requested output format; missing values default to PNG.
pub fn parse_image_type(raw: Option<&str>) -> Result<ImageType, String> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(ImageType::Png);
    };
    ImageType::from_key(&raw.to_ascii_lowercase()).ok_or_else(|| IMAGE_TYPE_MESSAGE.to_string())
}
