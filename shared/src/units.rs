//! Physical unit conversions. Pure functions only; validation of the raw
//! inputs lives with the request validators.

/// Default edge length when a dimension is omitted: one inch.
pub const DEFAULT_DIMENSION_MM: f64 = 25.4;

/// Fixed raster scale for PNG output.
pub const PX_PER_MM: f64 = 8.0;

/// Pixel edge for a physical length at the fixed raster scale, never zero.
pub fn mm_to_px(mm: f64) -> u32 {
    (mm * PX_PER_MM).round().max(1.0) as u32
}
