//! Render dispatcher: validated request in, image bytes out.
//!
//! Encoder selection is the closed table in [`crate::encode`]; serializer
//! selection switches on the requested image type. Both collaborators report
//! failures through [`RenderError`], which the HTTP layer maps to a 500.

use std::io::Cursor;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::drawing::Drawing;
use crate::encode::{self, DrawOptions, EncodeError};
use crate::models::{BarcodeRequest, ImageType};
use crate::units;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The symbology could not encode the normalized payload.
    #[error("{0}")]
    Encode(#[from] EncodeError),
    /// The serializer failed on an otherwise valid drawing.
    #[error("{0}")]
    Serialize(String),
}

/// Rendered image bytes plus the content type they should be served with.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Render a validated request to PNG or SVG bytes.
///
/// Identical requests always yield byte-identical output: encoding, pixel
/// rounding, and serialization are all deterministic.
pub fn render(request: &BarcodeRequest) -> Result<RenderResult, RenderError> {
    let opts = DrawOptions {
        width_mm: request.width_mm,
        height_mm: request.height_mm,
        foreground: request.foreground.clone(),
        background: request.background.clone(),
    };
    let drawing = encode::encoder_for(request.symbology).draw(&request.code, &opts)?;

    let bytes = match request.image_type {
        ImageType::Png => rasterize_png(&drawing)?,
        ImageType::Svg => emit_svg(&drawing).into_bytes(),
    };
    Ok(RenderResult {
        bytes,
        content_type: request.image_type.content_type(),
    })
}

/// Upper bound on rasterized pixel area (32 MP, 128 MiB of RGBA). Larger
/// drawings fail with a [`RenderError::Serialize`] before any allocation.
const MAX_PNG_PIXELS: u64 = 32_000_000;

fn rasterize_png(drawing: &Drawing) -> Result<Vec<u8>, RenderError> {
    let width = units::mm_to_px(drawing.width_mm);
    let height = units::mm_to_px(drawing.height_mm);
    if u64::from(width) * u64::from(height) > MAX_PNG_PIXELS {
        return Err(RenderError::Serialize(format!(
            "requested raster of {width}x{height} px exceeds the {MAX_PNG_PIXELS} pixel limit"
        )));
    }
    let mut image = RgbaImage::from_pixel(width, height, Rgba(drawing.background.rgba()));

    let foreground = Rgba(drawing.foreground.rgba());
    for rect in &drawing.rects {
        let x0 = (rect.x * f64::from(width)).round() as u32;
        let x1 = (((rect.x + rect.w) * f64::from(width)).round() as u32).min(width);
        let y0 = (rect.y * f64::from(height)).round() as u32;
        let y1 = (((rect.y + rect.h) * f64::from(height)).round() as u32).min(height);
        for y in y0..y1 {
            for x in x0..x1 {
                image.put_pixel(x, y, foreground);
            }
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(|err| RenderError::Serialize(err.to_string()))?;
    Ok(cursor.into_inner())
}

fn emit_svg(drawing: &Drawing) -> String {
    let width = drawing.width_mm;
    let height = drawing.height_mm;
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{width:.3}mm\" height=\"{height:.3}mm\" viewBox=\"0 0 {width:.3} {height:.3}\" stroke=\"none\">\n",
    ));
    out.push_str(&format!(
        "\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"{}/>\n",
        drawing.background.css_rgb(),
        opacity_attr(drawing.background.opacity()),
    ));
    let fill = drawing.foreground.css_rgb();
    let fill_opacity = opacity_attr(drawing.foreground.opacity());
    for rect in &drawing.rects {
        out.push_str(&format!(
            "\t<rect x=\"{:.3}\" y=\"{:.3}\" width=\"{:.3}\" height=\"{:.3}\" fill=\"{fill}\"{fill_opacity}/>\n",
            rect.x * width,
            rect.y * height,
            rect.w * width,
            rect.h * height,
        ));
    }
    out.push_str("</svg>\n");
    out
}

fn opacity_attr(opacity: Option<f64>) -> String {
    match opacity {
        Some(value) => format!(" fill-opacity=\"{value:.3}\""),
        None => String::new(),
    }
}
