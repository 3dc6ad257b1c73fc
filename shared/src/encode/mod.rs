//! Symbology encoders: the drawing capability behind the render dispatcher.
//!
//! Each encoder turns an already-normalized payload into a [`Drawing`].
//! Dispatch is an explicit closed-enum table ([`encoder_for`]), never a
//! name-based lookup. Encoders own the *semantic* acceptance of a payload
//! (digit counts, checksums, capacity); the request validators only check
//! its shape.

mod ean;
mod qr;

pub use ean::{Ean13Encoder, Ean5Encoder, Ean8Encoder};
pub use qr::QrEncoder;

use thiserror::Error;

use crate::color::HexColor;
use crate::drawing::Drawing;
use crate::symbology::Symbology;

/// A payload the chosen symbology cannot encode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EncodeError(String);

impl EncodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Physical geometry and colors an encoder should draw with.
#[derive(Debug, Clone)]
pub struct DrawOptions {
    pub width_mm: f64,
    pub height_mm: f64,
    pub foreground: HexColor,
    pub background: HexColor,
}

impl DrawOptions {
    pub(crate) fn drawing(&self) -> Drawing {
        Drawing::new(
            self.width_mm,
            self.height_mm,
            self.foreground.clone(),
            self.background.clone(),
        )
    }
}

/// The drawing capability a symbology descriptor routes to.
pub trait SymbologyEncoder: Sync {
    fn draw(&self, code: &str, opts: &DrawOptions) -> Result<Drawing, EncodeError>;
}

/// Closed dispatch table from symbology tags to encoder capabilities.
pub fn encoder_for(symbology: Symbology) -> &'static dyn SymbologyEncoder {
    match symbology {
        Symbology::Ean8 => &Ean8Encoder,
        Symbology::Ean13 => &Ean13Encoder,
        Symbology::Ean5 => &Ean5Encoder,
        Symbology::QrCode => &QrEncoder,
    }
}

/// Parse a payload into digit values, rejecting anything non-numeric.
pub(crate) fn parse_digits(code: &str, symbology: &str) -> Result<Vec<u8>, EncodeError> {
    code.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| EncodeError::new(format!("{symbology} code must be numeric, got {code:?}")))
        })
        .collect()
}
