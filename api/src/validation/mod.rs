//! Request validation for the barcode endpoint.
//!
//! Three pieces:
//!
//! 1. **Extractors** — `FieldError`, `ValidationError` (the 400 response),
//!    and the accumulating `ValidationBuilder`.
//! 2. **Validators** — per-field grammars: hex colors, dimensions, image
//!    type. Parse failures and range failures on dimensions are distinct
//!    error kinds with distinct messages.
//! 3. **Requests** — `BarcodeParams`, the raw query mirror, and its
//!    conversion into a validated `BarcodeRequest`.
//!
//! Every field is validated independently and all failures are reported in
//! one response; a request with a bad color *and* a bad dimension sees both
//! messages.

pub mod extractors;
pub mod requests;
pub mod validators;

pub use extractors::{FieldError, ValidationBuilder, ValidationError};
pub use requests::BarcodeParams;
pub use validators::{parse_dimension, parse_image_type, validate_color, DimensionError};
