pub mod color;
pub mod drawing;
pub mod encode;
pub mod models;
pub mod render;
pub mod symbology;
pub mod units;

pub use color::*;
pub use models::*;
pub use render::{render, RenderError, RenderResult};
pub use symbology::*;
