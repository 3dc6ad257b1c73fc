use crate::color::HexColor;

/// Resolution-independent barcode artwork.
///
/// Encoders emit filled rectangles in a unit square; the serializers map them
/// onto the physical size carried here. `y` grows downwards, matching both
/// raster and SVG coordinate conventions.
#[derive(Debug, Clone)]
pub struct Drawing {
    pub width_mm: f64,
    pub height_mm: f64,
    pub foreground: HexColor,
    pub background: HexColor,
    pub rects: Vec<UnitRect>,
}

/// A filled rectangle in unit space (all coordinates in 0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Drawing {
    pub fn new(width_mm: f64, height_mm: f64, foreground: HexColor, background: HexColor) -> Self {
        Self {
            width_mm,
            height_mm,
            foreground,
            background,
            rects: Vec::new(),
        }
    }

    pub fn push_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.rects.push(UnitRect { x, y, w, h });
    }

    /// Append full-height bars for a 1D module pattern, merging adjacent dark
    /// modules into single rectangles.
    pub fn push_bar_pattern(&mut self, modules: &[bool]) {
        let total = modules.len() as f64;
        let mut run_start: Option<usize> = None;
        for (i, &dark) in modules.iter().enumerate() {
            match (dark, run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    self.push_rect(start as f64 / total, 0.0, (i - start) as f64 / total, 1.0);
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            self.push_rect(
                start as f64 / total,
                0.0,
                (modules.len() - start) as f64 / total,
                1.0,
            );
        }
    }
}
