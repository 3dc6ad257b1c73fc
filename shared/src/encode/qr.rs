//! QR symbology, backed by the `qirust` encoder.

use qirust::qrcode::{QrCode, QrCodeEcc, Version};

use super::{DrawOptions, EncodeError, SymbologyEncoder};
use crate::drawing::Drawing;

/// Quiet-zone width in modules on every side, per the QR Model 2 standard.
const QUIET_ZONE: i32 = 4;

pub struct QrEncoder;

impl SymbologyEncoder for QrEncoder {
    fn draw(&self, code: &str, opts: &DrawOptions) -> Result<Drawing, EncodeError> {
        let mut outbuffer = vec![0u8; Version::MAX.buffer_len()];
        let mut tempbuffer = vec![0u8; Version::MAX.buffer_len()];
        let qr = QrCode::encode_text(
            code,
            &mut tempbuffer,
            &mut outbuffer,
            QrCodeEcc::Medium,
            Version::MIN,
            Version::MAX,
            None,
            true,
        )
        .map_err(|err| EncodeError::new(format!("QR encoding failed: {err}")))?;

        let size = qr.size();
        let total = f64::from(size + 2 * QUIET_ZONE);
        let mut drawing = opts.drawing();
        // Merge horizontal runs of dark modules, one rectangle per run.
        for y in 0..size {
            let mut run_start: Option<i32> = None;
            for x in 0..=size {
                let dark = x < size && qr.get_module(x, y);
                match (dark, run_start) {
                    (true, None) => run_start = Some(x),
                    (false, Some(start)) => {
                        drawing.push_rect(
                            f64::from(start + QUIET_ZONE) / total,
                            f64::from(y + QUIET_ZONE) / total,
                            f64::from(x - start) / total,
                            1.0 / total,
                        );
                        run_start = None;
                    }
                    _ => {}
                }
            }
        }
        Ok(drawing)
    }
}
