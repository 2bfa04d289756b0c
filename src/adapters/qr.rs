use crate::utils::error::{EtlError, Result};
use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

/// 每個模塊的邊長（像素）
const MODULE_PIXELS: u32 = 10;

/// Encode `content` as a QR code and return the PNG bytes.
///
/// Error correction level L, smallest version that fits, black modules on
/// white, with the standard 4-module quiet zone around the symbol.
pub fn render_qr_png(content: &str) -> Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(content.as_bytes(), EcLevel::L).map_err(|e| {
        EtlError::QrError {
            message: e.to_string(),
        }
    })?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .build();

    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
