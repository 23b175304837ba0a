//! QR code rasterization for labels.

use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};
use tracing::debug;

use crate::ImageEngineError;

/// Module size and quiet zone of a rendered QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    /// Pixels per module.
    pub box_size: u32,
    /// Quiet zone width in modules.
    pub border: u32,
    pub ec_level: EcLevel,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            box_size: 8,
            border: 4,
            ec_level: EcLevel::M,
        }
    }
}

/// Encode `data` and draw it black on white.
///
/// The encoder picks the smallest symbol version that fits. The output is
/// `(modules + 2 * border) * box_size` pixels square.
pub fn render_qr(data: &str, style: &QrStyle) -> Result<GrayImage, ImageEngineError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), style.ec_level)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let scale = style.box_size.max(1);
    let img_size = (module_count + style.border * 2) * scale;

    debug!(
        version = ?code.version(),
        module_count,
        img_size,
        "Encoded QR code"
    );

    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));
    let offset = style.border * scale;

    for (i, color) in modules.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;
        for dx in 0..scale {
            for dy in 0..scale {
                img.put_pixel(offset + x * scale + dx, offset + y * scale + dy, Luma([0u8]));
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_qr_produces_square_image() {
        let img = render_qr("https://example.com/?device=A_001", &QrStyle::default()).unwrap();
        assert!(img.width() > 0);
        assert_eq!(img.width(), img.height());
        assert_eq!(img.width() % 8, 0);
    }

    #[test]
    fn quiet_zone_is_white() {
        let style = QrStyle::default();
        let img = render_qr("test", &style).unwrap();
        let quiet = style.border * style.box_size;
        for i in 0..img.width() {
            assert_eq!(img.get_pixel(i, quiet - 1)[0], 255);
            assert_eq!(img.get_pixel(quiet - 1, i)[0], 255);
        }
        // Top-left finder pattern starts right after the quiet zone.
        assert_eq!(img.get_pixel(quiet, quiet)[0], 0);
    }

    #[test]
    fn longer_data_selects_larger_symbol() {
        let style = QrStyle {
            box_size: 1,
            border: 0,
            ec_level: EcLevel::M,
        };
        let short = render_qr("A_001", &style).unwrap();
        let long = render_qr(&"https://example.com/led?device=".repeat(4), &style).unwrap();
        // Version 1 is 21 modules wide.
        assert_eq!(short.width(), 21);
        assert!(long.width() > short.width());
    }
}
