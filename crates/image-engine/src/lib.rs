//! Raster building blocks for printable QR labels.
//!
//! QR matrix rasterization, resizing, text drawing with a scalable or
//! built-in bitmap font, compositing, and the grid layout used to tile
//! labels onto a print sheet.

pub mod compose;
pub mod font;
pub mod grid;
pub mod qr;
pub mod resize;
pub mod text;

use image::Rgba;

// Re-exports for convenience
pub use compose::{blank_canvas, crop_to, overlay};
pub use font::LabelFont;
pub use grid::SheetLayout;
pub use qr::{QrStyle, render_qr};
pub use resize::resize_square;
pub use text::{draw_centered_text, measure_text_width};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
pub const LIGHT_GRAY: Rgba<u8> = Rgba([211, 211, 211, 255]);

/// Errors that can occur while building label images.
#[derive(Debug, thiserror::Error)]
pub enum ImageEngineError {
    #[error("QR encode error: {0}")]
    QrEncode(#[from] qrcode::types::QrError),

    #[error("Invalid font data (TTF/OTF expected): {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}
