//! Startup self-check, run before any label is written.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};
use image_engine::{QrStyle, render_qr};

#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error("QR encoder self-test failed: {0}. Rebuild with the qrcode crate available")]
    Encoder(#[source] image_engine::ImageEngineError),

    #[error(
        "PNG codec self-test failed: {0}. Rebuild with the `png` feature of the `image` crate enabled"
    )]
    Codec(#[source] image::ImageError),

    #[error("cannot create output directory {}: {source}. Check the path and its permissions", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Encode a probe QR code, round-trip it through PNG, and make sure the
/// output directory exists.
pub fn check(output_dir: &Path) -> Result<(), PreflightError> {
    let probe = render_qr("preflight", &QrStyle::default()).map_err(PreflightError::Encoder)?;

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(probe)
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(PreflightError::Codec)?;
    image::load_from_memory_with_format(buf.get_ref(), ImageFormat::Png)
        .map_err(PreflightError::Codec)?;

    std::fs::create_dir_all(output_dir).map_err(|source| PreflightError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    tracing::debug!(dir = %output_dir.display(), "Preflight passed");
    Ok(())
}
