//! Label renderer: one PNG per device.

use std::path::{Path, PathBuf};

use device_id::{DeviceRecord, UrlVariant};
use image::{DynamicImage, ImageFormat, RgbaImage};
use image_engine::text::{draw_centered_text, truncate_with_ellipsis};
use image_engine::{LabelFont, QrStyle, blank_canvas, overlay, render_qr, resize_square};

use super::LabelError;
use super::layout::LabelLayout;
use crate::config::GeneratorConfig;
use crate::config::defaults::{QR_BORDER, QR_BOX_SIZE};

const URL_CAPTION_MAX: usize = 30;
const URL_CAPTION_KEEP: usize = 27;

/// Static inputs shared by every label of a run.
pub struct LabelContext<'a> {
    pub layout: LabelLayout,
    pub font: &'a LabelFont,
    pub variant: UrlVariant,
    pub qr_style: QrStyle,
    /// Base URL as printed at the bottom of the label.
    pub url_caption: String,
}

impl<'a> LabelContext<'a> {
    pub fn new(base_url: &str, variant: UrlVariant, font: &'a LabelFont) -> Self {
        Self {
            layout: LabelLayout::for_variant(variant),
            font,
            variant,
            qr_style: QrStyle {
                box_size: QR_BOX_SIZE,
                border: QR_BORDER,
                ..QrStyle::default()
            },
            url_caption: url_caption(base_url),
        }
    }
}

/// Result of a render run.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub layout: LabelLayout,
}

/// Base URL without its scheme, shortened for the label.
pub fn url_caption(base_url: &str) -> String {
    let stripped = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .unwrap_or(base_url);
    truncate_with_ellipsis(stripped, URL_CAPTION_MAX, URL_CAPTION_KEEP)
}

fn instruction_text(variant: UrlVariant) -> &'static str {
    match variant {
        UrlVariant::AutoConnect => "Scan to auto-connect & control",
        UrlVariant::Plain | UrlVariant::WithMac => "Scan with phone to control",
    }
}

/// Compose the label image for one device.
pub fn render_label(record: &DeviceRecord, ctx: &LabelContext<'_>) -> Result<RgbaImage, LabelError> {
    let layout = &ctx.layout;
    let mut img = blank_canvas(layout.width, layout.height);

    let qr = render_qr(&record.url, &ctx.qr_style)?;
    let qr = resize_square(&DynamicImage::ImageLuma8(qr), layout.qr_size);
    overlay(&mut img, &qr, layout.qr_x(), layout.qr_y);

    let title = format!("LED Controller #{}", record.number);
    let mut lines = vec![
        (layout.title, title),
        (layout.device_id, record.device_id.clone()),
        (layout.instruction, instruction_text(ctx.variant).to_string()),
    ];
    if let (Some(slot), Some(mac)) = (layout.mac, record.mac.as_deref()) {
        lines.push((slot, format!("MAC {mac} (synthetic)")));
    }
    lines.push((layout.url, ctx.url_caption.clone()));

    for (slot, text) in &lines {
        draw_centered_text(&mut img, ctx.font, slot.size, slot.y, text, slot.color);
    }

    Ok(img)
}

/// Save a label as PNG.
pub fn save_label(img: &RgbaImage, path: &Path) -> Result<(), LabelError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| LabelError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Render and save a label for every device in the configured range.
///
/// Stops at the first failure; files written so far are left in place.
pub fn generate_labels(config: &GeneratorConfig, font: &LabelFont) -> Result<RenderReport, LabelError> {
    let range = config.device_range()?;
    let base = device_id::parse_base_url(&config.base_url)?;
    let ctx = LabelContext::new(&config.base_url, config.variant, font);

    std::fs::create_dir_all(&config.output_dir).map_err(|source| LabelError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    tracing::info!(
        count = range.count(),
        first = %device_id::format_device_id(range.prefix(), range.start()),
        variant = ?config.variant,
        dir = %config.output_dir.display(),
        "Generating labels"
    );

    let mut files = Vec::with_capacity(range.count() as usize);
    for record in range.records(&base, config.variant) {
        let img = render_label(&record, &ctx)?;
        let path = config.output_dir.join(record.file_name());
        save_label(&img, &path)?;
        tracing::debug!(device_id = %record.device_id, path = %path.display(), "Label written");
        files.push(path);
    }

    Ok(RenderReport {
        output_dir: config.output_dir.clone(),
        files,
        layout: ctx.layout,
    })
}
