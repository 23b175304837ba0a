//! Human-readable console output for a run.

use std::fmt::Write as _;

use device_id::{UrlVariant, format_device_id};

use crate::config::GeneratorConfig;
use crate::services::font::FontSource;
use crate::services::renderer::RenderReport;
use crate::services::sheet::SheetReport;

/// Header printed before generation starts.
pub fn banner(config: &GeneratorConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "LED Controller QR Generator");
    let _ = writeln!(out, "{}", "=".repeat(50));
    if config.sheet_only {
        let _ = writeln!(out, "Batch sheet only, from {}", config.output_dir.display());
        return out;
    }
    let _ = writeln!(out, "Generating {} QR codes...", config.count);
    let _ = writeln!(out, "Base URL: {}", config.base_url);
    let _ = writeln!(
        out,
        "Device naming: {} onwards",
        format_device_id(&config.prefix, config.start)
    );
    let _ = writeln!(
        out,
        "Auto-connect: {}",
        if config.variant == UrlVariant::AutoConnect { "Yes" } else { "No" }
    );
    if config.variant == UrlVariant::WithMac {
        let _ = writeln!(out, "MAC: synthetic placeholder values");
    }
    let _ = writeln!(out, "{}", "-".repeat(50));
    out
}

/// Summary printed after a successful run.
pub fn summary(
    config: &GeneratorConfig,
    render: Option<&RenderReport>,
    font: Option<&FontSource>,
    sheet: Option<&SheetReport>,
) -> String {
    let mut out = String::new();

    if let Some(render) = render {
        for file in &render.files {
            let _ = writeln!(out, "Generated: {}", file.display());
        }
        let _ = writeln!(out, "\nSuccessfully generated {} QR codes!", render.files.len());
    }
    if let Some(font) = font {
        let _ = writeln!(out, "Label font: {font}");
    }

    if config.batch || config.sheet_only {
        match sheet {
            Some(sheet) => {
                let _ = writeln!(
                    out,
                    "Generated batch sheet: {} ({} labels)",
                    sheet.path.display(),
                    sheet.tiles
                );
            }
            None => {
                let _ = writeln!(out, "No QR code files found for batch sheet generation");
            }
        }
    }

    let _ = writeln!(out, "\nAll files saved to: {}/", config.output_dir.display());
    if config.sheet_only {
        return out;
    }

    let _ = writeln!(out, "\nNext steps:");
    let _ = writeln!(out, "1. Deploy your web app to: {}", config.base_url);
    let _ = writeln!(out, "2. Print the QR codes (individual or batch sheet)");
    let _ = writeln!(
        out,
        "3. Flash ESP32 devices with names: {}, {}, etc.",
        format_device_id(&config.prefix, config.start),
        format_device_id(&config.prefix, config.start.saturating_add(1))
    );
    let _ = writeln!(out, "4. Attach QR codes to corresponding devices");
    let _ = writeln!(out, "\nTest by scanning a QR code with your phone!");

    match config.variant {
        UrlVariant::AutoConnect => {
            let _ = writeln!(
                out,
                "\nNote: the web app must read the `autoconnect` parameter for auto-connect to work"
            );
        }
        UrlVariant::WithMac => {
            let _ = writeln!(
                out,
                "\nNote: MAC values are synthetic placeholders, not real hardware addresses"
            );
        }
        UrlVariant::Plain => {}
    }
    out
}
