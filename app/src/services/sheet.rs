//! Sheet compositor: tiles saved labels into one printable image.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use image_engine::{SheetLayout, blank_canvas, crop_to, overlay};

use super::LabelError;

/// Suffix that marks a label file.
pub const LABEL_SUFFIX: &str = "_qr.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetOptions {
    pub cols: u32,
    pub margin: u32,
    /// Cell size; taken from the first label when `None`.
    pub cell: Option<(u32, u32)>,
}

#[derive(Debug, Clone)]
pub struct SheetReport {
    pub path: PathBuf,
    pub layout: SheetLayout,
    pub tiles: usize,
}

/// Label files in `dir`, sorted by file name.
pub fn find_label_files(dir: &Path) -> Result<Vec<PathBuf>, LabelError> {
    let entries = std::fs::read_dir(dir).map_err(|source| LabelError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(LABEL_SUFFIX))
        })
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Tile every label in `dir` onto one sheet and save it next to them.
///
/// Returns `Ok(None)` with a warning when there is nothing to tile.
pub fn compose_sheet(dir: &Path, options: &SheetOptions) -> Result<Option<SheetReport>, LabelError> {
    let files = find_label_files(dir)?;
    if files.is_empty() {
        tracing::warn!(dir = %dir.display(), "No label files found, skipping batch sheet");
        return Ok(None);
    }

    let (cell_w, cell_h) = match options.cell {
        Some(cell) => cell,
        None => image::image_dimensions(&files[0]).map_err(|source| LabelError::Read {
            path: files[0].clone(),
            source,
        })?,
    };
    let layout = SheetLayout::for_tiles(files.len(), options.cols, cell_w, cell_h, options.margin)?;

    tracing::info!(
        tiles = files.len(),
        cols = layout.cols,
        rows = layout.rows,
        width = layout.width(),
        height = layout.height(),
        "Composing batch sheet"
    );

    // One decoded label in memory at a time.
    let mut sheet = blank_canvas(layout.width(), layout.height());
    for (index, path) in files.iter().enumerate() {
        let tile = image::open(path).map_err(|source| LabelError::Read {
            path: path.clone(),
            source,
        })?;
        if (tile.width(), tile.height()) != (cell_w, cell_h) {
            tracing::warn!(
                path = %path.display(),
                width = tile.width(),
                height = tile.height(),
                cell_w,
                cell_h,
                "Label size differs from cell size, cropping"
            );
        }
        let tile = crop_to(&tile, cell_w, cell_h);
        let (x, y) = layout.cell_origin(index as u32);
        overlay(&mut sheet, &tile, x, y);
    }

    let path = dir.join(layout.file_name());
    sheet
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| LabelError::Write {
            path: path.clone(),
            source,
        })?;
    tracing::info!(path = %path.display(), "Batch sheet written");

    Ok(Some(SheetReport {
        path,
        layout,
        tiles: files.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::services::layout::LabelLayout;
    use crate::services::renderer::generate_labels;
    use image_engine::{LabelFont, WHITE};

    fn options(cols: u32) -> SheetOptions {
        SheetOptions {
            cols,
            margin: 15,
            cell: Some(LabelLayout::standard().size()),
        }
    }

    #[test]
    fn empty_directory_produces_no_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let report = compose_sheet(dir.path(), &options(3)).unwrap();
        assert!(report.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn only_label_files_are_picked_up_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["B_002_qr.png", "notes.txt", "A_001_qr.png", "batch_sheet_3x1.png"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("C_003_qr.png")).unwrap();

        let files = find_label_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["A_001_qr.png", "B_002_qr.png"]);
    }

    #[test]
    fn ten_labels_in_three_columns() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            count: 10,
            output_dir: dir.path().to_path_buf(),
            ..GeneratorConfig::default()
        };
        generate_labels(&config, &LabelFont::Builtin).unwrap();

        let report = compose_sheet(dir.path(), &options(3)).unwrap().unwrap();
        assert_eq!(report.tiles, 10);
        assert_eq!(report.path, dir.path().join("batch_sheet_3x4.png"));

        let sheet = image::open(&report.path).unwrap().to_rgba8();
        assert_eq!(sheet.dimensions(), (3 * 350 + 4 * 15, 4 * 420 + 5 * 15));

        // Tile 0 matches the first label file exactly.
        let first = image::open(dir.path().join("RGBW_LED_001_qr.png"))
            .unwrap()
            .to_rgba8();
        let (x0, y0) = report.layout.cell_origin(0);
        for (x, y) in [(60, 70), (175, 185), (200, 300)] {
            assert_eq!(sheet.get_pixel(x0 + x, y0 + y), first.get_pixel(x, y));
        }

        // Margins between tiles stay white.
        let (x1, _) = report.layout.cell_origin(1);
        for y in 0..sheet.height() {
            assert_eq!(sheet.get_pixel(x1 - 1, y), &WHITE);
        }

        // The last two cells of the bottom row are blank.
        for index in [10, 11] {
            let (x, y) = report.layout.cell_origin(index);
            let ink = (0..350)
                .flat_map(|dx| (0..420).map(move |dy| (dx, dy)))
                .any(|(dx, dy)| sheet.get_pixel(x + dx, y + dy) != &WHITE);
            assert!(!ink, "cell {index} should be blank");
        }
    }

    #[test]
    fn cell_size_defaults_to_first_label() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            count: 2,
            variant: device_id::UrlVariant::WithMac,
            output_dir: dir.path().to_path_buf(),
            ..GeneratorConfig::default()
        };
        generate_labels(&config, &LabelFont::Builtin).unwrap();

        let opts = SheetOptions {
            cols: 2,
            margin: 15,
            cell: None,
        };
        let report = compose_sheet(dir.path(), &opts).unwrap().unwrap();
        assert_eq!(report.layout.cell_height, 450);
        assert_eq!(report.path, dir.path().join("batch_sheet_2x1.png"));
    }

    #[test]
    fn oversized_label_is_cropped_to_its_cell() {
        let dir = tempfile::tempdir().unwrap();
        let black = image::Rgba([0, 0, 0, 255]);
        image::RgbaImage::from_pixel(100, 50, black)
            .save(dir.path().join("A_001_qr.png"))
            .unwrap();
        image::RgbaImage::from_pixel(140, 80, black)
            .save(dir.path().join("B_002_qr.png"))
            .unwrap();
        image::RgbaImage::from_pixel(100, 50, WHITE)
            .save(dir.path().join("C_003_qr.png"))
            .unwrap();

        let opts = SheetOptions {
            cols: 3,
            margin: 10,
            cell: None,
        };
        let report = compose_sheet(dir.path(), &opts).unwrap().unwrap();
        assert_eq!((report.layout.cell_width, report.layout.cell_height), (100, 50));

        let sheet = image::open(&report.path).unwrap().to_rgba8();
        let (x1, y1) = report.layout.cell_origin(1);
        assert_eq!(sheet.get_pixel(x1 + 99, y1 + 49), &black);
        // Margin right of and below the cropped tile stays white.
        assert_eq!(sheet.get_pixel(x1 + 100, y1 + 10), &WHITE);
        assert_eq!(sheet.get_pixel(x1 + 10, y1 + 50), &WHITE);
        let (x2, y2) = report.layout.cell_origin(2);
        assert_eq!(sheet.get_pixel(x2 + 5, y2 + 5), &WHITE);
    }

    #[test]
    fn unreadable_label_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("A_001_qr.png"), b"not a png").unwrap();
        assert!(matches!(
            compose_sheet(dir.path(), &options(3)),
            Err(LabelError::Read { .. })
        ));
    }
}
