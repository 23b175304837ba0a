//! Command-line interface.
//!
//! Every flag can also come from a `QR_LABELS_*` environment variable (or a
//! `.env` file, loaded before parsing).

use std::path::PathBuf;

use clap::Parser;

use crate::config::defaults::{
    DEFAULT_BASE_URL, DEFAULT_COLS, DEFAULT_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_PREFIX,
    DEFAULT_START,
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "led-qr-labels",
    version,
    about = "Generate QR code labels for LED controllers"
)]
pub struct Cli {
    /// Base URL of the control web app
    #[arg(long, env = "QR_LABELS_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Number of labels to generate
    #[arg(long, env = "QR_LABELS_COUNT", default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// Device name prefix
    #[arg(long, env = "QR_LABELS_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// First device number
    #[arg(long, env = "QR_LABELS_START", default_value_t = DEFAULT_START)]
    pub start: u32,

    /// Also tile all labels into one printable sheet
    #[arg(long, env = "QR_LABELS_BATCH")]
    pub batch: bool,

    /// Columns on the batch sheet
    #[arg(long, env = "QR_LABELS_COLS", default_value_t = DEFAULT_COLS)]
    pub cols: u32,

    /// Add `autoconnect=true` to every URL
    #[arg(long, env = "QR_LABELS_AUTO_CONNECT", conflicts_with = "with_mac")]
    pub auto_connect: bool,

    /// Add a synthetic placeholder MAC to every URL and label
    #[arg(long, env = "QR_LABELS_WITH_MAC")]
    pub with_mac: bool,

    /// Directory labels and sheets are written to
    #[arg(long, env = "QR_LABELS_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Preferred TTF/OTF font, tried before the system fonts
    #[arg(long, env = "QR_LABELS_FONT")]
    pub font: Option<PathBuf>,

    /// Only build the batch sheet from labels already in the output directory
    #[arg(long, env = "QR_LABELS_SHEET_ONLY")]
    pub sheet_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cli = Cli::try_parse_from(["led-qr-labels"]).unwrap();
        assert_eq!(cli.url, DEFAULT_BASE_URL);
        assert_eq!(cli.count, 10);
        assert_eq!(cli.prefix, "RGBW_LED");
        assert_eq!(cli.start, 1);
        assert_eq!(cli.cols, 3);
        assert_eq!(cli.output_dir, PathBuf::from("qr_codes"));
        assert!(!cli.batch && !cli.auto_connect && !cli.with_mac && !cli.sheet_only);
    }

    #[test]
    fn batch_flags_parse() {
        let cli =
            Cli::try_parse_from(["led-qr-labels", "--batch", "--count", "10", "--cols", "3"])
                .unwrap();
        assert!(cli.batch);
        assert_eq!(cli.count, 10);
        assert_eq!(cli.cols, 3);
    }

    #[test]
    fn auto_connect_conflicts_with_mac() {
        let err = Cli::try_parse_from(["led-qr-labels", "--auto-connect", "--with-mac"]);
        assert!(err.is_err());
    }
}
