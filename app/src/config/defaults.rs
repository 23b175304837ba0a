//! Default values for every generator setting.

pub const DEFAULT_BASE_URL: &str = "https://yourusername.github.io/led-control";
pub const DEFAULT_COUNT: u32 = 10;
pub const DEFAULT_PREFIX: &str = "RGBW_LED";
pub const DEFAULT_START: u32 = 1;
pub const DEFAULT_COLS: u32 = 3;
pub const DEFAULT_OUTPUT_DIR: &str = "qr_codes";

/// Gap around and between labels on a batch sheet, in pixels.
pub const SHEET_MARGIN: u32 = 15;

/// Pixels per QR module before the code is scaled onto the label.
pub const QR_BOX_SIZE: u32 = 8;
/// Quiet zone in modules.
pub const QR_BORDER: u32 = 4;

pub const MAX_COUNT: u32 = 9999;
pub const MAX_COLS: u32 = 20;
