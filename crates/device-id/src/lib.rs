//! Device identity for LED controller labels.
//!
//! Provides device-id naming, synthetic MAC addresses, and construction of
//! the control-page URL that each label's QR code points at.

pub mod mac;
pub mod record;
pub mod url_builder;

// Re-exports for convenience
pub use mac::{SYNTHETIC_OUI, synthetic_mac};
pub use record::{DeviceRange, DeviceRecord, format_device_id};
pub use url_builder::{DeviceQuery, UrlVariant, build_device_url, parse_base_url, parse_device_url};

/// Errors that can occur while naming devices or building their URLs.
#[derive(Debug, thiserror::Error)]
pub enum DeviceIdError {
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Base URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("Device numbers overflow: start {start} + count {count}")]
    NumberOverflow { start: u32, count: u32 },

    #[error("URL has no device parameter")]
    MissingDevice,
}
