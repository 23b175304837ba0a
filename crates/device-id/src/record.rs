//! Device records: one per label, computed on demand.

use tracing::debug;
use url::Url;

use crate::DeviceIdError;
use crate::mac::synthetic_mac;
use crate::url_builder::{UrlVariant, build_device_url};

/// Format a device id as `{prefix}_{number:03}`.
///
/// Numbers wider than three digits are kept whole (`RGBW_LED_1000`).
pub fn format_device_id(prefix: &str, number: u32) -> String {
    format!("{prefix}_{number:03}")
}

/// Everything a single label needs to know about its device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    /// Zero-based position within the run.
    pub index: u32,
    /// `start + index`, shown in the label title.
    pub number: u32,
    pub device_id: String,
    /// Synthetic placeholder, present only for [`UrlVariant::WithMac`].
    pub mac: Option<String>,
    pub url: String,
}

impl DeviceRecord {
    /// File name the rendered label is saved under.
    pub fn file_name(&self) -> String {
        format!("{}_qr.png", self.device_id)
    }
}

/// A contiguous run of device numbers sharing one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRange {
    prefix: String,
    start: u32,
    count: u32,
}

impl DeviceRange {
    /// Fails when `start + count` does not fit in a `u32`.
    pub fn new(prefix: impl Into<String>, start: u32, count: u32) -> Result<Self, DeviceIdError> {
        start
            .checked_add(count)
            .ok_or(DeviceIdError::NumberOverflow { start, count })?;
        Ok(Self {
            prefix: prefix.into(),
            start,
            count,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Device numbers in generation order.
    pub fn numbers(&self) -> std::ops::Range<u32> {
        self.start..self.start + self.count
    }

    /// Device ids in generation order.
    pub fn device_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.numbers().map(|n| format_device_id(&self.prefix, n))
    }

    /// Build the record for the device at `index` within this range.
    pub fn record(&self, index: u32, base: &Url, variant: UrlVariant) -> DeviceRecord {
        let number = self.start + index;
        let device_id = format_device_id(&self.prefix, number);
        let mac = variant.includes_mac().then(|| synthetic_mac(number));
        let url = build_device_url(base, &device_id, variant, mac.as_deref());
        debug!(index, device_id = %device_id, url = %url, "Built device record");

        DeviceRecord {
            index,
            number,
            device_id,
            mac,
            url,
        }
    }

    /// All records of the range, in order.
    pub fn records<'a>(
        &'a self,
        base: &'a Url,
        variant: UrlVariant,
    ) -> impl Iterator<Item = DeviceRecord> + 'a {
        (0..self.count).map(move |i| self.record(i, base, variant))
    }
}
