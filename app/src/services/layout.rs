//! Fixed label geometry.
//!
//! ```text
//!  y=15   LED Controller #1
//!  y=60   +-----------+
//!         |  QR 250²  |
//!         +-----------+
//!  y=325  RGBW_LED_001
//!  y=355  Scan with phone to control
//! (y=380  MAC 02:00:00:00:00:01 (synthetic))
//!  y=380/405  yourusername.github.io/led-control
//! ```

use device_id::UrlVariant;
use image::Rgba;
use image_engine::{BLACK, GRAY, LIGHT_GRAY};

/// One line of centered text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSlot {
    pub y: i32,
    pub size: f32,
    pub color: Rgba<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    pub width: u32,
    pub height: u32,
    pub qr_size: u32,
    pub qr_y: u32,
    pub title: TextSlot,
    pub device_id: TextSlot,
    pub instruction: TextSlot,
    pub mac: Option<TextSlot>,
    pub url: TextSlot,
}

const TITLE: TextSlot = TextSlot {
    y: 15,
    size: 22.0,
    color: BLACK,
};
const DEVICE_ID: TextSlot = TextSlot {
    y: 325,
    size: 16.0,
    color: BLACK,
};
const INSTRUCTION: TextSlot = TextSlot {
    y: 355,
    size: 12.0,
    color: GRAY,
};

impl LabelLayout {
    /// 350x420 label with title, QR, id, instruction and URL.
    pub const fn standard() -> Self {
        Self {
            width: 350,
            height: 420,
            qr_size: 250,
            qr_y: 60,
            title: TITLE,
            device_id: DEVICE_ID,
            instruction: INSTRUCTION,
            mac: None,
            url: TextSlot {
                y: 380,
                size: 12.0,
                color: LIGHT_GRAY,
            },
        }
    }

    /// 350x450 label with an extra MAC line above the URL.
    pub const fn with_mac() -> Self {
        Self {
            height: 450,
            mac: Some(TextSlot {
                y: 380,
                size: 12.0,
                color: GRAY,
            }),
            url: TextSlot {
                y: 405,
                size: 12.0,
                color: LIGHT_GRAY,
            },
            ..Self::standard()
        }
    }

    pub fn for_variant(variant: UrlVariant) -> Self {
        if variant.includes_mac() {
            Self::with_mac()
        } else {
            Self::standard()
        }
    }

    /// Left edge of the horizontally centered QR code.
    pub fn qr_x(&self) -> u32 {
        (self.width - self.qr_size) / 2
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
