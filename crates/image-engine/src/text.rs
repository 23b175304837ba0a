//! Text rendering utilities for label images.
//!
//! Measures and draws single lines of text, either through `ab_glyph`
//! (scalable fonts) or through `embedded-graphics` (built-in bitmap fonts).

use std::convert::Infallible;

use ab_glyph::{Font, PxScale, ScaleFont};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::font::{LabelFont, builtin_font_for_size};

/// Measure the pixel width of a string at the given font and pixel size.
pub fn measure_text_width(font: &LabelFont, size: f32, text: &str) -> u32 {
    match font {
        LabelFont::Scalable(font) => measure_scalable(font, PxScale::from(size), text),
        LabelFont::Builtin => measure_mono(builtin_font_for_size(size), text),
    }
}

fn measure_scalable(font: &impl Font, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

fn measure_mono(font: &MonoFont<'_>, text: &str) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * font.character_size.width + (chars - 1) * font.character_spacing
}

/// Draw text with its top-left corner at `(x, y)`.
pub fn draw_text(
    img: &mut RgbaImage,
    font: &LabelFont,
    size: f32,
    x: i32,
    y: i32,
    text: &str,
    color: Rgba<u8>,
) {
    match font {
        LabelFont::Scalable(font) => {
            draw_text_mut(img, color, x, y, PxScale::from(size), font, text);
        }
        LabelFont::Builtin => {
            let style = MonoTextStyle::new(
                builtin_font_for_size(size),
                Rgb888::new(color[0], color[1], color[2]),
            );
            let mut target = ImageTarget(img);
            Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
                .draw(&mut target)
                .unwrap_or_else(|never| match never {});
        }
    }
}

/// Draw text horizontally centered on the image at row `y`.
pub fn draw_centered_text(
    img: &mut RgbaImage,
    font: &LabelFont,
    size: f32,
    y: i32,
    text: &str,
    color: Rgba<u8>,
) {
    let text_width = measure_text_width(font, size, text) as i32;
    let x = ((img.width() as i32) - text_width).max(0) / 2;
    draw_text(img, font, size, x, y, text, color);
}

/// Cut `text` to `keep` characters plus `...` when it is longer than `max_chars`.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize, keep: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// `embedded-graphics` draw target over an RGBA image buffer.
struct ImageTarget<'a>(&'a mut RgbaImage);

impl OriginDimensions for ImageTarget<'_> {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

impl DrawTarget for ImageTarget<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.0.dimensions();
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < width && (coord.y as u32) < height
            {
                self.0.put_pixel(
                    coord.x as u32,
                    coord.y as u32,
                    Rgba([color.r(), color.g(), color.b(), 255]),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::blank_canvas;
    use crate::{BLACK, WHITE};

    fn ink_columns(img: &RgbaImage) -> Option<(u32, u32)> {
        let mut cols = (0..img.width())
            .filter(|&x| (0..img.height()).any(|y| img.get_pixel(x, y) != &WHITE));
        let first = cols.next()?;
        let last = cols.last().unwrap_or(first);
        Some((first, last))
    }

    #[test]
    fn builtin_width_is_monospaced() {
        let font = LabelFont::Builtin;
        assert_eq!(measure_text_width(&font, 12.0, ""), 0);
        assert_eq!(measure_text_width(&font, 12.0, "abc"), 18);
        assert_eq!(measure_text_width(&font, 22.0, "RGBW"), 40);
    }

    #[test]
    fn builtin_text_draws_ink() {
        let mut img = blank_canvas(100, 30);
        draw_text(&mut img, &LabelFont::Builtin, 16.0, 2, 2, "ID", BLACK);
        assert!(ink_columns(&img).is_some());
    }

    #[test]
    fn centered_text_is_roughly_centered() {
        let mut img = blank_canvas(350, 40);
        draw_centered_text(&mut img, &LabelFont::Builtin, 16.0, 10, "RGBW_LED_001", BLACK);
        let (first, last) = ink_columns(&img).unwrap();
        let left = first as i32;
        let right = 349 - last as i32;
        assert!((left - right).abs() <= 10, "left={left} right={right}");
    }

    #[test]
    fn text_outside_canvas_does_not_panic() {
        let mut img = blank_canvas(20, 20);
        draw_text(&mut img, &LabelFont::Builtin, 22.0, 15, 15, "overflow", BLACK);
        draw_text(&mut img, &LabelFont::Builtin, 22.0, -40, -40, "overflow", BLACK);
    }

    #[test]
    fn truncation_keeps_short_text() {
        assert_eq!(truncate_with_ellipsis("example.com", 30, 27), "example.com");
        let long = "yourusername.github.io/led-control-panel";
        let cut = truncate_with_ellipsis(long, 30, 27);
        assert_eq!(cut.chars().count(), 30);
        assert!(cut.ends_with("..."));
    }
}
