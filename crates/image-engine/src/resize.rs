//! Resizing for label composition.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Resize an image to a `size` x `size` square using Lanczos3 filtering.
///
/// Returns the original image unchanged if it already has that size.
pub fn resize_square(img: &DynamicImage, size: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_w == size && orig_h == size {
        debug!(size, "Image already at target size, skipping resize");
        return img.clone();
    }

    debug!(orig_w, orig_h, size, "Resizing image to square");
    img.resize_exact(size, size, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([128])))
    }

    #[test]
    fn downscales_to_square() {
        let result = resize_square(&create_test_image(296, 296), 250);
        assert_eq!((result.width(), result.height()), (250, 250));
    }

    #[test]
    fn upscales_to_square() {
        let result = resize_square(&create_test_image(200, 200), 250);
        assert_eq!((result.width(), result.height()), (250, 250));
    }

    #[test]
    fn non_square_input_is_stretched() {
        let result = resize_square(&create_test_image(300, 100), 250);
        assert_eq!((result.width(), result.height()), (250, 250));
    }

    #[test]
    fn same_size_is_untouched() {
        let img = create_test_image(250, 250);
        let result = resize_square(&img, 250);
        assert_eq!(result.as_bytes(), img.as_bytes());
    }
}
