use image::{DynamicImage, GrayImage, Luma, RgbImage, RgbaImage};
use rayon::prelude::*;

/// Mid-gray used as the default contrast pivot
pub const MIDPOINT_GRAY: f32 = 128.0;

/// Luma of an RGB triple
///
/// Formula: L = R*299/1000 + G*587/1000 + B*114/1000 (ITU-R 601-2),
/// evaluated in 16.16 fixed point with rounding.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Calculate luminance from an RGBA image, ignoring alpha
pub fn calculate_luminance(img: &RgbaImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, Luma([luma(pixel[0], pixel[1], pixel[2])]));
    }

    output
}

/// Same as [`calculate_luminance`] for images without alpha
pub fn calculate_luminance_rgb(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, Luma([luma(pixel[0], pixel[1], pixel[2])]));
    }

    output
}

/// Single-channel luminance view of any decoded image
///
/// 8-bit luma images are used as-is, other luma layouts are narrowed to 8 bits,
/// and color images go through [`luma`].
pub fn to_luminance(img: &DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => img.to_luma8(),
        DynamicImage::ImageRgb8(rgb) => calculate_luminance_rgb(rgb),
        other => calculate_luminance(&other.to_rgba8()),
    }
}

/// Blend a channel value away from (or toward) a degenerate value
///
/// `degenerate + (value - degenerate) * factor`, clipped to 0..=255 and
/// truncated toward zero.
#[inline]
pub fn blend_channel(degenerate: f32, value: u8, factor: f32) -> u8 {
    let blended = degenerate + (value as f32 - degenerate) * factor;
    if blended <= 0.0 {
        0
    } else if blended >= 255.0 {
        255
    } else {
        blended as u8
    }
}

/// Rounded mean luma over interleaved samples
///
/// `stride` is the number of samples per pixel (1, 3 or 4). Single-channel
/// data is averaged directly; for color data the first three samples of each
/// pixel are treated as RGB. Returns [`MIDPOINT_GRAY`] for empty input.
pub fn mean_luminance(samples: &[u8], stride: usize) -> f32 {
    let pixels = samples.len() / stride;
    if pixels == 0 {
        return MIDPOINT_GRAY;
    }

    let total: u64 = samples
        .par_chunks_exact(stride)
        .map(|px| {
            if stride < 3 {
                px[0] as u64
            } else {
                luma(px[0], px[1], px[2]) as u64
            }
        })
        .sum();

    (total as f64 / pixels as f64 + 0.5).floor() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_luminance_black() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let lum = calculate_luminance(&img);
        assert_eq!(lum.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_luminance_white() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        let lum = calculate_luminance(&img);
        assert_eq!(lum.get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn test_luminance_gray_is_preserved() {
        for v in [0u8, 1, 77, 128, 200, 254, 255] {
            assert_eq!(luma(v, v, v), v);
        }
    }

    #[test]
    fn test_luma_weights() {
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_to_luminance_keeps_gray_input() {
        let gray = GrayImage::from_pixel(3, 2, Luma([42]));
        let lum = to_luminance(&DynamicImage::ImageLuma8(gray.clone()));
        assert_eq!(lum, gray);
    }

    #[test]
    fn test_to_luminance_rgb() {
        let rgb = RgbImage::from_pixel(4, 4, image::Rgb([255, 0, 0]));
        let lum = to_luminance(&DynamicImage::ImageRgb8(rgb));
        assert_eq!(lum.dimensions(), (4, 4));
        assert!(lum.pixels().all(|p| p[0] == 76));
    }

    #[test]
    fn test_blend_channel_identity() {
        for v in 0..=255u8 {
            assert_eq!(blend_channel(0.0, v, 1.0), v);
            assert_eq!(blend_channel(MIDPOINT_GRAY, v, 1.0), v);
        }
    }

    #[test]
    fn test_blend_channel_clips() {
        assert_eq!(blend_channel(0.0, 200, 2.0), 255);
        assert_eq!(blend_channel(MIDPOINT_GRAY, 10, 3.0), 0);
        assert_eq!(blend_channel(0.0, 100, 0.5), 50);
    }

    #[test]
    fn test_blend_channel_truncates() {
        // 0 + 101 * 0.5 = 50.5
        assert_eq!(blend_channel(0.0, 101, 0.5), 50);
    }

    #[test]
    fn test_mean_luminance() {
        assert_eq!(mean_luminance(&[0, 255], 1), 128.0);
        assert_eq!(mean_luminance(&[10, 10, 10, 20, 20, 20], 3), 15.0);
        assert_eq!(mean_luminance(&[], 4), MIDPOINT_GRAY);
    }
}
