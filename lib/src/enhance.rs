//! Photometric adjustments applied ahead of rendering
//!
//! Every step is a pointwise map over 8-bit samples, run in a fixed order:
//! grayscale, invert, brightness, contrast, saturation. The input image is never
//! touched; a new image is returned.

use crate::config::{ContrastPivot, EnhanceConfig};
use crate::error::Result;
use crate::filters::{
    MIDPOINT_GRAY, blend_channel, calculate_luminance, calculate_luminance_rgb, luma,
    mean_luminance,
};
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use rayon::prelude::*;

/// 8-bit working copy of an image, in one of the layouts the enhancer supports
enum Raster {
    Gray(GrayImage),
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Raster {
    fn from_image(image: &DynamicImage) -> Self {
        match image {
            DynamicImage::ImageLuma8(gray) => Raster::Gray(gray.clone()),
            DynamicImage::ImageRgb8(rgb) => Raster::Rgb(rgb.clone()),
            DynamicImage::ImageRgba8(rgba) => Raster::Rgba(rgba.clone()),
            DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_) => Raster::Gray(image.to_luma8()),
            other if other.color().has_alpha() => Raster::Rgba(other.to_rgba8()),
            other => Raster::Rgb(other.to_rgb8()),
        }
    }

    fn into_image(self) -> DynamicImage {
        match self {
            Raster::Gray(img) => DynamicImage::ImageLuma8(img),
            Raster::Rgb(img) => DynamicImage::ImageRgb8(img),
            Raster::Rgba(img) => DynamicImage::ImageRgba8(img),
        }
    }

    /// Samples per pixel
    fn stride(&self) -> usize {
        match self {
            Raster::Gray(_) => 1,
            Raster::Rgb(_) => 3,
            Raster::Rgba(_) => 4,
        }
    }

    /// Samples per pixel that carry color (alpha excluded)
    fn color_channels(&self) -> usize {
        match self {
            Raster::Gray(_) => 1,
            Raster::Rgb(_) | Raster::Rgba(_) => 3,
        }
    }

    fn samples(&self) -> &[u8] {
        match self {
            Raster::Gray(img) => &**img,
            Raster::Rgb(img) => &**img,
            Raster::Rgba(img) => &**img,
        }
    }

    fn samples_mut(&mut self) -> &mut [u8] {
        match self {
            Raster::Gray(img) => &mut **img,
            Raster::Rgb(img) => &mut **img,
            Raster::Rgba(img) => &mut **img,
        }
    }

    fn into_grayscale(self) -> Self {
        match self {
            Raster::Gray(img) => Raster::Gray(img),
            Raster::Rgb(img) => Raster::Gray(calculate_luminance_rgb(&img)),
            Raster::Rgba(img) => Raster::Gray(calculate_luminance(&img)),
        }
    }

    /// Apply `f` to every color sample, leaving alpha alone
    fn map_channels<F>(mut self, f: F) -> Self
    where
        F: Fn(u8) -> u8 + Sync,
    {
        let stride = self.stride();
        let color = self.color_channels();
        self.samples_mut()
            .par_chunks_exact_mut(stride)
            .for_each(|px| {
                for sample in &mut px[..color] {
                    *sample = f(*sample);
                }
            });
        self
    }

    /// Blend each pixel with its own luma; single-channel images are returned as-is
    fn blend_with_luma(mut self, factor: f32) -> Self {
        if self.color_channels() < 3 {
            return self;
        }

        let stride = self.stride();
        self.samples_mut()
            .par_chunks_exact_mut(stride)
            .for_each(|px| {
                let gray = luma(px[0], px[1], px[2]) as f32;
                for sample in &mut px[..3] {
                    *sample = blend_channel(gray, *sample, factor);
                }
            });
        self
    }
}

/// Apply the configured adjustments to a copy of `image`
///
/// Steps run in this order, each seeing the result of the previous one:
/// 1. Grayscale conversion (drops color and alpha)
/// 2. Inversion (`255 - v`)
/// 3. Brightness (`v * brightness`)
/// 4. Contrast around the configured pivot
/// 5. Saturation, blending each pixel with its luma (no-op on gray images)
///
/// # Errors
/// [`AsciiError::InvalidParameter`](crate::AsciiError::InvalidParameter) when a
/// factor is negative or not finite.
///
/// # Note
/// Images with more than 8 bits per sample are narrowed to 8 bits. A zero-size
/// image comes back as an empty image of the same layout.
pub fn enhance(image: &DynamicImage, config: &EnhanceConfig) -> Result<DynamicImage> {
    config.validate()?;

    let mut raster = Raster::from_image(image);
    log::trace!(
        "enhancing {}x{} image ({} samples/pixel)",
        image.width(),
        image.height(),
        raster.stride()
    );

    if config.grayscale {
        raster = raster.into_grayscale();
    }

    if config.invert_colors {
        raster = raster.map_channels(|v| 255 - v);
    }

    if config.brightness != 1.0 {
        let factor = config.brightness;
        raster = raster.map_channels(|v| blend_channel(0.0, v, factor));
    }

    if config.contrast != 1.0 {
        let pivot = match config.contrast_pivot {
            ContrastPivot::Midpoint => MIDPOINT_GRAY,
            ContrastPivot::MeanLuminance => mean_luminance(raster.samples(), raster.stride()),
        };
        let factor = config.contrast;
        raster = raster.map_channels(|v| blend_channel(pivot, v, factor));
    }

    if config.saturation != 1.0 {
        raster = raster.blend_with_luma(config.saturation);
    }

    Ok(raster.into_image())
}
