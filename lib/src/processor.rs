use crate::ascii::{AsciiArt, render};
use crate::config::AsciiConfig;
use crate::enhance::enhance;
use crate::error::Result;
use image::DynamicImage;

/// Output of a full conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The adjusted image that was rendered, kept for preview
    pub enhanced: DynamicImage,
    /// The text rendering
    pub art: AsciiArt,
}

/// Processes an input image and converts it to ASCII art
///
/// 1. Validate the whole configuration up front
/// 2. Apply grayscale/invert/brightness/contrast/saturation adjustments
/// 3. Render the adjusted image to text
///
/// # Arguments
/// * `input` - The decoded image to convert
/// * `config` - Enhancement and rendering settings for this call
///
/// # Returns
/// The enhanced image together with its ASCII rendering
pub fn process_image(input: &DynamicImage, config: &AsciiConfig) -> Result<Conversion> {
    config.validate()?;

    let enhanced = enhance(input, &config.enhance)?;
    let art = render(&enhanced, config.render.width, &config.render.ramp)?;

    log::debug!(
        "converted {}x{} image to {} lines of {} characters",
        input.width(),
        input.height(),
        art.height(),
        art.width()
    );

    Ok(Conversion { enhanced, art })
}
