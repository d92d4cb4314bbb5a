use crate::config::{check_width, effective_ramp};
use crate::error::{AsciiError, Result};
use crate::filters::to_luminance;
use crate::lut::LuminanceLut;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};
use rayon::prelude::*;
use std::fmt;

/// Vertical squash applied to the grid so monospace glyphs (taller than wide)
/// don't stretch the picture
pub const VERTICAL_COMPRESSION: f64 = 0.55;

/// Resampling filter used to build the character grid
pub const GRID_FILTER: FilterType = FilterType::Triangle;

/// Rendered text art, one `String` per row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    lines: Vec<String>,
    width: u32,
}

impl AsciiArt {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Characters per full line
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Lines joined with `'\n'`, without a trailing newline
    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Number of text rows for an image rendered `width` characters wide
///
/// `round(src_height / src_width * width * 0.55)`, never less than 1.
pub fn grid_height(src_width: u32, src_height: u32, width: u32) -> u32 {
    let aspect_ratio = src_height as f64 / src_width as f64;
    let rows = (aspect_ratio * width as f64 * VERTICAL_COMPRESSION).round();

    // `as` saturates, so a degenerate ratio can't wrap
    (rows as u32).max(1)
}

/// Resample luminance to the character grid
pub fn downsample(lum: &GrayImage, width: u32, height: u32) -> GrayImage {
    imageops::resize(lum, width, height, GRID_FILTER)
}

/// Map every luminance sample to its ramp character
pub fn select_ascii_chars(samples: &[u8], lut: &LuminanceLut) -> Vec<char> {
    samples.par_iter().map(|&lum| lut.map(lum)).collect()
}

/// Split row-major characters into lines of `width`; the last line may be shorter
pub fn split_lines(chars: &[char], width: usize) -> Vec<String> {
    chars
        .par_chunks(width)
        .map(|row| row.iter().collect())
        .collect()
}

/// Render an image as ASCII art
///
/// The pipeline:
/// 1. Extract luminance
/// 2. Size the grid: `width` columns, [`grid_height`] rows
/// 3. Resample luminance to the grid with [`GRID_FILTER`]
/// 4. Map each sample through the ramp (empty ramp means the default one)
/// 5. Cut the characters into lines of `width`
///
/// # Arguments
/// * `image` - The decoded image to convert
/// * `width` - Target number of character columns
/// * `ramp` - Characters ordered from darkest to lightest
///
/// # Errors
/// `InvalidParameter` for a zero width, `InvalidState` when the image has no
/// pixels to sample.
pub fn render(image: &DynamicImage, width: u32, ramp: &str) -> Result<AsciiArt> {
    check_width(width)?;

    let (src_width, src_height) = (image.width(), image.height());
    if src_width == 0 || src_height == 0 {
        return Err(AsciiError::InvalidState(format!(
            "cannot sample a {}x{} image",
            src_width, src_height
        )));
    }

    let lum = to_luminance(image);
    let height = grid_height(src_width, src_height, width);
    let grid = downsample(&lum, width, height);

    if grid.as_raw().is_empty() {
        return Err(AsciiError::InvalidState(format!(
            "resampling {}x{} to {}x{} produced no samples",
            src_width, src_height, width, height
        )));
    }

    log::debug!(
        "rendering {}x{} image as {}x{} characters",
        src_width,
        src_height,
        grid.width(),
        grid.height()
    );

    let lut = LuminanceLut::new(&effective_ramp(ramp));
    let chars = select_ascii_chars(grid.as_raw(), &lut);

    Ok(AsciiArt {
        lines: split_lines(&chars, width as usize),
        width,
    })
}
