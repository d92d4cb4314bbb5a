use crate::error::{AsciiError, Result};
use std::ops::RangeInclusive;

/// Character ramp used when none is supplied, darkest first
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// Output columns used by default
pub const DEFAULT_WIDTH: u32 = 100;

/// Ranges offered by interactive controls
pub const WIDTH_RANGE: RangeInclusive<u32> = 50..=300;
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.1..=3.0;
pub const CONTRAST_RANGE: RangeInclusive<f32> = 0.1..=3.0;
pub const SATURATION_RANGE: RangeInclusive<f32> = 0.0..=3.0;

/// Gray level that contrast scaling pushes values away from (or pulls them toward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContrastPivot {
    /// Fixed mid-gray (128)
    #[default]
    Midpoint,
    /// Rounded mean luma of the image being adjusted
    MeanLuminance,
}

impl ContrastPivot {
    pub fn label(&self) -> &'static str {
        match self {
            ContrastPivot::Midpoint => "Mid-gray",
            ContrastPivot::MeanLuminance => "Image mean",
        }
    }
}

/// Photometric adjustments applied before rendering
#[derive(Debug, Clone, PartialEq)]
pub struct EnhanceConfig {
    pub brightness: f32,     // 0.1-3.0, default 1.0
    pub contrast: f32,       // 0.1-3.0, default 1.0
    pub saturation: f32,     // 0.0-3.0, default 1.0
    pub grayscale: bool,     // default false
    pub invert_colors: bool, // default false
    pub contrast_pivot: ContrastPivot,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            grayscale: false,
            invert_colors: false,
            contrast_pivot: ContrastPivot::Midpoint,
        }
    }
}

impl EnhanceConfig {
    /// Validates the enhancement factors
    ///
    /// Factors only need to be finite and non-negative; the UI ranges are advisory.
    pub fn validate(&self) -> Result<()> {
        check_factor("brightness", self.brightness)?;
        check_factor("contrast", self.contrast)?;
        check_factor("saturation", self.saturation)?;
        Ok(())
    }
}

fn check_factor(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AsciiError::invalid_parameter(
            name,
            format!("must be a finite non-negative number, got {}", value),
        ));
    }
    Ok(())
}

/// Text grid settings
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output columns, at least 1
    pub width: u32,
    /// Characters ordered darkest to lightest; empty means [`DEFAULT_RAMP`]
    pub ramp: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            ramp: DEFAULT_RAMP.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        check_width(self.width)
    }

    /// The ramp actually used for mapping, with the default substituted for an empty one
    pub fn effective_ramp(&self) -> Vec<char> {
        effective_ramp(&self.ramp)
    }
}

pub(crate) fn check_width(width: u32) -> Result<()> {
    if width < 1 {
        return Err(AsciiError::invalid_parameter(
            "width",
            format!("must be at least 1, got {}", width),
        ));
    }
    Ok(())
}

pub(crate) fn effective_ramp(ramp: &str) -> Vec<char> {
    if ramp.is_empty() {
        DEFAULT_RAMP.chars().collect()
    } else {
        ramp.chars().collect()
    }
}

/// Configuration for a full image to ASCII conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsciiConfig {
    pub enhance: EnhanceConfig,
    pub render: RenderConfig,
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        self.enhance.validate()?;
        self.render.validate()
    }
}
