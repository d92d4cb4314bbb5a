//! ASCII Art Creator - image to text art converter
//!
//! Adjusts a decoded image (grayscale, invert, brightness, contrast,
//! saturation), then resamples it to a character grid and maps each sample's
//! luminance onto a character ramp.
//!
//! # Example
//! ```no_run
//! use ascii_creator::{process_image, AsciiConfig};
//!
//! let input = image::open("photo.jpg").unwrap();
//! let mut config = AsciiConfig::default();
//! config.render.width = 120;
//! config.enhance.contrast = 1.4;
//! let conversion = process_image(&input, &config).unwrap();
//! println!("{}", conversion.art);
//! ```

pub mod ascii;
pub mod config;
pub mod enhance;
pub mod error;
pub mod filters;
pub mod lut;
pub mod processor;

// Re-export main types for convenience
pub use ascii::{AsciiArt, render};
pub use config::{AsciiConfig, ContrastPivot, DEFAULT_RAMP, EnhanceConfig, RenderConfig};
pub use enhance::enhance;
pub use error::{AsciiError, Result};
pub use processor::{Conversion, process_image};

/// Any decoded raster the pipeline accepts
pub type DecodedImage = image::DynamicImage;
