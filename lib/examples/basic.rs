/// Basic example: Convert a simple test image to ASCII art
///
/// This creates a test image with some basic shapes, adjusts it and prints the
/// text rendering
use ascii_creator::{AsciiConfig, ContrastPivot, EnhanceConfig, RenderConfig, process_image};
use image::{DynamicImage, Rgb, RgbImage};

fn main() {
    println!("ASCII Art Creator - Basic Example");
    println!("=================================\n");

    // Create a simple 160x120 test image
    let width = 160;
    let height = 120;
    let mut img = RgbImage::from_pixel(width, height, Rgb([60, 60, 90]));

    // Draw a bright disc in the center with a soft falloff
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 45.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                let shade = (255.0 * (1.0 - dist / radius * 0.6)) as u8;
                img.put_pixel(x, y, Rgb([shade, shade / 2, 40]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let config = AsciiConfig {
        enhance: EnhanceConfig {
            brightness: 1.1,
            contrast: 1.3,
            saturation: 1.0,
            grayscale: false,
            invert_colors: true,
            contrast_pivot: ContrastPivot::Midpoint,
        },
        render: RenderConfig {
            width: 80,
            ramp: "@%#*+=-:. ".to_string(),
        },
    };

    println!("Processing with config:");
    println!("  - Width: {}", config.render.width);
    println!("  - Brightness: {}", config.enhance.brightness);
    println!("  - Contrast: {}", config.enhance.contrast);
    println!("  - Invert: {}", config.enhance.invert_colors);
    println!();

    let conversion =
        process_image(&DynamicImage::ImageRgb8(img), &config).expect("Conversion failed");

    println!("{}", conversion.art);
    println!(
        "\n{} lines of {} characters",
        conversion.art.height(),
        conversion.art.width()
    );
}
