mod app;

use app::AsciiApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Configure logging (RUST_LOG=debug shows pipeline details)
    env_logger::init();

    // Configure viewport/window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("ASCII Art Creator")
            .with_icon(load_icon()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ASCII Art Creator",
        options,
        Box::new(|cc| Ok(Box::new(AsciiApp::new(cc)))),
    )
}

/// Application icon: the default ramp as vertical bands, darkest on the left
fn load_icon() -> egui::IconData {
    let icon_size = 32;
    let bands = ascii_creator::DEFAULT_RAMP.chars().count();
    let mut pixels = vec![0u8; icon_size * icon_size * 4];

    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;
            let band = x * bands / icon_size;
            let level = (band * 255 / (bands - 1)) as u8;

            // Leave a dark border so the bands read at small sizes
            let border = x == 0 || y == 0 || x == icon_size - 1 || y == icon_size - 1;
            let level = if border { 0 } else { level };

            pixels[idx] = level / 2; // R
            pixels[idx + 1] = level; // G
            pixels[idx + 2] = level / 2; // B
            pixels[idx + 3] = 255; // A
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
