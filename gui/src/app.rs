use ascii_creator::config::{
    BRIGHTNESS_RANGE, CONTRAST_RANGE, DEFAULT_RAMP, SATURATION_RANGE, WIDTH_RANGE,
};
use ascii_creator::{AsciiConfig, ContrastPivot, Conversion, process_image};
use eframe::egui;
use image::DynamicImage;
use std::time::Instant;

/// Main application state for the ASCII art GUI
pub struct AsciiApp {
    /// Uploaded image (decoded)
    input_image: Option<DynamicImage>,
    /// File name of the uploaded image, for captions
    source_name: Option<String>,
    /// Result of the last successful conversion
    conversion: Option<Conversion>,
    /// Text of the last conversion, cached for display and export
    ascii_text: String,
    /// Settings collected from the controls
    config: AsciiConfig,

    /// Texture handle for uploaded image display
    input_texture: Option<egui::TextureHandle>,
    /// Texture handle for enhanced image display
    enhanced_texture: Option<egui::TextureHandle>,

    /// Whether to automatically reconvert when settings change
    auto_process: bool,
    /// Flag indicating settings have changed and reconversion is needed
    needs_reprocess: bool,

    /// Last conversion time in milliseconds
    last_process_time_ms: f64,
    /// Error message to display (if any)
    error_message: Option<String>,
}

impl Default for AsciiApp {
    fn default() -> Self {
        Self {
            input_image: None,
            source_name: None,
            conversion: None,
            ascii_text: String::new(),
            config: AsciiConfig::default(),
            input_texture: None,
            enhanced_texture: None,
            auto_process: true,
            needs_reprocess: false,
            last_process_time_ms: 0.0,
            error_message: None,
        }
    }
}

impl AsciiApp {
    /// Create a new ASCII art application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Load an image from file path
    pub fn load_image(&mut self, path: &std::path::Path) {
        match image::open(path) {
            Ok(img) => {
                log::info!(
                    "loaded {} ({}x{})",
                    path.display(),
                    img.width(),
                    img.height()
                );
                self.source_name = path.file_name().map(|n| n.to_string_lossy().into_owned());
                self.input_image = Some(img);
                self.conversion = None;
                self.ascii_text.clear();
                self.input_texture = None; // Clear old textures
                self.enhanced_texture = None;
                self.needs_reprocess = true;
                self.error_message = None;
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", path.display(), e);
                self.error_message = Some(format!("Failed to load image: {}", e));
            }
        }
    }

    /// Save the ASCII art to a text file
    pub fn save_output(&self, path: &std::path::Path) -> Result<(), String> {
        if self.conversion.is_none() {
            return Err("No ASCII art to save".to_string());
        }
        std::fs::write(path, &self.ascii_text).map_err(|e| format!("Failed to save: {}", e))
    }

    /// Convert the uploaded image with the current settings
    fn process(&mut self) {
        let Some(ref input) = self.input_image else {
            return;
        };

        let start = Instant::now();
        match process_image(input, &self.config) {
            Ok(conversion) => {
                self.last_process_time_ms = start.elapsed().as_secs_f64() * 1000.0;
                self.ascii_text = conversion.art.to_string();
                self.conversion = Some(conversion);
                self.enhanced_texture = None; // Clear old texture
                self.error_message = None;
            }
            Err(e) => {
                log::warn!("conversion failed: {}", e);
                self.error_message = Some(format!("Conversion failed: {}", e));
            }
        }
        self.needs_reprocess = false;
    }

    /// Render the control panel UI
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Controls");
        ui.separator();

        ui.collapsing("Adjust Image", |ui| {
            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.enhance.brightness, BRIGHTNESS_RANGE)
                        .text("Brightness"),
                )
                .on_hover_text("Scale every channel (1.0 = unchanged)")
                .changed();

            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.enhance.contrast, CONTRAST_RANGE)
                        .text("Contrast"),
                )
                .on_hover_text("Push values away from (or toward) the pivot gray")
                .changed();

            egui::ComboBox::from_label("Contrast Pivot")
                .selected_text(self.config.enhance.contrast_pivot.label())
                .show_ui(ui, |ui| {
                    for pivot in [ContrastPivot::Midpoint, ContrastPivot::MeanLuminance] {
                        changed |= ui
                            .selectable_value(
                                &mut self.config.enhance.contrast_pivot,
                                pivot,
                                pivot.label(),
                            )
                            .changed();
                    }
                });

            changed |= ui
                .add(
                    egui::Slider::new(&mut self.config.enhance.saturation, SATURATION_RANGE)
                        .text("Saturation"),
                )
                .on_hover_text("0.0 = gray, 1.0 = unchanged, above 1.0 = exaggerated")
                .changed();

            changed |= ui
                .checkbox(&mut self.config.enhance.grayscale, "Grayscale")
                .changed();

            changed |= ui
                .checkbox(&mut self.config.enhance.invert_colors, "Invert Colors")
                .changed();
        });

        ui.add_space(8.0);

        ui.collapsing("ASCII", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut self.config.render.width, WIDTH_RANGE).text("Width"))
                .on_hover_text("Characters per line")
                .changed();

            ui.label("Custom Characters (darkest first)");
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut self.config.render.ramp)
                        .font(egui::TextStyle::Monospace)
                        .hint_text(DEFAULT_RAMP),
                )
                .on_hover_text("Leave empty to use the default ramp")
                .changed();
        });

        ui.add_space(8.0);

        if ui.button("Reset").clicked() {
            self.config = AsciiConfig::default();
            changed = true;
        }

        ui.add_space(16.0);
        ui.separator();

        // Auto-process toggle
        ui.checkbox(&mut self.auto_process, "Auto-convert")
            .on_hover_text("Reconvert whenever a setting changes");

        // Manual convert button
        ui.add_enabled_ui(self.input_image.is_some(), |ui| {
            if ui.button("Convert").clicked() {
                self.process();
            }
        });

        // Show processing time
        if self.last_process_time_ms > 0.0 {
            ui.label(format!("Last conversion: {:.1} ms", self.last_process_time_ms));
        }

        changed
    }

    /// Convert a decoded image to egui ColorImage
    fn to_color_image(img: &DynamicImage) -> egui::ColorImage {
        let rgba = img.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
    }

    /// Display an image in the UI (standalone helper function)
    fn display_image(
        ui: &mut egui::Ui,
        image: Option<&DynamicImage>,
        texture: &mut Option<egui::TextureHandle>,
        label: &str,
        max_height: f32,
    ) {
        ui.vertical(|ui| {
            ui.heading(label);

            if let Some(img) = image {
                // Update texture if needed
                if texture.is_none() {
                    let color_image = Self::to_color_image(img);
                    *texture = Some(ui.ctx().load_texture(
                        label,
                        color_image,
                        egui::TextureOptions::default(),
                    ));
                }

                // Display the texture
                if let Some(tex) = texture {
                    let size = tex.size_vec2();
                    let max_width = ui.available_width();
                    // Never upscale previews
                    let scale = (max_width / size.x).min(max_height / size.y).min(1.0);
                    let display_size = size * scale;

                    ui.image((tex.id(), display_size));
                    ui.label(format!("{}x{}", img.width(), img.height()));
                }
            } else {
                ui.label("No image loaded");
            }
        });
    }

    /// Display the ASCII art as monospace text
    fn display_ascii(ui: &mut egui::Ui, text: &str, has_output: bool) {
        ui.heading("ASCII Art");

        if !has_output {
            ui.label("ASCII Art will be displayed here after conversion.");
            return;
        }

        egui::ScrollArea::both()
            .id_salt("ascii_output")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(egui::RichText::new(text).monospace().size(8.0))
                        .wrap_mode(egui::TextWrapMode::Extend),
                );
            });
    }
}

impl eframe::App for AsciiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
                            .pick_file()
                        {
                            self.load_image(&path);
                        }
                        ui.close();
                    }

                    if ui.button("Save ASCII...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Text", &["txt"])
                            .set_file_name("ascii_art.txt")
                            .save_file()
                            && let Err(e) = self.save_output(&path)
                        {
                            log::warn!("{}", e);
                            self.error_message = Some(e);
                        }
                        ui.close();
                    }

                    if ui.button("Copy ASCII").clicked() {
                        if self.conversion.is_some() {
                            ctx.copy_text(self.ascii_text.clone());
                        }
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.error_message = Some(
                            "ASCII Art Creator\nTurns images into text art\n\nBuilt with Rust + egui"
                                .to_string(),
                        );
                        ui.close();
                    }
                });
            });
        });

        // Left panel: Controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let changed = self.render_controls(ui);

                    if changed {
                        self.needs_reprocess = true;
                    }
                });
            });

        // Central panel: previews and output
        egui::CentralPanel::default().show(ctx, |ui| {
            // Show error message if any
            if let Some(ref msg) = self.error_message {
                ui.colored_label(egui::Color32::RED, msg);
                if ui.button("Clear Error").clicked() {
                    self.error_message = None;
                }
                ui.separator();
            }

            if self.input_image.is_none() {
                ui.label("Open an image to get started.");
                return;
            }

            // Auto-process if needed
            if self.auto_process && self.needs_reprocess {
                self.process();
            }

            ui.horizontal(|ui| {
                let available_width = ui.available_width();
                let preview_width = available_width / 3.0 - 8.0;
                let preview_height = ui.available_height() / 2.0 - 40.0;

                ui.allocate_ui_with_layout(
                    egui::vec2(preview_width, ui.available_height()),
                    egui::Layout::top_down(egui::Align::Center),
                    |ui| {
                        let caption = self.source_name.as_deref().unwrap_or("Uploaded Image");
                        Self::display_image(
                            ui,
                            self.input_image.as_ref(),
                            &mut self.input_texture,
                            caption,
                            preview_height,
                        );

                        ui.separator();

                        Self::display_image(
                            ui,
                            self.conversion.as_ref().map(|c| &c.enhanced),
                            &mut self.enhanced_texture,
                            "Enhanced",
                            preview_height,
                        );
                    },
                );

                ui.separator();

                ui.allocate_ui_with_layout(
                    egui::vec2(ui.available_width(), ui.available_height()),
                    egui::Layout::top_down(egui::Align::Min),
                    |ui| {
                        Self::display_ascii(ui, &self.ascii_text, self.conversion.is_some());
                    },
                );
            });
        });
    }
}
