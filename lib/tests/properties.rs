use ascii_creator::{AsciiConfig, DEFAULT_RAMP, EnhanceConfig, enhance, process_image, render};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use proptest::prelude::*;

fn arb_rgb_image() -> impl Strategy<Value = DynamicImage> {
    (1u32..24, 1u32..24)
        .prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 3) as usize)
                .prop_map(move |data| RgbImage::from_raw(w, h, data).unwrap())
        })
        .prop_map(DynamicImage::ImageRgb8)
}

fn arb_rgba_image() -> impl Strategy<Value = DynamicImage> {
    (1u32..16, 1u32..16)
        .prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 4) as usize)
                .prop_map(move |data| RgbaImage::from_raw(w, h, data).unwrap())
        })
        .prop_map(DynamicImage::ImageRgba8)
}

/// Default ramp index computed independently: interval = 255 / 9 = 28
fn default_ramp_char(lum: u8) -> char {
    let index = (lum as usize / 28).min(9);
    DEFAULT_RAMP.chars().nth(index).unwrap()
}

proptest! {
    #[test]
    fn uniform_image_renders_one_character(
        width in 1u32..80,
        height in 1u32..80,
        lum in any::<u8>(),
    ) {
        // stay clear of exact .5 products where float rounding of the aspect ratio matters
        prop_assume!(height % 20 != 10);

        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([lum])));
        let art = render(&img, width, "").unwrap();

        let expected_rows = ((height as f64 * 0.55).round() as usize).max(1);
        prop_assert_eq!(art.height(), expected_rows);

        let expected = default_ramp_char(lum);
        for line in art.lines() {
            prop_assert_eq!(line.chars().count(), width as usize);
            prop_assert!(line.chars().all(|c| c == expected));
        }
    }

    #[test]
    fn every_line_has_requested_width(img in arb_rgb_image(), width in 1u32..150) {
        let art = render(&img, width, "").unwrap();
        let (last, full) = art.lines().split_last().unwrap();
        for line in full {
            prop_assert_eq!(line.chars().count(), width as usize);
        }
        prop_assert!(last.chars().count() <= width as usize);
    }

    #[test]
    fn empty_ramp_equals_default_ramp(img in arb_rgb_image(), width in 1u32..60) {
        prop_assert_eq!(render(&img, width, "").unwrap(), render(&img, width, DEFAULT_RAMP).unwrap());
    }

    #[test]
    fn invert_twice_is_identity(img in arb_rgba_image(), grayscale in any::<bool>()) {
        let base = enhance(&img, &EnhanceConfig { grayscale, ..Default::default() }).unwrap();
        let invert = EnhanceConfig { invert_colors: true, ..Default::default() };
        let twice = enhance(&enhance(&base, &invert).unwrap(), &invert).unwrap();
        prop_assert_eq!(twice, base);
    }

    #[test]
    fn default_enhancement_is_identity(img in arb_rgba_image()) {
        prop_assert_eq!(enhance(&img, &EnhanceConfig::default()).unwrap(), img);
    }

    #[test]
    fn enhancement_keeps_dimensions(
        img in arb_rgb_image(),
        brightness in 0.1f32..=3.0,
        contrast in 0.1f32..=3.0,
        saturation in 0.0f32..=3.0,
        grayscale in any::<bool>(),
        invert_colors in any::<bool>(),
    ) {
        let config = EnhanceConfig {
            brightness,
            contrast,
            saturation,
            grayscale,
            invert_colors,
            ..Default::default()
        };
        let out = enhance(&img, &config).unwrap();
        prop_assert_eq!((out.width(), out.height()), (img.width(), img.height()));
    }
}

#[test]
fn ramp_boundary_two_characters() {
    let mut dark = GrayImage::from_pixel(1, 1, Luma([254]));
    let art = render(&DynamicImage::ImageLuma8(dark.clone()), 1, "AB").unwrap();
    assert_eq!(art.to_string(), "A");

    dark.put_pixel(0, 0, Luma([255]));
    let art = render(&DynamicImage::ImageLuma8(dark), 1, "AB").unwrap();
    assert_eq!(art.to_string(), "B");
}

#[test]
fn full_pipeline_on_color_image() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(120, 80, |x, _| {
        let v = (x * 255 / 119) as u8;
        Rgba([v, v, v, 255])
    }));
    let mut config = AsciiConfig::default();
    config.render.width = 60;

    let result = process_image(&img, &config).unwrap();
    assert_eq!(result.art.height(), 22); // 80 / 120 * 60 * 0.55 = 22
    for line in result.art.lines() {
        assert!(line.starts_with('@'));
        assert!(line.ends_with(' '));
    }
}

#[test]
fn color_and_gray_inputs_render_alike() {
    let rgb = RgbImage::from_fn(30, 20, |x, y| {
        let v = ((x * 8 + y * 3) % 256) as u8;
        Rgb([v, v, v])
    });
    let gray = GrayImage::from_fn(30, 20, |x, y| Luma([((x * 8 + y * 3) % 256) as u8]));

    let from_rgb = render(&DynamicImage::ImageRgb8(rgb), 15, "").unwrap();
    let from_gray = render(&DynamicImage::ImageLuma8(gray), 15, "").unwrap();
    assert_eq!(from_rgb, from_gray);
}
