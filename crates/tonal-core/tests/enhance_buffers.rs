//! End-to-end checks of the two buffer passes as a host would call them.

use approx::assert_abs_diff_eq;
use palette::{FromColor, Hsl, Srgb};

use tonal_core::color_space::{hsl_to_rgb, rgb_to_hsl};
use tonal_core::grading::brightness_contrast::enhance_brightness;
use tonal_core::numeric::{normalize, quantize};
use tonal_core::{
    Adjustments, ChannelLayout, EnhanceConfig, EnhanceError, ManipulationKind, Manipulations,
    brightness_contrast, hue_saturation_lightness,
};

/// Pack a list of RGBA pixels into `layout` order.
fn packed(layout: ChannelLayout, rgba: &[[u8; 4]]) -> Vec<u8> {
    let mut data = rgba.concat();
    layout.pack_rgba(&mut data).expect("whole pixels");
    data
}

/// A deterministic spread of colors, including grays and the extremes.
fn sample_pixels() -> Vec<[u8; 4]> {
    let mut pixels = vec![[0, 0, 0, 0], [255, 255, 255, 255], [128, 128, 128, 17]];
    let mut seed = 0x2545_f491_u32;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        pixels.push(seed.to_le_bytes());
    }
    pixels
}

fn alpha_bytes(data: &[u8], layout: ChannelLayout) -> Vec<u8> {
    data.chunks_exact(4).map(|px| px[layout.alpha()]).collect()
}

#[test]
fn alpha_is_preserved_by_both_passes() {
    for &layout in ChannelLayout::all() {
        let original = packed(layout, &sample_pixels());
        let alpha = alpha_bytes(&original, layout);

        let mut data = original.clone();
        brightness_contrast(&mut data, 0.4, -0.7, layout).unwrap();
        assert_eq!(alpha_bytes(&data, layout), alpha, "{layout}: brightness/contrast");

        let mut data = original;
        hue_saturation_lightness(&mut data, -75.0, 0.6, -0.2, layout).unwrap();
        assert_eq!(alpha_bytes(&data, layout), alpha, "{layout}: hue/saturation/lightness");
    }
}

#[test]
fn zero_brightness_contrast_is_exact_identity() {
    let layout = ChannelLayout::LittleEndian;
    let original = packed(layout, &sample_pixels());
    let mut data = original.clone();
    brightness_contrast(&mut data, 0.0, 0.0, layout).unwrap();
    assert_eq!(data, original);
}

#[test]
fn full_brightness_drives_color_to_white() {
    let layout = ChannelLayout::Other;
    let mut data = packed(layout, &sample_pixels());
    brightness_contrast(&mut data, 1.0, 0.0, layout).unwrap();
    for px in data.chunks_exact(4) {
        for offset in layout.rgb() {
            assert_eq!(px[offset], 255, "{px:?}");
        }
    }
}

#[test]
fn brightness_scenario_little_endian() {
    let layout = ChannelLayout::LittleEndian;
    let mut data = packed(layout, &[[10, 20, 30, 255]]);
    assert_eq!(data, [30, 20, 10, 255]);

    brightness_contrast(&mut data, 0.2, 0.0, layout).unwrap();

    let expected = |byte: u8| quantize(enhance_brightness(normalize(byte), 0.2));
    assert_eq!(data[layout.red()], expected(10));
    assert_eq!(data[layout.green()], expected(20));
    assert_eq!(data[layout.blue()], expected(30));
    assert_eq!(data[layout.alpha()], 255);
    assert!(data[layout.red()] > 10);
}

#[test]
fn partial_pixel_is_rejected_without_mutation() {
    let mut data = [10u8, 20, 30, 255, 40];
    let err = brightness_contrast(&mut data, 0.5, 0.5, ChannelLayout::LittleEndian).unwrap_err();
    assert!(matches!(err, EnhanceError::InvalidInput { len: 5 }));
    let err = hue_saturation_lightness(&mut data, 90.0, 0.5, 0.5, ChannelLayout::LittleEndian)
        .unwrap_err();
    assert!(matches!(err, EnhanceError::InvalidInput { len: 5 }));
    assert_eq!(data, [10, 20, 30, 255, 40]);
}

#[test]
fn out_of_range_factors_are_clamped_not_rejected() {
    let layout = ChannelLayout::LittleEndian;

    // Contrast below -1 uses the flattest slope, so every channel lands on
    // mid-gray whatever brightness did before it.
    let mut data = packed(layout, &[[10, 20, 30, 255]]);
    brightness_contrast(&mut data, 5.0, -3.0, layout).unwrap();
    assert_eq!(data, [127, 127, 127, 255]);

    let mut data = packed(layout, &[[10, 200, 128, 9]]);
    brightness_contrast(&mut data, 3.0, 0.0, layout).unwrap();
    assert_eq!(data, [255, 255, 255, 9]);

    let mut data = packed(layout, &[[10, 200, 128, 9]]);
    brightness_contrast(&mut data, -4.0, 0.0, layout).unwrap();
    assert_eq!(data, [0, 0, 0, 9]);

    let mut data = packed(layout, &[[10, 200, 128, 9]]);
    hue_saturation_lightness(&mut data, 0.0, 0.0, 7.5, layout).unwrap();
    assert_eq!(data, [255, 255, 255, 9]);
}

#[test]
fn neutral_hsl_is_near_identity() {
    for &layout in ChannelLayout::all() {
        let original = packed(layout, &sample_pixels());
        let mut data = original.clone();
        hue_saturation_lightness(&mut data, 0.0, 0.0, 0.0, layout).unwrap();
        for (i, (before, after)) in original.iter().zip(&data).enumerate() {
            assert!(before.abs_diff(*after) <= 1, "{layout} byte {i}: {before} -> {after}");
        }
    }
}

#[test]
fn gray_pixel_survives_hue_rotation() {
    let layout = ChannelLayout::LittleEndian;
    let mut data = packed(layout, &[[128, 128, 128, 255]]);
    hue_saturation_lightness(&mut data, 180.0, 0.0, 0.0, layout).unwrap();
    for offset in layout.rgb() {
        assert!(data[offset].abs_diff(128) <= 1, "{data:?}");
    }
}

#[test]
fn rgb_hsl_roundtrip_over_byte_grid() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(15) {
                let rgb = [normalize(r), normalize(g), normalize(b)];
                let (h, s, l) = rgb_to_hsl(rgb);
                let back = hsl_to_rgb(h, s, l);
                for c in 0..3 {
                    assert_abs_diff_eq!(back[c], rgb[c], epsilon = 1e-5);
                }
            }
        }
    }
}

#[test]
fn rgb_to_hsl_agrees_with_palette() {
    for px in sample_pixels() {
        let rgb = [normalize(px[0]), normalize(px[1]), normalize(px[2])];
        let (h, s, l) = rgb_to_hsl(rgb);
        let reference: Hsl = Hsl::from_color(Srgb::new(rgb[0], rgb[1], rgb[2]));

        assert_abs_diff_eq!(l, reference.lightness, epsilon = 1e-5);
        assert_abs_diff_eq!(s, reference.saturation, epsilon = 1e-3);
        if s > 1e-3 {
            let expected = reference.hue.into_positive_degrees();
            let diff = (h - expected).abs();
            assert!(diff.min(360.0 - diff) < 1e-2, "{px:?}: hue {h} vs {expected}");
        }
    }
}

#[test]
fn sliders_drive_the_engine() {
    let mut sliders = Manipulations::default();
    sliders.focus(ManipulationKind::Saturation);
    sliders.set(-100);
    let adjustments = sliders.adjustments();

    let layout = ChannelLayout::BigEndian;
    let mut data = packed(layout, &[[200, 30, 90, 255], [5, 240, 60, 0]]);
    adjustments.apply(&mut data, layout).unwrap();
    for px in data.chunks_exact(4) {
        let [r, g, b] = layout.rgb().map(|offset| px[offset]);
        assert!(r == g && g == b, "{px:?} not gray");
    }
}

#[test]
fn config_file_drives_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preset.json");
    std::fs::write(
        &path,
        r#"{ "layout": "LittleEndian", "parallel": true, "adjustments": { "brightness": -1.0 } }"#,
    )
    .unwrap();

    let config = EnhanceConfig::load(&path).unwrap();
    assert_eq!(
        config.adjustments,
        Adjustments {
            brightness: -1.0,
            ..Adjustments::default()
        }
    );

    let mut data = vec![200u8, 100, 50, 77];
    config.apply(&mut data).unwrap();
    assert_eq!(data, [0, 0, 0, 77]);
}
