//! Integration tests for the complete color interpretation workflow
//!
//! These tests validate the end-to-end pipeline including:
//! - Notation detection across all supported formats
//! - Normalization and clamping into 8-bit RGB
//! - Representation generation and its fixed ordering
//! - Round-trip properties (exact for hex, lossy for integer HSL)
//! - Error handling for unrecognized input
//! - Configuration and serialization behavior

use color_query::{
    interpret_color, ColorCodec, ColorError, ColorFormat, ColorInterpretation, ColorRenderer,
    DetectorConfig, FormatDetector, ParseResult, Rgb,
};

// ============================================================================
// Detection Tests
// ============================================================================

#[test]
fn test_detects_hex_input() {
    let color = interpret_color("#FF5733").unwrap();

    assert_eq!(color.format, ColorFormat::Hex);
    assert_eq!(color.rgb, Rgb::new(255, 87, 51));
}

#[test]
fn test_detects_hex_without_hash_and_shorthand() {
    assert_eq!(
        interpret_color("ff5733").unwrap().rgb,
        Rgb::new(255, 87, 51)
    );
    assert_eq!(interpret_color("#F53").unwrap().rgb, Rgb::new(255, 85, 51));
}

#[test]
fn test_detects_functional_rgb_input() {
    let color = interpret_color("rgb(255, 87, 51)").unwrap();

    assert_eq!(color.format, ColorFormat::Rgb);
    assert_eq!(color.rgb, Rgb::new(255, 87, 51));
}

#[test]
fn test_detects_bare_comma_triple_as_rgb() {
    let color = interpret_color("255,87,51").unwrap();

    assert_eq!(color.format, ColorFormat::Rgb);
    assert_eq!(color.rgb, Rgb::new(255, 87, 51));
}

#[test]
fn test_detects_functional_hsl_input() {
    let color = interpret_color("hsl(9, 100%, 60%)").unwrap();

    assert_eq!(color.format, ColorFormat::Hsl);
    // hsl(9,100%,60%) expands through the truncating transform; hue 9 is
    // itself a truncation of the 10.59-degree hue of #FF5733, so the
    // original channels cannot be restored exactly
    assert_eq!(color.rgb.r, 255);
    assert!(
        (80..=82).contains(&color.rgb.g),
        "green channel {} outside truncation window",
        color.rgb.g
    );
    assert!(
        (49..=51).contains(&color.rgb.b),
        "blue channel {} outside truncation window",
        color.rgb.b
    );
}

#[test]
fn test_numeric_string_reads_as_hex() {
    // A 6-digit numeric string is valid hex; the hex pattern runs first
    let color = interpret_color("123456").unwrap();
    assert_eq!(color.format, ColorFormat::Hex);
    assert_eq!(color.rgb, Rgb::new(0x12, 0x34, 0x56));
}

#[test]
fn test_valid_hex_strings_agree_with_codec() {
    let codec = ColorCodec::new();
    let detector = FormatDetector::new();

    for hex in ["#ff5733", "ff5733", "#f53", "f53", "#000000", "abcdef"] {
        let expected = codec.hex_to_rgb(hex).unwrap();
        match detector.detect(hex) {
            ParseResult::Recognized { format, rgb } => {
                assert_eq!(format, ColorFormat::Hex, "format for {:?}", hex);
                assert_eq!(rgb, expected, "rgb for {:?}", hex);
            }
            ParseResult::Unrecognized => panic!("{:?} should be recognized as hex", hex),
        }
    }
}

// ============================================================================
// Clamping and Malformed Input Tests
// ============================================================================

#[test]
fn test_out_of_range_rgb_clamps() {
    assert_eq!(
        interpret_color("rgb(999, 0, 0)").unwrap().rgb,
        Rgb::new(255, 0, 0)
    );
    assert_eq!(
        interpret_color("300,300,300").unwrap().rgb,
        Rgb::new(255, 255, 255)
    );
}

#[test]
fn test_out_of_range_hsl_stays_valid() {
    // Components beyond their nominal ranges may produce any in-gamut
    // color, but never an invalid one (u8 channels guarantee it)
    let color = interpret_color("hsl(900, 150%, 200%)").unwrap();
    assert_eq!(color.format, ColorFormat::Hsl);
}

#[test]
fn test_unrecognized_inputs() {
    for input in ["not a color", "#zzz", "#ff573", "rgb(1,2)", "", "  "] {
        let err = interpret_color(input).unwrap_err();
        match err {
            ColorError::Unrecognized { .. } => {}
            other => panic!("expected Unrecognized for {:?}, got: {:?}", input, other),
        }
    }
}

#[test]
fn test_unrecognized_is_presentable() {
    let err = interpret_color("mauve-ish").unwrap_err();

    assert!(err.is_recoverable());
    let msg = err.user_message();
    assert!(msg.contains("mauve-ish"));
    assert!(msg.contains("#FF5733"), "message should list examples");
}

// ============================================================================
// Representation Tests
// ============================================================================

#[test]
fn test_render_contract() {
    let reps = ColorRenderer::new().render(Rgb::new(255, 87, 51));

    assert_eq!(reps.len(), 5, "exactly five representations");

    let labels: Vec<&str> = reps.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Hex Color", "RGB Color", "HSL Color", "CSS Variable", "Tailwind"]
    );

    assert_eq!(reps[0].value, "#FF5733");
    assert_eq!(reps[1].value, "rgb(255, 87, 51)");
    assert_eq!(reps[2].value, "hsl(10, 100%, 60%)");
    assert_eq!(reps[3].value, "--color: #FF5733;");
    assert_eq!(reps[4].value, "Use hex #FF5733 in Tailwind");
}

#[test]
fn test_interpretation_carries_representations() {
    let color = interpret_color("#ff5733").unwrap();
    assert_eq!(
        color.representations,
        ColorRenderer::new().render(color.rgb)
    );
}

// ============================================================================
// Round-Trip Properties
// ============================================================================

#[test]
fn test_hex_round_trip_is_exact_over_grid() {
    let codec = ColorCodec::new();

    for r in (0u16..=255).step_by(15) {
        for g in (0u16..=255).step_by(15) {
            for b in (0u16..=255).step_by(15) {
                let rgb = Rgb::new(r as u8, g as u8, b as u8);
                let hex = codec.rgb_to_hex(rgb);
                assert_eq!(
                    codec.hex_to_rgb(&hex).unwrap(),
                    rgb,
                    "hex round trip must be exact for {}",
                    hex
                );
            }
        }
    }
}

#[test]
fn test_hsl_round_trip_is_lossy_within_bounds() {
    // Integer HSL drops fractional hue degrees and percent points, so a
    // round trip drifts by several units per channel (a whole lightness
    // percent alone is worth 2.55 channel units, doubled through the
    // chroma levels). This is expected behavior, not a defect.
    let codec = ColorCodec::new();

    for r in (0u16..=255).step_by(15) {
        for g in (0u16..=255).step_by(15) {
            for b in (0u16..=255).step_by(15) {
                let rgb = Rgb::new(r as u8, g as u8, b as u8);
                let hsl = codec.rgb_to_hsl(rgb);
                let back = codec.hsl_to_rgb(hsl.h as u32, hsl.s as u32, hsl.l as u32);
                for (orig, round) in [(rgb.r, back.r), (rgb.g, back.g), (rgb.b, back.b)] {
                    let diff = (orig as i32 - round as i32).abs();
                    assert!(
                        diff <= 12,
                        "channel drifted {} for {:?} via {:?}",
                        diff,
                        rgb,
                        hsl
                    );
                }
            }
        }
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_detector_config_narrows_accepted_notations() {
    let config = DetectorConfig {
        hex: false,
        bare_triple: false,
        ..DetectorConfig::default()
    };
    let detector = FormatDetector::with_config(&config);

    assert_eq!(detector.detect("#ff5733"), ParseResult::Unrecognized);
    assert_eq!(detector.detect("255,87,51"), ParseResult::Unrecognized);
    assert!(detector.detect("rgb(255,87,51)").is_recognized());
    assert!(detector.detect("hsl(9,100%,60%)").is_recognized());
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_interpretation_json_serialization() {
    let color = interpret_color("rgb(51, 102, 204)").unwrap();
    let json = serde_json::to_string(&color).unwrap();

    // Should contain all expected fields
    assert!(json.contains("\"format\""));
    assert!(json.contains("\"rgb\""));
    assert!(json.contains("\"srgb\""));
    assert!(json.contains("\"hex\""));
    assert!(json.contains("\"hsl\""));
    assert!(json.contains("\"representations\""));

    // Format tag serializes as its lowercase notation name
    assert!(json.contains("\"format\":\"rgb\""));

    // Should be able to deserialize back
    let deserialized: ColorInterpretation = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.hex, color.hex);
    assert_eq!(deserialized.representations, color.representations);
}
