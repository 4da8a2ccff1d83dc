//! Color codec: conversions between RGB, hex, and HSL
//!
//! Pure functions over 8-bit RGB:
//! - RGB to lowercase `#rrggbb` hex and back (3-digit shorthand accepted)
//! - RGB to integer HSL and back, via normalized [0,1] channel values
//!
//! The HSL transform truncates hue to whole degrees and saturation and
//! lightness to whole percent. Truncation, not rounding, is the
//! compatibility contract: pure blue reports hue 239 because 4/6 x 360
//! computes fractionally below 240 in IEEE doubles. Round-trips through
//! integer HSL are therefore lossy by a few units per channel.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::constants::{channel, hue, percent};
use crate::{ColorError, Result};

/// 8-bit RGB triple, the canonical intermediate representation
///
/// All conversions pass through this type. The `u8` channels make the
/// [0,255] clamp structural; out-of-range parsed values are saturated in
/// via [`Rgb::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create an RGB triple from in-range channel values
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB triple from raw parsed integers, saturating each
    /// channel at 255
    pub fn clamped(r: u64, g: u64, b: u64) -> Self {
        Self {
            r: r.min(channel::MAX as u64) as u8,
            g: g.min(channel::MAX as u64) as u8,
            b: b.min(channel::MAX as u64) as u8,
        }
    }

    /// Convert to a normalized sRGB color for display purposes
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(
            self.r as f32 / channel::MAX_F as f32,
            self.g as f32 / channel::MAX_F as f32,
            self.b as f32 / channel::MAX_F as f32,
        )
    }
}

/// Integer HSL triple
///
/// Hue in [0,360) degrees, saturation and lightness in [0,100] percent.
/// Produced by truncation; see the module docs for the lossiness caveat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Create an HSL triple from in-range component values
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// Stateless converter between RGB, hex, and HSL representations
pub struct ColorCodec;

impl Default for ColorCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorCodec {
    /// Create a new color codec
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB to lowercase hex notation
    ///
    /// # Arguments
    ///
    /// * `rgb` - RGB triple
    ///
    /// # Returns
    ///
    /// Lowercase 2-digit-per-channel hex string with a leading `#`,
    /// e.g. `#ff5733`
    pub fn rgb_to_hex(&self, rgb: Rgb) -> String {
        format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
    }

    /// Parse hex notation to RGB
    ///
    /// Accepts 3-digit shorthand (each digit doubled) or the 6-digit form,
    /// with or without a leading `#`.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string, e.g. `#ff5733`, `ff5733`, or `#f53`
    ///
    /// # Returns
    ///
    /// The decoded RGB triple
    ///
    /// # Errors
    ///
    /// Returns `ColorError::MalformedHex` if the string is not 3 or 6
    /// valid hex digits after stripping `#`
    pub fn hex_to_rgb(&self, hex: &str) -> Result<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::malformed_hex(format!(
                "invalid hex digits in '{}'",
                digits
            )));
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            other => {
                return Err(ColorError::malformed_hex(format!(
                    "expected 3 or 6 hex digits, got {}",
                    other
                )))
            }
        };

        let parse_channel = |slice: &str| {
            u8::from_str_radix(slice, 16).map_err(|e| {
                ColorError::malformed_hex_digits(format!("invalid channel '{}'", slice), e)
            })
        };

        Ok(Rgb::new(
            parse_channel(&expanded[0..2])?,
            parse_channel(&expanded[2..4])?,
            parse_channel(&expanded[4..6])?,
        ))
    }

    /// Convert RGB to integer HSL
    ///
    /// # Arguments
    ///
    /// * `rgb` - RGB triple
    ///
    /// # Returns
    ///
    /// HSL with hue truncated to whole degrees and saturation/lightness
    /// truncated to whole percent
    pub fn rgb_to_hsl(&self, rgb: Rgb) -> Hsl {
        let r = rgb.r as f64 / channel::MAX_F;
        let g = rgb.g as f64 / channel::MAX_F;
        let b = rgb.b as f64 / channel::MAX_F;

        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (max_c + min_c) / 2.0;

        if min_c == max_c {
            // Achromatic: hue and saturation are zero by convention
            return Hsl::new(0, 0, (lightness * percent::MAX) as u8);
        }

        let range = max_c - min_c;
        let saturation = if lightness <= 0.5 {
            range / (max_c + min_c)
        } else {
            range / (2.0 - max_c - min_c)
        };

        let rc = (max_c - r) / range;
        let gc = (max_c - g) / range;
        let bc = (max_c - b) / range;

        let sector = if r == max_c {
            bc - gc
        } else if g == max_c {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        let hue_frac = (sector / 6.0).rem_euclid(1.0);

        Hsl::new(
            (hue_frac * hue::FULL_TURN) as u16,
            (saturation * percent::MAX) as u8,
            (lightness * percent::MAX) as u8,
        )
    }

    /// Convert HSL components to RGB
    ///
    /// Inputs are raw integer components as extracted from textual input:
    /// hue is normalized by 360, saturation and lightness by 100, before
    /// the transform. Output channels are truncated to integers and
    /// clamped to [0,255], so out-of-range components cannot produce an
    /// invalid triple.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees
    /// * `s` - Saturation in percent
    /// * `l` - Lightness in percent
    ///
    /// # Returns
    ///
    /// The corresponding RGB triple
    pub fn hsl_to_rgb(&self, h: u32, s: u32, l: u32) -> Rgb {
        let hue_frac = h as f64 / hue::FULL_TURN;
        let sat = s as f64 / percent::MAX;
        let light = l as f64 / percent::MAX;

        if sat == 0.0 {
            let level = to_channel(light);
            return Rgb::new(level, level, level);
        }

        let m2 = if light <= 0.5 {
            light * (1.0 + sat)
        } else {
            light + sat - light * sat
        };
        let m1 = 2.0 * light - m2;

        Rgb::new(
            to_channel(hue_component(m1, m2, hue_frac + 1.0 / 3.0)),
            to_channel(hue_component(m1, m2, hue_frac)),
            to_channel(hue_component(m1, m2, hue_frac - 1.0 / 3.0)),
        )
    }
}

/// Truncate a normalized channel value to an 8-bit channel, saturating at
/// the bounds
fn to_channel(value: f64) -> u8 {
    (value * channel::MAX_F).clamp(0.0, channel::MAX_F) as u8
}

/// Evaluate one channel of the piecewise HSL reconstruction
///
/// `m1`/`m2` are the lower/upper chroma levels; `hue` is the channel's
/// phase offset in turns and is wrapped into [0,1).
fn hue_component(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}
