//! Textual color notation detection
//!
//! Matches an input string against the supported notations in a fixed
//! order and extracts raw component values, delegating to the codec to
//! normalize into RGB.
//!
//! The order is a deliberate disambiguation policy, not an accident of
//! statement order: hex before functional RGB, functional RGB before the
//! bare comma triple (whose grammar is a superset of the functional
//! arguments), bare triple before HSL. First match wins.
//!
//! The hex pattern is anchored at both ends; the functional and bare
//! patterns are anchored at the start only, so trailing characters after
//! a valid match are ignored. That looseness is preserved deliberately:
//! tightening it would change which inputs are accepted.

use std::fmt;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::color::{ColorCodec, Rgb};
use crate::config::DetectorConfig;

/// Hex notation: optional `#`, then exactly 3 or 6 lowercase hex digits
const HEX_PATTERN: &str = r"^#?([0-9a-f]{3}|[0-9a-f]{6})$";

/// Functional RGB notation: `rgb(` r `,` g `,` b `)`, whitespace tolerated
const RGB_PATTERN: &str = r"^rgb\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)";

/// Bare comma triple: r `,` g `,` b with no wrapper syntax
const TRIPLE_PATTERN: &str = r"^(\d+)\s*,\s*(\d+)\s*,\s*(\d+)";

/// Functional HSL notation: `hsl(` h `,` s[%] `,` l[%] `)`
const HSL_PATTERN: &str = r"^hsl\s*\(\s*(\d+)\s*,\s*(\d+)%?\s*,\s*(\d+)%?\s*\)";

/// The notation an input was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    /// Lowercase notation name as reported to consumers
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of format detection
///
/// A sum type rather than a nullable value, so callers cannot forget the
/// failure case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseResult {
    /// Input matched a notation; `rgb` is the normalized triple and
    /// `format` names the notation it was written in
    Recognized { format: ColorFormat, rgb: Rgb },
    /// No notation matched
    Unrecognized,
}

impl ParseResult {
    /// True if a notation matched
    pub fn is_recognized(&self) -> bool {
        matches!(self, ParseResult::Recognized { .. })
    }

    /// The normalized triple, if a notation matched
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            ParseResult::Recognized { rgb, .. } => Some(*rgb),
            ParseResult::Unrecognized => None,
        }
    }
}

/// Component extractor for one notation; `None` means the notation's own
/// decoding rejected the match
type Extractor = fn(&Captures, &ColorCodec) -> Option<Rgb>;

/// One (notation, grammar, extractor) entry in the detection sequence
struct FormatPattern {
    format: ColorFormat,
    pattern: Regex,
    extract: Extractor,
}

/// Detector matching inputs against the supported notations in order
///
/// Input is expected already trimmed and lower-cased by the caller;
/// [`crate::interpret_color`] performs that normalization.
pub struct FormatDetector {
    codec: ColorCodec,
    patterns: Vec<FormatPattern>,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector {
    /// Create a detector with all notations enabled
    pub fn new() -> Self {
        Self::with_config(&DetectorConfig::default())
    }

    /// Create a detector accepting only the notations enabled in `config`
    ///
    /// The canonical evaluation order of the remaining notations is
    /// preserved.
    pub fn with_config(config: &DetectorConfig) -> Self {
        let mut patterns = Vec::new();

        if config.hex {
            patterns.push(FormatPattern {
                format: ColorFormat::Hex,
                pattern: compile(HEX_PATTERN),
                extract: extract_hex,
            });
        }
        if config.rgb_functional {
            patterns.push(FormatPattern {
                format: ColorFormat::Rgb,
                pattern: compile(RGB_PATTERN),
                extract: extract_triple,
            });
        }
        if config.bare_triple {
            patterns.push(FormatPattern {
                format: ColorFormat::Rgb,
                pattern: compile(TRIPLE_PATTERN),
                extract: extract_triple,
            });
        }
        if config.hsl {
            patterns.push(FormatPattern {
                format: ColorFormat::Hsl,
                pattern: compile(HSL_PATTERN),
                extract: extract_hsl,
            });
        }

        Self {
            codec: ColorCodec::new(),
            patterns,
        }
    }

    /// Detect which notation the input matches
    ///
    /// # Arguments
    ///
    /// * `input` - Trimmed, lower-cased color expression
    ///
    /// # Returns
    ///
    /// `Recognized` with the normalized RGB triple and the matched
    /// notation, or `Unrecognized` if no pattern matched. A notation
    /// whose decoding rejects its own match (a malformed hex payload)
    /// degrades to the same uniform `Unrecognized` outcome.
    pub fn detect(&self, input: &str) -> ParseResult {
        for entry in &self.patterns {
            if let Some(caps) = entry.pattern.captures(input) {
                if let Some(rgb) = (entry.extract)(&caps, &self.codec) {
                    return ParseResult::Recognized {
                        format: entry.format,
                        rgb,
                    };
                }
            }
        }
        ParseResult::Unrecognized
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static notation pattern must compile")
}

fn extract_hex(caps: &Captures, codec: &ColorCodec) -> Option<Rgb> {
    codec.hex_to_rgb(&caps[1]).ok()
}

fn extract_triple(caps: &Captures, _codec: &ColorCodec) -> Option<Rgb> {
    Some(Rgb::clamped(
        saturating_u64(&caps[1]),
        saturating_u64(&caps[2]),
        saturating_u64(&caps[3]),
    ))
}

fn extract_hsl(caps: &Captures, codec: &ColorCodec) -> Option<Rgb> {
    Some(codec.hsl_to_rgb(
        saturating_u32(&caps[1]),
        saturating_u32(&caps[2]),
        saturating_u32(&caps[3]),
    ))
}

/// Parse a digit run, saturating on overflow
///
/// The patterns only capture `\d+`, so the sole failure mode is a run too
/// large for the type; such values clamp at the channel bound anyway.
fn saturating_u64(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

fn saturating_u32(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}
