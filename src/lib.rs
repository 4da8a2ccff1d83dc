//! # Color Query
//!
//! A Rust crate for interpreting free-form textual color expressions.
//!
//! This library provides color notation handling by:
//! - Detecting which notation an input matches (hex, functional
//!   `rgb(...)`, bare comma triple, functional `hsl(...)`)
//! - Normalizing the recognized value to a canonical 8-bit RGB triple
//! - Re-encoding the color into a fixed, ordered set of labeled textual
//!   representations (hex, RGB, HSL, CSS variable, Tailwind hint)
//!
//! ## Example
//!
//! ```rust
//! use color_query::{interpret_color, ColorFormat};
//!
//! let color = interpret_color(" RGB(255, 87, 51) ")?;
//! assert_eq!(color.format, ColorFormat::Rgb);
//! assert_eq!(color.hex, "#FF5733");
//! assert_eq!(color.representations.len(), 5);
//! # Ok::<(), color_query::ColorError>(())
//! ```

use palette::Srgb;
use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod detection;
pub mod error;

pub use color::{ColorCodec, ColorRenderer, ColorRepresentation, Hsl, Rgb};
pub use config::DetectorConfig;
pub use detection::{ColorFormat, FormatDetector, ParseResult};
pub use error::{ColorError, Result};

/// Complete interpretation of a recognized color expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorInterpretation {
    /// The notation the input was written in
    pub format: ColorFormat,
    /// Canonical 8-bit RGB triple
    pub rgb: Rgb,
    /// Normalized sRGB color for display purposes
    pub srgb: Srgb,
    /// Uppercase hexadecimal representation
    pub hex: String,
    /// Integer HSL representation (truncated, lossy)
    pub hsl: Hsl,
    /// The fixed, ordered list of labeled representations
    pub representations: Vec<ColorRepresentation>,
}

/// Interpret a free-form textual color expression
///
/// This is the main entry point. The raw query is trimmed and
/// lower-cased, matched against the supported notations, normalized to
/// RGB, and re-encoded into every representation.
///
/// # Arguments
///
/// * `query` - Raw color expression, e.g. `"#FF5733"` or `"rgb(255,87,51)"`
///
/// # Returns
///
/// A `ColorInterpretation` with the detected format, the canonical RGB
/// triple, and all derived representations
///
/// # Errors
///
/// Returns `ColorError::Unrecognized` if no notation matches. This is an
/// expected outcome for arbitrary user input, not a fault; see
/// [`ColorError::user_message`] for the presentable text.
pub fn interpret_color(query: &str) -> Result<ColorInterpretation> {
    let normalized = query.trim().to_lowercase();

    let detector = FormatDetector::new();
    match detector.detect(&normalized) {
        ParseResult::Recognized { format, rgb } => {
            let codec = ColorCodec::new();
            let renderer = ColorRenderer::new();
            Ok(ColorInterpretation {
                format,
                rgb,
                srgb: rgb.to_srgb(),
                hex: codec.rgb_to_hex(rgb).to_uppercase(),
                hsl: codec.rgb_to_hsl(rgb),
                representations: renderer.render(rgb),
            })
        }
        ParseResult::Unrecognized => Err(ColorError::unrecognized(query.trim())),
    }
}
