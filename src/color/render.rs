//! Textual representation generation
//!
//! Re-encodes a resolved RGB triple into the fixed, ordered set of labeled
//! representations consumers display and copy: uppercase hex, functional
//! RGB, functional HSL, a CSS custom-property declaration, and a Tailwind
//! configuration hint. The set and order are part of the interface
//! contract and are reproduced exactly.

use serde::{Deserialize, Serialize};

use crate::color::{ColorCodec, Rgb};
use crate::constants::css;

/// One labeled textual representation of a color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRepresentation {
    /// Human-readable label, e.g. "Hex Color"
    pub label: String,
    /// The representation itself, e.g. "#FF5733"
    pub value: String,
}

impl ColorRepresentation {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Renderer producing the fixed representation list for an RGB triple
pub struct ColorRenderer {
    codec: ColorCodec,
}

impl Default for ColorRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self {
            codec: ColorCodec::new(),
        }
    }

    /// Generate all textual representations for a color
    ///
    /// # Arguments
    ///
    /// * `rgb` - Resolved RGB triple
    ///
    /// # Returns
    ///
    /// Exactly five labeled representations, in order: hex, RGB, HSL,
    /// CSS variable, Tailwind hint
    pub fn render(&self, rgb: Rgb) -> Vec<ColorRepresentation> {
        let hex = self.codec.rgb_to_hex(rgb).to_uppercase();
        let hsl = self.codec.rgb_to_hsl(rgb);

        vec![
            ColorRepresentation::new("Hex Color", &hex),
            ColorRepresentation::new(
                "RGB Color",
                format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
            ),
            ColorRepresentation::new(
                "HSL Color",
                format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l),
            ),
            ColorRepresentation::new(
                "CSS Variable",
                format!("{}: {};", css::VARIABLE_NAME, hex),
            ),
            ColorRepresentation::new("Tailwind", format!("Use hex {} in Tailwind", hex)),
        ]
    }
}
