//! Scale factors and reference strings for color interpretation
//!
//! Compile-time constants shared by the codec, the renderer, and
//! user-facing messages.

/// 8-bit channel range
pub mod channel {
    /// Maximum channel value for 8-bit color
    pub const MAX: u8 = 255;

    /// Channel scale factor for normalized [0,1] arithmetic
    pub const MAX_F: f64 = 255.0;
}

/// Hue range in degrees
pub mod hue {
    /// Degrees in a full hue turn; hue values live in [0, 360)
    pub const FULL_TURN: f64 = 360.0;
}

/// Saturation/lightness percentage range
pub mod percent {
    /// Percentage scale factor; saturation and lightness live in [0, 100]
    pub const MAX: f64 = 100.0;
}

/// Canonical example strings for each supported notation
///
/// Used in help text and "could not parse" responses. All three name the
/// same color.
pub mod formats {
    /// Hex notation example
    pub const HEX_EXAMPLE: &str = "#FF5733";

    /// Functional RGB notation example
    pub const RGB_EXAMPLE: &str = "rgb(255,87,51)";

    /// Functional HSL notation example
    pub const HSL_EXAMPLE: &str = "hsl(9,100%,60%)";
}

/// CSS output conventions
pub mod css {
    /// Custom property name used in the CSS variable representation
    pub const VARIABLE_NAME: &str = "--color";
}
