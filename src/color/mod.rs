//! Color codec and representation module
//!
//! This module handles conversions between RGB, hex, and HSL, and the
//! generation of labeled textual representations from a resolved color.

pub mod conversion;
pub mod render;

pub use conversion::{ColorCodec, Hsl, Rgb};
pub use render::{ColorRenderer, ColorRepresentation};
