//! Color notation detection module
//!
//! This module handles recognition of textual color notations and their
//! normalization into RGB.

pub mod format;

pub use format::{ColorFormat, FormatDetector, ParseResult};
