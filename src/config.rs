//! Configuration for the color_query detector.
//!
//! Defines which notations the [`crate::FormatDetector`] accepts.
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use color_query::DetectorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = DetectorConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults (all notations enabled)
//! let config = DetectorConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

/// Notation switches for format detection.
///
/// Each flag enables one detection pattern. Disabling a notation removes
/// it from the evaluation sequence; the canonical order of the remaining
/// notations (hex, functional RGB, bare triple, HSL) is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Accept hex notation (`#ff5733`, `f53`)
    pub hex: bool,

    /// Accept functional RGB notation (`rgb(255, 87, 51)`)
    pub rgb_functional: bool,

    /// Accept the bare comma triple (`255,87,51`)
    #[serde(default = "default_enabled")]
    pub bare_triple: bool,

    /// Accept functional HSL notation (`hsl(9, 100%, 60%)`)
    pub hsl: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            hex: true,
            rgb_functional: true,
            bare_triple: true,
            hsl: true,
        }
    }
}

impl DetectorConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
