//! Error types for the color_query library

use thiserror::Error;

use crate::constants::formats;

/// Result type alias for color_query operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color detection and conversion
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex string is not 3 or 6 valid hex digits after stripping `#`
    #[error("Malformed hex color: {message}")]
    MalformedHex {
        message: String,
        #[source]
        source: Option<std::num::ParseIntError>,
    },

    /// No detection pattern matched the input
    #[error("Unrecognized color format: {query}")]
    Unrecognized { query: String },
}

impl ColorError {
    /// Create a malformed hex error without an underlying cause
    pub fn malformed_hex(message: impl Into<String>) -> Self {
        Self::MalformedHex {
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed hex error from a failed digit parse
    pub fn malformed_hex_digits(
        message: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        Self::MalformedHex {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an unrecognized-format error for the given query
    pub fn unrecognized(query: impl Into<String>) -> Self {
        Self::Unrecognized {
            query: query.into(),
        }
    }

    /// Check if this error indicates an expected, recoverable condition
    ///
    /// Unrecognized input is a first-class outcome the caller presents to
    /// the user, not a fault.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ColorError::Unrecognized { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::MalformedHex { .. } => format!(
                "Invalid hex color. Use 3 or 6 hex digits, e.g. {} or #F53.",
                formats::HEX_EXAMPLE
            ),
            ColorError::Unrecognized { query } => format!(
                "Could not parse: {}. Supported formats: {}, {}, {}",
                query,
                formats::HEX_EXAMPLE,
                formats::RGB_EXAMPLE,
                formats::HSL_EXAMPLE
            ),
        }
    }
}
