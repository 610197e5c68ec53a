//! Error types for color operations.
//!
//! Channel arithmetic cannot fail: every write path clamps, and non-finite
//! input collapses under the clamp. Parsing the textual color form is the
//! only fallible operation.

use thiserror::Error;

/// Error parsing the `r,g,b[,a]` textual color form.
///
/// Returned by the [`FromStr`](std::str::FromStr) impl on
/// [`ColorRgba`](crate::ColorRgba).
#[derive(Debug, Error)]
pub enum ParseColorError {
    /// Wrong number of comma-separated channels.
    #[error("expected 3 or 4 comma-separated channels, got {got}")]
    ComponentCount {
        /// Number of channels found in the input.
        got: usize,
    },

    /// A channel was not a valid float.
    #[error("invalid channel: {0}")]
    InvalidFloat(#[from] std::num::ParseFloatError),
}
