//! Error types for stage-math operations.
//!
//! Arithmetic in this crate never fails: non-finite input is coerced at
//! construction and division follows IEEE semantics. The only fallible
//! surface is parsing the textual vector form.
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro error implementation

use thiserror::Error;

/// Error parsing the `x,y,z` textual vector form.
///
/// Returned by the [`FromStr`](std::str::FromStr) impl on
/// [`Vec3`](crate::Vec3).
#[derive(Debug, Error)]
pub enum ParseVecError {
    /// Wrong number of comma-separated components.
    #[error("expected 3 comma-separated components, got {got}")]
    ComponentCount {
        /// Number of components found in the input.
        got: usize,
    },

    /// A component was not a valid float.
    #[error("invalid component: {0}")]
    InvalidFloat(#[from] std::num::ParseFloatError),
}
