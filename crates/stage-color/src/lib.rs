//! # stage-color
//!
//! Clamped RGBA color values for scene work.
//!
//! The central type is [`ColorRgba`]: four `f32` channels, each held inside
//! [0.0, 1.0] by every constructor and setter. On top of that invariant the
//! crate provides saturating arithmetic, BT.601 grayscale, linear
//! interpolation, and HSV conversion in both directions.
//!
//! # Usage
//!
//! ```rust
//! use stage_color::ColorRgba;
//!
//! let c = ColorRgba::new(0.25, 0.5, 0.75, 1.0) + ColorRgba::RED;
//! assert_eq!(c, ColorRgba::new(1.0, 0.5, 0.75, 1.0));
//!
//! let gray = c.to_grayscale();
//! assert_eq!(gray.r(), gray.g());
//! ```
//!
//! # Dependencies
//!
//! - `stage-math` - the HSV triplet is carried as a
//!   [`Vec3`](stage_math::Vec3); channel clamping uses
//!   [`saturate`](stage_math::saturate)
//! - [`thiserror`] - parse error derivation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod rgba;

pub use error::*;
pub use rgba::*;
