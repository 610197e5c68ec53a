//! # stage-math
//!
//! Math primitives for scene composition and color work.
//!
//! This crate provides the foundational value types used throughout the
//! stage-rs workspace:
//!
//! - [`Vec3`] - 3D vector for positions, directions, and scale factors
//! - Scalar helpers - [`lerp`], [`saturate`], [`to_radians`], and friends
//! - [`ParseVecError`] - error type for the textual vector form
//!
//! # Design
//!
//! All types are plain `Copy` value types. Assignment is a structural copy,
//! so there is no clone/deep-copy split: two bindings never share mutable
//! state. NaN components are coerced to `0.0` at construction; infinities
//! produced by IEEE arithmetic (such as scalar division by zero) propagate
//! unchanged. See [`Vec3::new`] and the `Div` impls for the exact policy.
//!
//! # Usage
//!
//! ```rust
//! use stage_math::Vec3;
//!
//! let v = Vec3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.length(), 5.0);
//!
//! let dir = v.normalized();
//! assert!((dir.length() - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with the wider Rust math ecosystem
//! - [`thiserror`] - parse error derivation
//!
//! # Used By
//!
//! - `stage-color` - HSV conversion returns its triplet as a [`Vec3`]
//! - `stage-scene` - transform position/rotation/scale fields

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod scalar;
mod vec3;

pub use error::*;
pub use scalar::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Vec3 as GlamVec3, Vec3A};
}
