//! # stage-scene
//!
//! Flat scene-entity transforms.
//!
//! [`Transform`] aggregates position, rotation, and scale for a single
//! entity. There is no parent/child hierarchy; every transform is its own
//! root. Rotation is carried by [`Euler`], a thin wrapper that keeps the
//! angle representation swappable without touching the `Transform` contract.
//!
//! # Usage
//!
//! ```rust
//! use stage_math::Vec3;
//! use stage_scene::Transform;
//!
//! let mut t = Transform::new();
//! t.translate(Vec3::new(1.0, 2.0, 3.0));
//! t.scale_by(Vec3::splat(2.0));
//! assert_eq!(t.scale(), Vec3::splat(2.0));
//! ```
//!
//! # Dependencies
//!
//! - `stage-math` - vector fields and arithmetic

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod rotation;
mod transform;

pub use rotation::*;
pub use transform::*;
