//! Rotation representation for transforms.
//!
//! [`Euler`] wraps an angle triplet so the rest of the crate never touches
//! the representation directly. Accumulation is plain addition with no
//! wraparound into [0, 360): angles grow past 360 degrees and go negative.
//! That matches how animation deltas compose, and it is the documented
//! contract rather than something to normalize away.
//!
//! Euler angles are subject to gimbal lock; a quaternion-backed type can
//! replace this one behind the same methods.

use std::fmt;

use stage_math::Vec3;

/// Euler angles in degrees, one per axis.
///
/// Accumulates additively and without bounds: two `rotate_by` calls of
/// (0, 270, 0) leave the Y angle at 540, not 180.
///
/// # Example
///
/// ```rust
/// use stage_math::Vec3;
/// use stage_scene::Euler;
///
/// let mut r = Euler::ZERO;
/// r.rotate_by(Vec3::new(0.0, 90.0, 0.0));
/// assert_eq!(r.angles().y, 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Euler {
    angles: Vec3,
}

impl Euler {
    /// No rotation.
    pub const ZERO: Self = Self { angles: Vec3::ZERO };

    /// Creates a rotation from an angle triplet in degrees.
    #[inline]
    pub const fn new(degrees: Vec3) -> Self {
        Self { angles: degrees }
    }

    /// The accumulated angles in degrees.
    #[inline]
    pub fn angles(self) -> Vec3 {
        self.angles
    }

    /// Adds a delta to the accumulated angles.
    ///
    /// No normalization is applied; see the module docs.
    #[inline]
    pub fn rotate_by(&mut self, delta_degrees: Vec3) {
        self.angles += delta_degrees;
    }
}

impl fmt::Display for Euler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.angles.fmt(f)
    }
}
