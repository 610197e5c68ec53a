//! Position/rotation/scale aggregate for a scene entity.

use std::fmt;

use stage_math::Vec3;

use crate::rotation::Euler;

/// Position, rotation, and scale of a scene entity.
///
/// Every transform is an independent root; there is no hierarchy. All
/// mutators are valid in every state, and the type is a plain `Copy` value.
///
/// # Example
///
/// ```rust
/// use stage_math::Vec3;
/// use stage_scene::Transform;
///
/// let mut t = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
/// t.translate(Vec3::UP);
/// t.rotate(Vec3::new(0.0, 90.0, 0.0));
/// t.scale_by(Vec3::splat(2.0));
/// assert_eq!(t.position(), Vec3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    position: Vec3,
    rotation: Euler,
    scale: Vec3,
}

impl Transform {
    /// Creates an identity transform: position zero, rotation zero,
    /// scale one.
    #[inline]
    pub const fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Euler::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Creates a transform at the given position with identity rotation
    /// and scale.
    #[inline]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Euler::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// World-space position.
    #[inline]
    pub fn position(self) -> Vec3 {
        self.position
    }

    /// Accumulated rotation.
    #[inline]
    pub fn rotation(self) -> Euler {
        self.rotation
    }

    /// Per-axis scale factors.
    #[inline]
    pub fn scale(self) -> Vec3 {
        self.scale
    }

    /// Replaces the position.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Replaces the rotation.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Euler) {
        self.rotation = rotation;
    }

    /// Replaces the scale.
    #[inline]
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Moves the position by a delta. Always succeeds.
    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Accumulates a rotation delta in degrees.
    ///
    /// Additive with no wraparound; see [`Euler`].
    #[inline]
    pub fn rotate(&mut self, delta_degrees: Vec3) {
        self.rotation.rotate_by(delta_degrees);
    }

    /// Composes scale factors multiplicatively, per axis.
    ///
    /// `scale_by(v1)` then `scale_by(v2)` leaves the scale at
    /// `v1 * v2` component-wise.
    #[inline]
    pub fn scale_by(&mut self, factors: Vec3) {
        self.scale = self.scale * factors;
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transform(position={}, rotation={}, scale={})",
            self.position, self.rotation, self.scale
        )
    }
}
