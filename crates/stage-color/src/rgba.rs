//! RGBA color type with a [0, 1] channel invariant.
//!
//! Every write path clamps, so a [`ColorRgba`] can never hold an
//! out-of-range channel no matter how it was produced.
//!
//! # Usage
//!
//! ```rust
//! use stage_color::ColorRgba;
//!
//! let c = ColorRgba::new(2.0, -1.0, 0.5, 1.0);
//! assert_eq!((c.r(), c.g(), c.b()), (1.0, 0.0, 0.5));
//! ```

use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use stage_math::{Vec3, fract, saturate};

use crate::error::ParseColorError;

/// BT.601 luma coefficient for the red channel.
///
/// Used in the grayscale formula: `Y = 0.299*R + 0.587*G + 0.114*B`
pub const BT601_LUMA_R: f32 = 0.299;

/// BT.601 luma coefficient for the green channel.
pub const BT601_LUMA_G: f32 = 0.587;

/// BT.601 luma coefficient for the blue channel.
pub const BT601_LUMA_B: f32 = 0.114;

/// BT.601 luma coefficients as an array [R, G, B].
pub const BT601_LUMA: [f32; 3] = [BT601_LUMA_R, BT601_LUMA_G, BT601_LUMA_B];

/// Calculate BT.601 luma from RGB values.
///
/// # Example
///
/// ```rust
/// use stage_color::luma_bt601;
///
/// let y = luma_bt601([1.0, 1.0, 1.0]);
/// assert!((y - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn luma_bt601(rgb: [f32; 3]) -> f32 {
    rgb[0] * BT601_LUMA_R + rgb[1] * BT601_LUMA_G + rgb[2] * BT601_LUMA_B
}

/// An RGBA color with every channel clamped to [0.0, 1.0].
///
/// Fields are private; the clamp is enforced by [`ColorRgba::new`] and the
/// `set_*` methods, so it holds after any sequence of operations. Non-finite
/// input collapses under the same clamp: NaN becomes `0.0`, infinities
/// become the nearest bound.
///
/// # Copy semantics
///
/// `ColorRgba` is `Copy`; assignment is a structural value copy and two
/// bindings never share state.
///
/// # Example
///
/// ```rust
/// use stage_color::ColorRgba;
///
/// let tint = ColorRgba::RED * 0.5;
/// assert_eq!(tint.r(), 0.5);
/// assert_eq!(tint.a(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct ColorRgba {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl ColorRgba {
    /// Opaque red (1, 0, 0, 1).
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Opaque green (0, 1, 0, 1).
    pub const GREEN: Self = Self { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };

    /// Opaque blue (0, 0, 1, 1).
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };

    /// Opaque black (0, 0, 0, 1).
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Opaque white (1, 1, 1, 1).
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Creates a new color, clamping each channel to [0, 1].
    ///
    /// # Example
    ///
    /// ```rust
    /// use stage_color::ColorRgba;
    ///
    /// let c = ColorRgba::new(0.2, 0.4, 0.6, 1.0);
    /// assert_eq!(ColorRgba::new(9.0, -9.0, 0.5, 1.0).r(), 1.0);
    /// ```
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: saturate(r),
            g: saturate(g),
            b: saturate(b),
            a: saturate(a),
        }
    }

    /// Creates a grayscale color with equal RGB channels.
    #[inline]
    pub fn gray(v: f32, a: f32) -> Self {
        Self::new(v, v, v, a)
    }

    /// Red channel.
    #[inline]
    pub fn r(self) -> f32 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub fn g(self) -> f32 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub fn b(self) -> f32 {
        self.b
    }

    /// Alpha channel.
    #[inline]
    pub fn a(self) -> f32 {
        self.a
    }

    /// Sets the red channel, clamped to [0, 1].
    #[inline]
    pub fn set_r(&mut self, r: f32) {
        self.r = saturate(r);
    }

    /// Sets the green channel, clamped to [0, 1].
    #[inline]
    pub fn set_g(&mut self, g: f32) {
        self.g = saturate(g);
    }

    /// Sets the blue channel, clamped to [0, 1].
    #[inline]
    pub fn set_b(&mut self, b: f32) {
        self.b = saturate(b);
    }

    /// Sets the alpha channel, clamped to [0, 1].
    #[inline]
    pub fn set_a(&mut self, a: f32) {
        self.a = saturate(a);
    }

    /// Get RGBA channels as an array.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from an array, clamping each channel.
    #[inline]
    pub fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Returns the grayscale version of this color.
    ///
    /// Uses the BT.601 luma weights; alpha is preserved unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stage_color::ColorRgba;
    ///
    /// let gray = ColorRgba::new(1.0, 0.0, 0.0, 0.5).to_grayscale();
    /// assert!((gray.r() - 0.299).abs() < 1e-6);
    /// assert_eq!(gray.a(), 0.5);
    /// ```
    #[inline]
    pub fn to_grayscale(self) -> Self {
        let y = luma_bt601([self.r, self.g, self.b]);
        Self::new(y, y, y, self.a)
    }

    /// Linearly interpolates between two colors, per channel.
    ///
    /// `t` is saturated to [0, 1] before use. The `a*(1-t) + b*t` form is
    /// exact at both endpoints: `t = 0` returns `a`, `t = 1` returns `b`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stage_color::ColorRgba;
    ///
    /// let mid = ColorRgba::lerp(ColorRgba::RED, ColorRgba::BLUE, 0.5);
    /// assert_eq!(mid, ColorRgba::new(0.5, 0.0, 0.5, 1.0));
    /// ```
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = saturate(t);
        Self::new(
            a.r * (1.0 - t) + b.r * t,
            a.g * (1.0 - t) + b.g * t,
            a.b * (1.0 - t) + b.b * t,
            a.a * (1.0 - t) + b.a * t,
        )
    }

    /// Converts RGB to HSV.
    ///
    /// Returns a [`Vec3`] with `x` = hue in degrees [0, 360), `y` =
    /// saturation [0, 1], `z` = value [0, 1]. The hue branch is chosen by
    /// the maximum channel, red winning ties, then green, then blue.
    /// Achromatic colors (zero delta) report hue 0 and saturation 0.
    pub fn to_hsv(self) -> Vec3 {
        let rgb = Vec3::new(self.r, self.g, self.b);
        let max = rgb.max_element();
        let min = rgb.min_element();
        let delta = max - min;

        let mut h = 0.0;
        if delta > 0.0 {
            h = if max == self.r {
                (self.g - self.b) / delta
            } else if max == self.g {
                2.0 + (self.b - self.r) / delta
            } else {
                4.0 + (self.r - self.g) / delta
            };
            h *= 60.0;
            if h < 0.0 {
                h += 360.0;
            }
        }

        let s = if max > 0.0 { delta / max } else { 0.0 };
        Vec3::new(h, s, max)
    }

    /// Converts HSV to a color with alpha fixed at 1.
    ///
    /// Standard six-sector conversion. The sector index uses the Euclidean
    /// remainder of `floor(h / 60)`, so hue outside [0, 360) wraps instead
    /// of selecting a bogus sector. Round-trips through
    /// [`ColorRgba::to_hsv`] within floating tolerance; when saturation is
    /// near zero the hue is not recoverable.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let sector = ((h / 60.0).floor() as i32).rem_euclid(6);
        let f = fract(h / 60.0);

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        match sector {
            0 => Self::new(v, t, p, 1.0),
            1 => Self::new(q, v, p, 1.0),
            2 => Self::new(p, v, t, 1.0),
            3 => Self::new(p, q, v, 1.0),
            4 => Self::new(t, p, v, 1.0),
            _ => Self::new(v, p, q, 1.0),
        }
    }
}

/// Opaque white, matching the default constructor of the type.
impl Default for ColorRgba {
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

// Color + Color: saturating add, each channel re-clamped.
impl Add for ColorRgba {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

// Color * f32: clamped scalar scale across all four channels.
impl Mul<f32> for ColorRgba {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

/// Fixed two-decimal rendering of the RGB channels: `(1.00, 0.50, 0.00)`.
///
/// Alpha is deliberately omitted from the diagnostic form; read it via
/// [`ColorRgba::a`] when it matters.
impl fmt::Display for ColorRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.r, self.g, self.b)
    }
}

/// Parses `r,g,b,a` or `r,g,b` (alpha defaults to 1).
///
/// Channels are clamped like any other construction.
impl FromStr for ColorRgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [r, g, b] => Ok(Self::new(r.parse()?, g.parse()?, b.parse()?, 1.0)),
            [r, g, b, a] => Ok(Self::new(r.parse()?, g.parse()?, b.parse()?, a.parse()?)),
            _ => Err(ParseColorError::ComponentCount { got: parts.len() }),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColorRgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ColorRgba {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Route through the constructor so the clamp invariant holds.
        let arr = <[f32; 4]>::deserialize(deserializer)?;
        Ok(Self::from_array(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_channels_in_range(c: ColorRgba) {
        for ch in c.to_array() {
            assert!((0.0..=1.0).contains(&ch), "channel {ch} out of range");
        }
    }

    #[test]
    fn test_new_clamps() {
        let c = ColorRgba::new(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_new_coerces_non_finite() {
        let c = ColorRgba::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1.0);
        assert_eq!(c.to_array(), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_default_is_opaque_white() {
        assert_eq!(ColorRgba::default(), ColorRgba::WHITE);
        assert_eq!(ColorRgba::WHITE.to_array(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_constants_opaque() {
        for c in [
            ColorRgba::RED,
            ColorRgba::GREEN,
            ColorRgba::BLUE,
            ColorRgba::BLACK,
            ColorRgba::WHITE,
        ] {
            assert_eq!(c.a(), 1.0);
            assert_channels_in_range(c);
        }
    }

    #[test]
    fn test_setters_clamp() {
        let mut c = ColorRgba::BLACK;
        c.set_r(3.0);
        c.set_g(-0.5);
        c.set_b(0.25);
        c.set_a(f32::NAN);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.25, 0.0]);
    }

    #[test]
    fn test_add_saturates() {
        let c = ColorRgba::new(0.25, 0.5, 0.75, 1.0) + ColorRgba::RED;
        assert_eq!(c, ColorRgba::new(1.0, 0.5, 0.75, 1.0));
        assert_channels_in_range(c);
    }

    #[test]
    fn test_mul_clamps() {
        let c = ColorRgba::new(0.5, 0.25, 1.0, 1.0) * 3.0;
        assert_eq!(c.to_array(), [1.0, 0.75, 1.0, 1.0]);
        assert_channels_in_range(ColorRgba::WHITE * -1.0);
    }

    #[test]
    fn test_grayscale_preserves_alpha() {
        let gray = ColorRgba::new(0.5, 0.25, 0.75, 0.5).to_grayscale();
        assert_eq!(gray.r(), gray.g());
        assert_eq!(gray.g(), gray.b());
        assert_eq!(gray.a(), 0.5);
        assert_relative_eq!(
            gray.r(),
            0.299 * 0.5 + 0.587 * 0.25 + 0.114 * 0.75,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_grayscale_white_is_white() {
        let gray = ColorRgba::WHITE.to_grayscale();
        assert_relative_eq!(gray.r(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_lerp_exact_endpoints() {
        let a = ColorRgba::new(0.1, 0.2, 0.3, 0.4);
        let b = ColorRgba::new(0.9, 0.8, 0.7, 0.6);
        assert_eq!(ColorRgba::lerp(a, b, 0.0), a);
        assert_eq!(ColorRgba::lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_lerp_red_to_blue_midpoint() {
        let mid = ColorRgba::lerp(ColorRgba::RED, ColorRgba::BLUE, 0.5);
        assert_eq!(mid, ColorRgba::new(0.5, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = ColorRgba::BLACK;
        let b = ColorRgba::WHITE;
        assert_eq!(ColorRgba::lerp(a, b, -1.0), a);
        assert_eq!(ColorRgba::lerp(a, b, 2.0), b);
    }

    #[test]
    fn test_lerp_monotonic_per_channel() {
        let a = ColorRgba::new(0.1, 0.0, 0.25, 0.5);
        let b = ColorRgba::new(0.9, 1.0, 0.75, 1.0);
        let mut prev = ColorRgba::lerp(a, b, 0.0);
        for i in 1..=8 {
            let cur = ColorRgba::lerp(a, b, i as f32 / 8.0);
            for (p, c) in prev.to_array().iter().zip(cur.to_array()) {
                assert!(c >= *p);
            }
            prev = cur;
        }
    }

    #[test]
    fn test_to_hsv_primaries() {
        let red = ColorRgba::RED.to_hsv();
        assert_eq!((red.x, red.y, red.z), (0.0, 1.0, 1.0));

        let green = ColorRgba::GREEN.to_hsv();
        assert_eq!((green.x, green.y, green.z), (120.0, 1.0, 1.0));

        let blue = ColorRgba::BLUE.to_hsv();
        assert_eq!((blue.x, blue.y, blue.z), (240.0, 1.0, 1.0));
    }

    #[test]
    fn test_to_hsv_achromatic() {
        let hsv = ColorRgba::gray(0.5, 1.0).to_hsv();
        assert_eq!(hsv.x, 0.0);
        assert_eq!(hsv.y, 0.0);
        assert_eq!(hsv.z, 0.5);

        let black = ColorRgba::BLACK.to_hsv();
        assert_eq!((black.x, black.y, black.z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_to_hsv_hue_wraps_positive() {
        // Magenta-ish: max is red, blue exceeds green, so the raw hue is
        // negative before the +360 wrap.
        let hsv = ColorRgba::new(1.0, 0.0, 0.5, 1.0).to_hsv();
        assert!(hsv.x >= 0.0 && hsv.x < 360.0);
        assert_relative_eq!(hsv.x, 330.0, epsilon = 1e-3);
    }

    #[test]
    fn test_from_hsv_sectors() {
        assert_eq!(ColorRgba::from_hsv(0.0, 1.0, 1.0), ColorRgba::RED);
        assert_eq!(ColorRgba::from_hsv(120.0, 1.0, 1.0), ColorRgba::GREEN);
        assert_eq!(ColorRgba::from_hsv(240.0, 1.0, 1.0), ColorRgba::BLUE);

        // Yellow sits on the 0/1 sector boundary
        let yellow = ColorRgba::from_hsv(60.0, 1.0, 1.0);
        assert_relative_eq!(yellow.r(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(yellow.g(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(yellow.b(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_from_hsv_wraps_hue() {
        let a = ColorRgba::from_hsv(390.0, 1.0, 1.0);
        let b = ColorRgba::from_hsv(30.0, 1.0, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_hsv_alpha_is_one() {
        assert_eq!(ColorRgba::from_hsv(200.0, 0.3, 0.7).a(), 1.0);
    }

    #[test]
    fn test_hsv_roundtrip_chromatic() {
        for (h, s, v) in [
            (15.0, 0.8, 0.9),
            (100.0, 0.5, 0.5),
            (210.0, 1.0, 0.25),
            (300.0, 0.33, 0.66),
        ] {
            let back = ColorRgba::from_hsv(h, s, v).to_hsv();
            assert_relative_eq!(back.x, h, epsilon = 1e-2);
            assert_relative_eq!(back.y, s, epsilon = 1e-4);
            assert_relative_eq!(back.z, v, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_hsv_roundtrip_achromatic_ignores_hue() {
        // Hue is not recoverable when saturation is zero; saturation and
        // value still round-trip.
        let back = ColorRgba::from_hsv(123.0, 0.0, 0.5).to_hsv();
        assert_eq!(back.y, 0.0);
        assert_relative_eq!(back.z, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_display_omits_alpha() {
        let c = ColorRgba::new(1.0, 0.5, 0.0, 0.25);
        assert_eq!(c.to_string(), "(1.00, 0.50, 0.00)");
    }

    #[test]
    fn test_parse() {
        let c: ColorRgba = "0.1, 0.2, 0.3, 0.4".parse().unwrap();
        assert_eq!(c, ColorRgba::new(0.1, 0.2, 0.3, 0.4));

        // Three components default alpha to 1
        let c: ColorRgba = "1,0,0".parse().unwrap();
        assert_eq!(c, ColorRgba::RED);

        assert!(matches!(
            "1,2".parse::<ColorRgba>(),
            Err(ParseColorError::ComponentCount { got: 2 })
        ));
        assert!(matches!(
            "1,0,zero".parse::<ColorRgba>(),
            Err(ParseColorError::InvalidFloat(_))
        ));
    }
}
