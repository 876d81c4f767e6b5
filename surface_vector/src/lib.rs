//! # surface_vector
//!
//! Three-component vectors for sensor-space geometry.
//!
//! * [`subtract`] and [`cross`] — the two operations plane fitting needs.
//! * [`format_vector`] — fixed-precision rendering as `(x, y, z)`.
//!
//! ```rust
//! use surface_vector::{Vector3, cross, format_vector};
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(format_vector(cross(a, b), 1), "(0.0, 0.0, 1.0)");
//! // Display uses one digit unless a precision is given.
//! assert_eq!(format!("{:.2}", a), "(1.00, 0.00, 0.00)");
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

/// Decimal digits used when rendering a vector without an explicit precision.
pub const DEFAULT_DIGITS: usize = 1;

// ════════════════════════════════════════════════════════════════════════════
// Vector3
// ════════════════════════════════════════════════════════════════════════════

/// A 3D vector (or point) in sensor space, millimetres unless noted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A captured position. Same shape as a vector; the name marks intent.
pub type Point3 = Vector3;

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    pub const fn from_array(v: [f64; 3]) -> Self {
        Vector3 { x: v[0], y: v[1], z: v[2] }
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Vector3> {
        let m = self.magnitude();
        if m == 0.0 || !m.is_finite() {
            None
        } else {
            Some(Vector3::new(self.x / m, self.y / m, self.z / m))
        }
    }
}

// ── operators ─────────────────────────────────────────────────────────────

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        subtract(self, rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, k: f64) -> Vector3 {
        Vector3::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Vector3::from_array(v)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Vector3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2]))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_vector(*self, f.precision().unwrap_or(DEFAULT_DIGITS)))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Free functions
// ════════════════════════════════════════════════════════════════════════════

/// Component-wise `a − b`.
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Right-handed cross product `a × b`.
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Render as `(x, y, z)` with `digits` decimals per component.
///
/// An exact zero always renders unsigned, so `-0.0` shows as `0.0`.
pub fn format_vector(v: Vector3, digits: usize) -> String {
    format!(
        "({}, {}, {})",
        fixed(v.x, digits),
        fixed(v.y, digits),
        fixed(v.z, digits)
    )
}

/// Fixed-point rendering of a single scalar; shared by the telemetry text.
pub fn fixed(value: f64, digits: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", digits, value)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ── subtract / cross ─────────────────────────────────────────────────
    #[test]
    fn subtract_componentwise() {
        let a = Vector3::new(5.0, -2.0, 3.5);
        let b = Vector3::new(1.0, 1.0, 0.5);
        assert_eq!(subtract(a, b), Vector3::new(4.0, -3.0, 3.0));
        assert_eq!(a - b, subtract(a, b));
    }

    #[test]
    fn cross_basis_vectors() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);
        assert_eq!(cross(x, y), z);
        assert_eq!(cross(y, z), x);
        assert_eq!(cross(y, x), -z);
    }

    #[test]
    fn cross_is_perpendicular() {
        let a = Vector3::new(2.0, -1.0, 4.0);
        let b = Vector3::new(0.5, 3.0, -2.0);
        let n = cross(a, b);
        assert!(n.dot(a).abs() < 1e-12);
        assert!(n.dot(b).abs() < 1e-12);
    }

    #[test]
    fn cross_of_parallel_is_zero() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert!(cross(a, a * 2.0).is_zero());
    }

    // ── normalize ────────────────────────────────────────────────────────
    #[test]
    fn normalized_has_unit_length() {
        let n = Vector3::new(3.0, 0.0, 4.0).normalized().unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(n, Vector3::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn normalized_zero_is_none() {
        assert_eq!(Vector3::zero().normalized(), None);
    }

    // ── formatting ───────────────────────────────────────────────────────
    #[test]
    fn format_two_digits() {
        let v = Vector3::new(1.25, 2.0, -3.333);
        assert_eq!(format_vector(v, 2), "(1.25, 2.00, -3.33)");
    }

    #[test]
    fn format_default_digit_via_display() {
        let v = Vector3::new(12.34, -0.06, 7.0);
        assert_eq!(v.to_string(), "(12.3, -0.1, 7.0)");
        assert_eq!(format!("{:.2}", v), "(12.34, -0.06, 7.00)");
    }

    #[test]
    fn format_negative_zero_unsigned() {
        let v = Vector3::new(-0.0, 0.0, -0.0);
        assert_eq!(format_vector(v, 1), "(0.0, 0.0, 0.0)");
    }

    #[test]
    fn from_f32_array() {
        let v: Vector3 = [1.5_f32, -2.0, 0.25].into();
        assert_eq!(v, Vector3::new(1.5, -2.0, 0.25));
    }
}
