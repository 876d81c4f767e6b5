//! Plane fitting from the captured corners.
//!
//! Two edges of the surface, `A = topRight − topLeft` and
//! `B = topLeft − bottomLeft`, span the plane; the normal is `A × B`.
//! The argument order is kept exactly as is, so the normal's orientation
//! (toward or away from the sensor) follows from it and is not corrected.
//!
//! The normal is returned un-normalized: its magnitude is twice the area of
//! the triangle topLeft/topRight/bottomLeft.  Collinear or coincident corners
//! give a zero normal, which is a valid result; corners far enough out can
//! also overflow it.  Check [`Plane::is_degenerate`] before using it as a
//! direction.

use log::{info, warn};

use surface_vector::{cross, subtract, Point3, Vector3};

use crate::calibration::{CalibrationSet, CalibrationStore};
use crate::error::IncompleteCalibrationError;

/// A fitted surface, anchored at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub anchor: Point3,
}

impl Plane {
    /// True when the normal has no usable direction: zero, infinite or NaN.
    pub fn is_degenerate(&self) -> bool {
        self.unit_normal().is_none()
    }

    /// The normal scaled to unit length, `None` when degenerate.
    pub fn unit_normal(&self) -> Option<Vector3> {
        self.normal.normalized()
    }

    /// Signed distance of `p` from the plane along the unit normal.
    pub fn signed_distance(&self, p: Point3) -> Option<f64> {
        self.unit_normal().map(|n| n.dot(subtract(p, self.anchor)))
    }
}

/// `(topRight − topLeft) × (topLeft − bottomLeft)`
pub fn normal_of(set: &CalibrationSet) -> Vector3 {
    let a = subtract(set.top_right, set.top_left);
    let b = subtract(set.top_left, set.bottom_left);
    cross(a, b)
}

/// Normal of the calibrated surface.  The store is only read.
pub fn compute_normal(store: &CalibrationStore) -> Result<Vector3, IncompleteCalibrationError> {
    compute_plane(store).map(|plane| plane.normal)
}

pub fn compute_plane(store: &CalibrationStore) -> Result<Plane, IncompleteCalibrationError> {
    let set = store
        .complete_set()
        .ok_or_else(|| IncompleteCalibrationError { missing: store.missing() })?;

    let plane = Plane { normal: normal_of(&set), anchor: set.top_left };
    if plane.is_degenerate() {
        warn!("plane: corners do not span a plane, normal {:?}", plane.normal);
    } else {
        info!("plane: normal {:.2}", plane.normal);
    }
    Ok(plane)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::CalibrationSlot::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 { Vector3::new(x, y, z) }

    fn store(tl: Point3, tr: Point3, bl: Point3, br: Point3) -> CalibrationStore {
        let mut s = CalibrationStore::new();
        s.capture(TopLeft, tl);
        s.capture(TopRight, tr);
        s.capture(BottomLeft, bl);
        s.capture(BottomRight, br);
        s
    }

    #[test]
    fn unit_square_normal_follows_formula() {
        // A = (1,0,0), B = (0,-1,0)  →  A × B = (0, 0, -1)
        let s = store(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0));
        assert_eq!(compute_normal(&s), Ok(p(0.0, 0.0, -1.0)));
    }

    #[test]
    fn bottom_right_does_not_affect_normal() {
        let a = store(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0));
        let b = store(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(50.0, -3.0, 9.0));
        assert_eq!(compute_normal(&a), compute_normal(&b));
    }

    #[test]
    fn incomplete_fails_without_mutation() {
        let mut s = CalibrationStore::new();
        s.capture(TopLeft, p(0.0, 0.0, 0.0));
        s.capture(TopRight, p(1.0, 0.0, 0.0));
        s.capture(BottomLeft, p(0.0, 1.0, 0.0));
        let before = s.clone();

        let err = compute_normal(&s).unwrap_err();
        assert_eq!(err.missing, vec![BottomRight]);
        assert_eq!(s, before);
    }

    #[test]
    fn coincident_corners_give_zero_normal() {
        let o = p(0.0, 0.0, 0.0);
        let s = store(o, o, o, p(1.0, 1.0, 1.0));
        let plane = compute_plane(&s).unwrap();
        assert_eq!(plane.normal, o);
        assert!(plane.is_degenerate());
        assert_eq!(plane.unit_normal(), None);
        assert_eq!(plane.signed_distance(p(0.0, 0.0, 5.0)), None);
    }

    #[test]
    fn collinear_corners_give_zero_normal() {
        let s = store(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(-3.0, 0.0, 0.0), p(0.0, 0.0, 0.0));
        assert!(compute_plane(&s).unwrap().is_degenerate());
    }

    #[test]
    fn overflowing_normal_is_degenerate() {
        let o = p(0.0, 0.0, 0.0);
        let s = store(o, p(1e308, 0.0, 0.0), p(0.0, -1e308, 0.0), o);
        let plane = compute_plane(&s).unwrap();
        assert!(plane.normal.z.is_infinite());
        assert!(plane.is_degenerate());
        assert_eq!(plane.unit_normal(), None);
    }

    #[test]
    fn nan_corner_is_degenerate() {
        let s = store(p(0.0, 0.0, 0.0), p(f64::NAN, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0));
        let plane = compute_plane(&s).unwrap();
        assert!(plane.is_degenerate());
        assert_eq!(plane.signed_distance(p(0.0, 0.0, 1.0)), None);
    }

    #[test]
    fn magnitude_is_twice_triangle_area() {
        // Right triangle with legs 30 and 40: area 600.
        let s = store(
            p(10.0, 200.0, -50.0),
            p(40.0, 200.0, -50.0),
            p(10.0, 200.0, -10.0),
            p(40.0, 200.0, -10.0),
        );
        let n = compute_normal(&s).unwrap();
        assert!((n.magnitude() - 1200.0).abs() < 1e-9);
        assert_eq!(n.normalized(), Some(p(0.0, 1.0, 0.0)));
    }

    #[test]
    fn signed_distance_along_unit_normal() {
        let s = store(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0));
        let plane = compute_plane(&s).unwrap();
        assert_eq!(plane.signed_distance(p(0.3, 0.7, -2.0)), Some(2.0));
    }
}
