//! Cumulative motion state and the pairwise factors derived from it.
//!
//! The sensor tags every frame (and every hand) with the translation,
//! rotation and log-scale it has accumulated since tracking began.  Motion
//! *between* two snapshots is the difference of those accumulators.

use surface_vector::Vector3;

/// Row-major 3×3 rotation matrix.
pub type Matrix3 = [[f64; 3]; 3];

pub const IDENTITY: Matrix3 = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Rotation by `theta` radians about the Z axis.
pub fn rotation_z(theta: f64) -> Matrix3 {
    let (s, c) = theta.sin_cos();
    [
        [c,  -s,  0.0],
        [s,   c,  0.0],
        [0.0, 0.0, 1.0],
    ]
}

/// `a · bᵀ`
fn mul_transpose(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..3).map(|k| a[i][k] * b[j][k]).sum();
        }
    }
    out
}

// ════════════════════════════════════════════════════════════════════════════
// MotionState — what the sensor reports
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    /// Accumulated translation, mm.
    pub translation: Vector3,
    /// Accumulated rotation.
    pub rotation:    Matrix3,
    /// Accumulated scale, natural log.
    pub scale:       f64,
}

impl Default for MotionState {
    fn default() -> Self {
        MotionState {
            translation: Vector3::default(),
            rotation:    IDENTITY,
            scale:       0.0,
        }
    }
}

impl MotionState {
    /// Motion that carries `earlier` to `self`.
    pub fn since(&self, earlier: &MotionState) -> MotionDelta {
        let r = mul_transpose(&self.rotation, &earlier.rotation);

        let axis = Vector3::new(
            r[2][1] - r[1][2],
            r[0][2] - r[2][0],
            r[1][0] - r[0][1],
        );
        let cos_angle = ((r[0][0] + r[1][1] + r[2][2] - 1.0) * 0.5).clamp(-1.0, 1.0);

        MotionDelta {
            translation:    self.translation - earlier.translation,
            rotation_axis:  axis.normalized().unwrap_or_default(),
            rotation_angle: cos_angle.acos(),
            scale_factor:   (self.scale - earlier.scale).exp(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// MotionDelta — what consumers read
// ════════════════════════════════════════════════════════════════════════════

/// Translation, rotation and scale between two snapshots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionDelta {
    pub translation:    Vector3,
    /// Unit axis, or zero when there is no rotation.
    pub rotation_axis:  Vector3,
    /// Radians, in `[0, π]`.
    pub rotation_angle: f64,
    pub scale_factor:   f64,
}

impl MotionDelta {
    /// No motion at all.
    pub const IDENTITY: MotionDelta = MotionDelta {
        translation:    Vector3::new(0.0, 0.0, 0.0),
        rotation_axis:  Vector3::new(0.0, 0.0, 0.0),
        rotation_angle: 0.0,
        scale_factor:   1.0,
    };
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
