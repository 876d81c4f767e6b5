//! One sensor snapshot: hands, pointables (fingers and tools), gestures.
//!
//! Frames are produced by a sensor adapter and only read by the rest of the
//! workspace.  The builder methods exist so adapters, the simulator and tests
//! can assemble frames without struct-literal noise.

use surface_vector::Vector3;

use crate::gesture::Gesture;
use crate::motion::{MotionDelta, MotionState};

// ════════════════════════════════════════════════════════════════════════════
// Pointable
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointableKind {
    Finger,
    Tool,
}

/// A finger or a held tool.
#[derive(Clone, Debug, PartialEq)]
pub struct Pointable {
    pub id:           i32,
    /// Owning hand, if the sensor attributed one.
    pub hand_id:      Option<i32>,
    pub kind:         PointableKind,
    /// mm
    pub length:       f64,
    /// mm
    pub width:        f64,
    pub direction:    Vector3,
    pub tip_position: Vector3,
    /// mm/s
    pub tip_velocity: Vector3,
}

impl Pointable {
    pub fn finger(id: i32, tip_position: Vector3) -> Self {
        Pointable {
            id,
            hand_id:      None,
            kind:         PointableKind::Finger,
            length:       0.0,
            width:        0.0,
            direction:    Vector3::new(0.0, 0.0, -1.0),
            tip_position,
            tip_velocity: Vector3::default(),
        }
    }

    pub fn tool(id: i32, tip_position: Vector3) -> Self {
        Pointable { kind: PointableKind::Tool, ..Pointable::finger(id, tip_position) }
    }

    pub fn on_hand(mut self, hand_id: i32) -> Self {
        self.hand_id = Some(hand_id);
        self
    }

    pub fn size(mut self, length: f64, width: f64) -> Self {
        self.length = length;
        self.width  = width;
        self
    }

    pub fn direction(mut self, direction: Vector3) -> Self {
        self.direction = direction;
        self
    }

    pub fn velocity(mut self, tip_velocity: Vector3) -> Self {
        self.tip_velocity = tip_velocity;
        self
    }

    pub fn is_tool(&self) -> bool {
        self.kind == PointableKind::Tool
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Hand
// ════════════════════════════════════════════════════════════════════════════

/// Best-fit sphere to the curvature of the hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    pub id:            i32,
    /// Unit vector from palm toward fingers.
    pub direction:     Vector3,
    pub palm_normal:   Vector3,
    pub palm_position: Vector3,
    pub palm_velocity: Vector3,
    /// Not every sensor generation reports one.
    pub sphere:        Option<Sphere>,
    pub motion:        MotionState,
}

impl Hand {
    pub fn new(id: i32, palm_position: Vector3) -> Self {
        Hand {
            id,
            direction:     Vector3::new(0.0, 0.0, -1.0),
            palm_normal:   Vector3::new(0.0, -1.0, 0.0),
            palm_position,
            palm_velocity: Vector3::default(),
            sphere:        None,
            motion:        MotionState::default(),
        }
    }

    pub fn orientation(mut self, direction: Vector3, palm_normal: Vector3) -> Self {
        self.direction   = direction;
        self.palm_normal = palm_normal;
        self
    }

    pub fn velocity(mut self, palm_velocity: Vector3) -> Self {
        self.palm_velocity = palm_velocity;
        self
    }

    pub fn sphere(mut self, center: Vector3, radius: f64) -> Self {
        self.sphere = Some(Sphere { center, radius });
        self
    }

    pub fn motion(mut self, motion: MotionState) -> Self {
        self.motion = motion;
        self
    }

    /// Motion of this hand since `earlier`.
    ///
    /// Identity when `earlier` has no hand with the same id.
    pub fn motion_since(&self, earlier: &Frame) -> MotionDelta {
        match earlier.hand(self.id) {
            Some(prev) => self.motion.since(&prev.motion),
            None       => MotionDelta::IDENTITY,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Frame
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub id:         i64,
    /// Microseconds, device clock.
    pub timestamp:  u64,
    /// False for the placeholder frames some sensors emit before tracking.
    pub valid:      bool,
    pub hands:      Vec<Hand>,
    pub pointables: Vec<Pointable>,
    pub gestures:   Vec<Gesture>,
    pub motion:     MotionState,
}

impl Frame {
    pub fn new(id: i64, timestamp: u64) -> Self {
        Frame {
            id,
            timestamp,
            valid:      true,
            hands:      Vec::new(),
            pointables: Vec::new(),
            gestures:   Vec::new(),
            motion:     MotionState::default(),
        }
    }

    /// A frame the sensor marked as not carrying tracking data.
    pub fn invalid(id: i64, timestamp: u64) -> Self {
        Frame { valid: false, ..Frame::new(id, timestamp) }
    }

    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hands.push(hand);
        self
    }

    pub fn with_pointable(mut self, pointable: Pointable) -> Self {
        self.pointables.push(pointable);
        self
    }

    pub fn with_gesture(mut self, gesture: Gesture) -> Self {
        self.gestures.push(gesture);
        self
    }

    pub fn with_motion(mut self, motion: MotionState) -> Self {
        self.motion = motion;
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn hand(&self, id: i32) -> Option<&Hand> {
        self.hands.iter().find(|h| h.id == id)
    }

    pub fn fingers(&self) -> impl Iterator<Item = &Pointable> {
        self.pointables.iter().filter(|p| !p.is_tool())
    }

    pub fn tools(&self) -> impl Iterator<Item = &Pointable> {
        self.pointables.iter().filter(|p| p.is_tool())
    }

    /// Pointables the sensor attributed to hand `hand_id`, in frame order.
    pub fn pointables_of(&self, hand_id: i32) -> impl Iterator<Item = &Pointable> {
        self.pointables.iter().filter(move |p| p.hand_id == Some(hand_id))
    }

    /// The first pointable in the frame, the one calibration samples.
    pub fn primary_pointable(&self) -> Option<&Pointable> {
        self.pointables.first()
    }

    /// Frame-level motion since `earlier`; `None` unless both are valid.
    pub fn motion_since(&self, earlier: &Frame) -> Option<MotionDelta> {
        if self.valid && earlier.valid {
            Some(self.motion.since(&earlier.motion))
        } else {
            None
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
