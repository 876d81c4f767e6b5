//! Simulated calibration session — no hardware required.
//!
//! A single hand sweeps its index fingertip from a resting position to each
//! corner of a slightly tilted virtual table in turn, triggering a capture on
//! arrival.  After the fourth corner the plane is requested, then the hand
//! draws a circle and a swipe so the gesture telemetry (and auto-pause, if
//! enabled) has something to react to.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use leap_frame::motion::rotation_z;
use leap_frame::{Frame, Gesture, GestureKind, GestureState, Hand, MotionState, Pointable};
use surface_vector::{Point3, Vector3};

use crate::calibration::CalibrationSlot;
use crate::source::{Command, EventSource, SurfaceEvent};

const HAND_ID:  i32 = 1;
const INDEX_ID: i32 = 11;
const THUMB_ID: i32 = 10;

/// Palm sits this far behind (and above) the index tip.
const PALM_OFFSET:  Vector3 = Vector3::new(0.0, 25.0, 70.0);
const THUMB_OFFSET: Vector3 = Vector3::new(-45.0, 10.0, 35.0);

// ════════════════════════════════════════════════════════════════════════════
// SimConfig
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Table corners in [`CalibrationSlot::ALL`] order, mm.
    pub corners:          [Point3; 4],
    /// Fingertip position before the first sweep.
    pub rest:             Point3,
    /// Frames spent travelling to each corner.
    pub steps_per_corner: usize,
    /// Frames after the gestures before the session quits.
    pub trailing_frames:  usize,
    /// Sensor clock step between frames.
    pub frame_interval:   Duration,
    /// Sleep `frame_interval` between frames; off for as-fast-as-possible replay.
    pub paced:            bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            corners: [
                Vector3::new(-120.0, 150.0, -80.0),
                Vector3::new( 120.0, 160.0, -80.0),
                Vector3::new(-120.0, 110.0,  60.0),
                Vector3::new( 120.0, 120.0,  60.0),
            ],
            rest:             Vector3::new(0.0, 250.0, 0.0),
            steps_per_corner: 30,
            trailing_frames:  10,
            frame_interval:   Duration::from_millis(16),
            paced:            true,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SimulatedTable
// ════════════════════════════════════════════════════════════════════════════

pub struct SimulatedTable {
    cfg: SimConfig,
}

/// Builds frames for the script, tracking id, time and the previous tip.
struct FrameMaker {
    next_id:   i64,
    dt_us:     u64,
    last_tip:  Point3,
    yaw:       f64,
}

impl FrameMaker {
    fn frame(&mut self, tip: Point3) -> Frame {
        let id = self.next_id;
        self.next_id += 1;

        let dt = self.dt_us as f64 / 1_000_000.0;
        let velocity = (tip - self.last_tip) * (1.0 / dt);
        self.last_tip = tip;
        self.yaw += 0.002;

        let palm = tip + PALM_OFFSET;
        let motion = MotionState {
            translation: palm,
            rotation:    rotation_z(self.yaw),
            scale:       0.0,
        };

        Frame::new(id, id as u64 * self.dt_us)
            .with_motion(motion)
            .with_hand(
                Hand::new(HAND_ID, palm)
                    .velocity(velocity)
                    .sphere(palm + Vector3::new(0.0, -30.0, 0.0), 85.0)
                    .motion(motion),
            )
            .with_pointable(
                Pointable::finger(INDEX_ID, tip)
                    .on_hand(HAND_ID)
                    .size(57.0, 17.0)
                    .velocity(velocity),
            )
            .with_pointable(
                Pointable::finger(THUMB_ID, tip + THUMB_OFFSET)
                    .on_hand(HAND_ID)
                    .size(48.0, 19.5)
                    .direction(Vector3::new(0.5, 0.0, -0.87))
                    .velocity(velocity),
            )
    }
}

impl SimulatedTable {
    pub fn new(cfg: SimConfig) -> Self {
        SimulatedTable { cfg }
    }

    /// The whole session as an event list, unpaced.
    pub fn script(&self) -> Vec<SurfaceEvent> {
        let cfg = &self.cfg;
        let steps = cfg.steps_per_corner.max(1);
        let mut maker = FrameMaker {
            next_id:  1,
            dt_us:    (cfg.frame_interval.as_micros() as u64).max(1),
            last_tip: cfg.rest,
            yaw:      0.0,
        };
        let mut events = Vec::new();

        // ── sweep to each corner and capture ─────────────────────────────
        let mut from = cfg.rest;
        for (slot, &corner) in CalibrationSlot::ALL.iter().zip(cfg.corners.iter()) {
            for step in 1..=steps {
                let tip = if step == steps {
                    corner
                } else {
                    from + (corner - from) * (step as f64 / steps as f64)
                };
                events.push(SurfaceEvent::Frame(maker.frame(tip)));
            }
            events.push(SurfaceEvent::Command(Command::Capture(*slot)));
            from = corner;
        }
        events.push(SurfaceEvent::Command(Command::ComputePlane));

        // ── gestures ─────────────────────────────────────────────────────
        let circle = Gesture::new(1, GestureKind::Circle {
            center:   from,
            normal:   Vector3::new(0.0, 0.0, 1.0),
            radius:   22.0,
            progress: 1.25,
        })
        .state(GestureState::Update)
        .hands(&[HAND_ID])
        .pointables(&[INDEX_ID])
        .duration(420_000);
        events.push(SurfaceEvent::Frame(maker.frame(from).with_gesture(circle)));

        let swipe_end = from + Vector3::new(90.0, 0.0, 0.0);
        let swipe = Gesture::new(2, GestureKind::Swipe {
            start_position: from,
            position:       swipe_end,
            direction:      Vector3::new(1.0, 0.0, 0.0),
            speed:          950.0,
        })
        .state(GestureState::Stop)
        .hands(&[HAND_ID])
        .pointables(&[INDEX_ID])
        .duration(95_000);
        events.push(SurfaceEvent::Frame(maker.frame(swipe_end).with_gesture(swipe)));

        for _ in 0..cfg.trailing_frames {
            events.push(SurfaceEvent::Frame(maker.frame(swipe_end)));
        }
        events.push(SurfaceEvent::Command(Command::Quit));
        events
    }
}

impl EventSource for SimulatedTable {
    fn run(self: Box<Self>, tx: Sender<SurfaceEvent>) {
        let interval = self.cfg.frame_interval;
        let paced = self.cfg.paced;
        for event in self.script() {
            if paced && matches!(event, SurfaceEvent::Frame(_)) {
                thread::sleep(interval);
            }
            if tx.send(event).is_err() { return; }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
