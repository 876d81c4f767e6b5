//! Human-readable telemetry for one frame.
//!
//! Everything here is derived from a [`Frame`] and, optionally, the frame
//! before it.  Nothing is remembered between calls and nothing fails: an
//! unknown gesture type renders as `unknown gesture type` inline.
//!
//! Directions and rotation axes are rendered with two decimals, positions
//! and velocities with one.

use std::fmt;

use surface_vector::{fixed, format_vector, Vector3};

use crate::frame::{Frame, Hand, Pointable};
use crate::gesture::{Gesture, GestureKind};
use crate::motion::MotionDelta;

const UNIT_DIGITS: usize = 2;

fn v1(v: Vector3) -> String { format_vector(v, 1) }
fn v2(v: Vector3) -> String { format_vector(v, UNIT_DIGITS) }

// ════════════════════════════════════════════════════════════════════════════
// Telemetry — the rendered blocks
// ════════════════════════════════════════════════════════════════════════════

/// Text blocks for one frame, one string per block.
#[derive(Clone, Debug, PartialEq)]
pub struct Telemetry {
    pub frame_id:   i64,
    pub frame:      String,
    pub hands:      Vec<String>,
    pub pointables: Vec<String>,
    /// One line per gesture.
    pub gestures:   Vec<String>,
}

/// Render `frame`.  Motion lines appear only when both `frame` and
/// `previous` are valid, in the frame block and the hand blocks alike.
pub fn format_frame(frame: &Frame, previous: Option<&Frame>) -> Telemetry {
    let previous = previous.filter(|p| p.valid);
    Telemetry {
        frame_id:   frame.id,
        frame:      frame_summary(frame, previous),
        hands:      frame.hands.iter().map(|h| hand_summary(h, frame, previous)).collect(),
        pointables: frame.pointables.iter().map(pointable_summary).collect(),
        gestures:   frame.gestures.iter().map(gesture_summary).collect(),
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.frame)?;
        write_section(f, &self.hands, "No hands", "\n\n")?;
        write_section(f, &self.pointables, "No pointables", "\n\n")?;
        write_section(f, &self.gestures, "No gestures", "\n")
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    blocks: &[String],
    empty: &str,
    sep: &str,
) -> fmt::Result {
    writeln!(f)?;
    if blocks.is_empty() {
        writeln!(f, "{}", empty)
    } else {
        writeln!(f, "{}", blocks.join(sep))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Blocks
// ════════════════════════════════════════════════════════════════════════════

fn push_motion(lines: &mut Vec<String>, d: &MotionDelta) {
    lines.push(format!("Translation: {} mm", v1(d.translation)));
    lines.push(format!("Rotation axis: {}", v2(d.rotation_axis)));
    lines.push(format!("Rotation angle: {} radians", fixed(d.rotation_angle, 2)));
    lines.push(format!("Scale factor: {}", fixed(d.scale_factor, 2)));
}

fn join_ids<T: ToString>(ids: impl Iterator<Item = T>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

pub fn frame_summary(frame: &Frame, previous: Option<&Frame>) -> String {
    let mut lines = vec![
        format!("Frame ID: {}", frame.id),
        format!("Timestamp: {} µs", frame.timestamp),
        format!("Hands: {}", frame.hands.len()),
        format!("Fingers: {}", frame.fingers().count()),
        format!("Tools: {}", frame.tools().count()),
        format!("Gestures: {}", frame.gestures.len()),
    ];
    if let Some(d) = previous.and_then(|p| frame.motion_since(p)) {
        push_motion(&mut lines, &d);
    }
    lines.join("\n")
}

pub fn hand_summary(hand: &Hand, frame: &Frame, previous: Option<&Frame>) -> String {
    let mut lines = vec![
        format!("Hand ID: {}", hand.id),
        format!("Direction: {}", v2(hand.direction)),
        format!("Palm normal: {}", v2(hand.palm_normal)),
        format!("Palm position: {} mm", v1(hand.palm_position)),
        format!("Palm velocity: {} mm/s", v1(hand.palm_velocity)),
    ];
    if let Some(sphere) = hand.sphere {
        lines.push(format!("Sphere center: {} mm", v1(sphere.center)));
        lines.push(format!("Sphere radius: {} mm", fixed(sphere.radius, 1)));
    }
    if let Some(prev) = previous.filter(|p| p.valid && frame.valid) {
        push_motion(&mut lines, &hand.motion_since(prev));
    }

    let fingers: Vec<_> = frame.pointables_of(hand.id).filter(|p| !p.is_tool()).collect();
    let tools:   Vec<_> = frame.pointables_of(hand.id).filter(|p| p.is_tool()).collect();
    if !fingers.is_empty() {
        lines.push(format!("Fingers IDs: {}", join_ids(fingers.iter().map(|p| p.id))));
    }
    if !tools.is_empty() {
        lines.push(format!("Tools IDs: {}", join_ids(tools.iter().map(|p| p.id))));
    }
    lines.join("\n")
}

pub fn pointable_summary(p: &Pointable) -> String {
    let owner = p.hand_id.map_or_else(|| "none".to_string(), |id| id.to_string());
    let mut lines = vec![
        format!("Pointable ID: {}", p.id),
        format!("Belongs to hand with ID: {}", owner),
    ];
    if p.is_tool() {
        lines.push("Classified as a tool".to_string());
        lines.push(format!("Length: {} mm", fixed(p.length, 1)));
        lines.push(format!("Width: {} mm", fixed(p.width, 1)));
    } else {
        lines.push("Classified as a finger".to_string());
        lines.push(format!("Length: {} mm", fixed(p.length, 1)));
    }
    lines.push(format!("Direction: {}", v2(p.direction)));
    lines.push(format!("Tip position: {} mm", v1(p.tip_position)));
    lines.push(format!("Tip velocity: {} mm/s", v1(p.tip_velocity)));
    lines.join("\n")
}

pub fn gesture_summary(g: &Gesture) -> String {
    let head = format!(
        "Gesture ID: {}, type: {}, state: {}, hand IDs: {}, pointable IDs: {}, duration: {} µs, ",
        g.id,
        g.kind.tag(),
        g.state.as_str(),
        join_ids(g.hand_ids.iter()),
        join_ids(g.pointable_ids.iter()),
        g.duration,
    );
    let body = match &g.kind {
        GestureKind::Circle { center, normal, radius, progress } => format!(
            "center: {} mm, normal: {}, radius: {} mm, progress: {} rotations",
            v1(*center), v2(*normal), fixed(*radius, 1), fixed(*progress, 2),
        ),
        GestureKind::Swipe { start_position, position, direction, speed } => format!(
            "start position: {} mm, current position: {} mm, direction: {}, speed: {} mm/s",
            v1(*start_position), v1(*position), v2(*direction), fixed(*speed, 1),
        ),
        GestureKind::ScreenTap { position, direction }
        | GestureKind::KeyTap { position, direction } => format!(
            "position: {} mm, direction: {}",
            v1(*position), v2(*direction),
        ),
        GestureKind::Unrecognized { .. } => "unknown gesture type".to_string(),
    };
    head + &body
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
