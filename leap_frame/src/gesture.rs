//! Gestures as relayed by the sensor.
//!
//! Recognition happens on the device.  This module only types what arrives:
//! [`GestureType::from_tag`] reads the sensor's type tag, each
//! [`GestureKind`] variant carries the payload for one type, and a tag we
//! don't know lands in the `Unrecognized` arm of both.

use surface_vector::Vector3;

// ════════════════════════════════════════════════════════════════════════════
// GestureState
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Start,
    Update,
    Stop,
}

impl GestureState {
    pub fn as_str(self) -> &'static str {
        match self {
            GestureState::Start  => "start",
            GestureState::Update => "update",
            GestureState::Stop   => "stop",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GestureType — the sensor's type tag
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GestureType {
    Circle,
    Swipe,
    ScreenTap,
    KeyTap,
    Unrecognized(String),
}

impl GestureType {
    /// Tags are matched exactly, as the sensor spells them.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "circle"    => GestureType::Circle,
            "swipe"     => GestureType::Swipe,
            "screenTap" => GestureType::ScreenTap,
            "keyTap"    => GestureType::KeyTap,
            other       => GestureType::Unrecognized(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            GestureType::Circle           => "circle",
            GestureType::Swipe            => "swipe",
            GestureType::ScreenTap        => "screenTap",
            GestureType::KeyTap           => "keyTap",
            GestureType::Unrecognized(t)  => t,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GestureKind — per-type payload
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq)]
pub enum GestureKind {
    Circle {
        center:   Vector3,
        normal:   Vector3,
        radius:   f64,
        /// Completed rotations, fractional.
        progress: f64,
    },
    Swipe {
        start_position: Vector3,
        position:       Vector3,
        direction:      Vector3,
        /// mm/s
        speed:          f64,
    },
    ScreenTap {
        position:  Vector3,
        direction: Vector3,
    },
    KeyTap {
        position:  Vector3,
        direction: Vector3,
    },
    /// A type tag this build doesn't know about.
    Unrecognized { tag: String },
}

impl GestureKind {
    pub fn gesture_type(&self) -> GestureType {
        match self {
            GestureKind::Circle { .. }         => GestureType::Circle,
            GestureKind::Swipe { .. }          => GestureType::Swipe,
            GestureKind::ScreenTap { .. }      => GestureType::ScreenTap,
            GestureKind::KeyTap { .. }         => GestureType::KeyTap,
            GestureKind::Unrecognized { tag }  => GestureType::Unrecognized(tag.clone()),
        }
    }

    /// The sensor's tag for this gesture type.
    pub fn tag(&self) -> &str {
        match self {
            GestureKind::Circle { .. }         => "circle",
            GestureKind::Swipe { .. }          => "swipe",
            GestureKind::ScreenTap { .. }      => "screenTap",
            GestureKind::KeyTap { .. }         => "keyTap",
            GestureKind::Unrecognized { tag }  => tag,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Gesture
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq)]
pub struct Gesture {
    pub id:            i64,
    pub state:         GestureState,
    pub hand_ids:      Vec<i32>,
    pub pointable_ids: Vec<i32>,
    /// Microseconds since the gesture started.
    pub duration:      u64,
    pub kind:          GestureKind,
}

impl Gesture {
    pub fn new(id: i64, kind: GestureKind) -> Self {
        Gesture {
            id,
            state:         GestureState::Start,
            hand_ids:      Vec::new(),
            pointable_ids: Vec::new(),
            duration:      0,
            kind,
        }
    }

    pub fn state(mut self, state: GestureState) -> Self {
        self.state = state;
        self
    }

    pub fn hands(mut self, ids: &[i32]) -> Self {
        self.hand_ids = ids.to_vec();
        self
    }

    pub fn pointables(mut self, ids: &[i32]) -> Self {
        self.pointable_ids = ids.to_vec();
        self
    }

    pub fn duration(mut self, micros: u64) -> Self {
        self.duration = micros;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_sensor_names() {
        let v = Vector3::default();
        assert_eq!(GestureKind::KeyTap { position: v, direction: v }.tag(), "keyTap");
        assert_eq!(GestureKind::ScreenTap { position: v, direction: v }.tag(), "screenTap");
        assert_eq!(GestureKind::Unrecognized { tag: "pinch".into() }.tag(), "pinch");
    }

    #[test]
    fn from_tag_reads_sensor_names() {
        assert_eq!(GestureType::from_tag("keyTap"), GestureType::KeyTap);
        assert_eq!(GestureType::from_tag("swipe"), GestureType::Swipe);
        assert_eq!(GestureType::from_tag("circle"), GestureType::Circle);
        assert_eq!(GestureType::from_tag("pinch"), GestureType::Unrecognized("pinch".into()));
        // Tags are case-sensitive.
        assert_eq!(GestureType::from_tag("KeyTap"), GestureType::Unrecognized("KeyTap".into()));
    }

    #[test]
    fn tag_round_trips_through_from_tag() {
        for tag in ["circle", "swipe", "screenTap", "keyTap", "pinch"] {
            assert_eq!(GestureType::from_tag(tag).tag(), tag);
        }
    }

    #[test]
    fn kind_reports_its_type() {
        let v = Vector3::default();
        let tap = GestureKind::ScreenTap { position: v, direction: v };
        assert_eq!(tap.gesture_type(), GestureType::ScreenTap);
        assert_eq!(GestureType::from_tag(tap.tag()), tap.gesture_type());
        let odd = GestureKind::Unrecognized { tag: "pinch".into() };
        assert_eq!(odd.gesture_type(), GestureType::Unrecognized("pinch".into()));
    }

    #[test]
    fn builder_sets_fields() {
        let g = Gesture::new(9, GestureKind::Unrecognized { tag: "x".into() })
            .state(GestureState::Stop)
            .hands(&[1])
            .pointables(&[10, 11])
            .duration(250);
        assert_eq!(g.state, GestureState::Stop);
        assert_eq!(g.hand_ids, vec![1]);
        assert_eq!(g.pointable_ids, vec![10, 11]);
        assert_eq!(g.duration, 250);
    }
}
