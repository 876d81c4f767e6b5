//! The four corner points of the surface being calibrated.
//!
//! Each corner is captured from the primary pointable's tip at the moment the
//! operator triggers it.  Captures overwrite; nothing is ever cleared.

use std::fmt;

use log::info;

use leap_frame::Frame;
use surface_vector::Point3;

use crate::error::MissingInputError;

// ════════════════════════════════════════════════════════════════════════════
// CalibrationSlot
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalibrationSlot {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CalibrationSlot {
    pub const ALL: [CalibrationSlot; 4] = [
        CalibrationSlot::TopLeft,
        CalibrationSlot::TopRight,
        CalibrationSlot::BottomLeft,
        CalibrationSlot::BottomRight,
    ];

    fn index(self) -> usize {
        match self {
            CalibrationSlot::TopLeft     => 0,
            CalibrationSlot::TopRight    => 1,
            CalibrationSlot::BottomLeft  => 2,
            CalibrationSlot::BottomRight => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CalibrationSlot::TopLeft     => "topLeft",
            CalibrationSlot::TopRight    => "topRight",
            CalibrationSlot::BottomLeft  => "bottomLeft",
            CalibrationSlot::BottomRight => "bottomRight",
        }
    }

    /// Accepts the camelCase name, a dashed name, or the two-letter short form.
    pub fn parse(s: &str) -> Option<CalibrationSlot> {
        match s.to_ascii_lowercase().as_str() {
            "tl" | "topleft"     | "top-left"     => Some(CalibrationSlot::TopLeft),
            "tr" | "topright"    | "top-right"    => Some(CalibrationSlot::TopRight),
            "bl" | "bottomleft"  | "bottom-left"  => Some(CalibrationSlot::BottomLeft),
            "br" | "bottomright" | "bottom-right" => Some(CalibrationSlot::BottomRight),
            _ => None,
        }
    }
}

impl fmt::Display for CalibrationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// CalibrationSet — a fully captured snapshot
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationSet {
    pub top_left:     Point3,
    pub top_right:    Point3,
    pub bottom_left:  Point3,
    pub bottom_right: Point3,
}

// ════════════════════════════════════════════════════════════════════════════
// CalibrationStore
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalibrationStore {
    slots: [Option<Point3>; 4],
}

impl CalibrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite `slot` with `point`.  No range check is made.
    pub fn capture(&mut self, slot: CalibrationSlot, point: Point3) {
        self.slots[slot.index()] = Some(point);
        info!("calibration: captured {} at {}", slot, point);
    }

    /// Capture the tip of `frame`'s primary pointable (`pointables[0]`).
    pub fn capture_from_frame(
        &mut self,
        slot: CalibrationSlot,
        frame: Option<&Frame>,
    ) -> Result<Point3, MissingInputError> {
        let frame = frame.ok_or(MissingInputError::NoFrame { slot })?;
        let tip = frame
            .primary_pointable()
            .map(|p| p.tip_position)
            .ok_or(MissingInputError::NoPointable { slot, frame_id: frame.id })?;
        self.capture(slot, tip);
        Ok(tip)
    }

    pub fn get(&self, slot: CalibrationSlot) -> Option<Point3> {
        self.slots[slot.index()]
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Slots not yet captured, in [`CalibrationSlot::ALL`] order.
    pub fn missing(&self) -> Vec<CalibrationSlot> {
        CalibrationSlot::ALL
            .into_iter()
            .filter(|s| self.get(*s).is_none())
            .collect()
    }

    pub fn complete_set(&self) -> Option<CalibrationSet> {
        Some(CalibrationSet {
            top_left:     self.get(CalibrationSlot::TopLeft)?,
            top_right:    self.get(CalibrationSlot::TopRight)?,
            bottom_left:  self.get(CalibrationSlot::BottomLeft)?,
            bottom_right: self.get(CalibrationSlot::BottomRight)?,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use leap_frame::Pointable;
    use surface_vector::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 { Vector3::new(x, y, z) }

    #[test]
    fn starts_unset() {
        let store = CalibrationStore::new();
        for slot in CalibrationSlot::ALL {
            assert_eq!(store.get(slot), None);
        }
        assert!(!store.is_complete());
        assert_eq!(store.missing(), CalibrationSlot::ALL.to_vec());
    }

    #[test]
    fn complete_after_all_four() {
        let mut store = CalibrationStore::new();
        for (i, slot) in CalibrationSlot::ALL.into_iter().enumerate() {
            assert!(!store.is_complete());
            store.capture(slot, p(i as f64, 0.0, 0.0));
        }
        assert!(store.is_complete());
        assert!(store.missing().is_empty());
        let set = store.complete_set().unwrap();
        assert_eq!(set.bottom_left, p(2.0, 0.0, 0.0));
    }

    #[test]
    fn capture_overwrites() {
        let mut store = CalibrationStore::new();
        store.capture(CalibrationSlot::TopRight, p(1.0, 1.0, 1.0));
        store.capture(CalibrationSlot::TopRight, p(2.0, 2.0, 2.0));
        assert_eq!(store.get(CalibrationSlot::TopRight), Some(p(2.0, 2.0, 2.0)));
    }

    #[test]
    fn repeated_capture_is_idempotent() {
        let mut once = CalibrationStore::new();
        once.capture(CalibrationSlot::TopLeft, p(3.0, 4.0, 5.0));

        let mut twice = once.clone();
        twice.capture(CalibrationSlot::TopLeft, p(3.0, 4.0, 5.0));

        assert_eq!(once, twice);
        assert_eq!(once.is_complete(), twice.is_complete());
    }

    #[test]
    fn capture_from_frame_uses_first_pointable() {
        let frame = Frame::new(5, 0)
            .with_pointable(Pointable::finger(1, p(10.0, 20.0, 30.0)))
            .with_pointable(Pointable::finger(2, p(-1.0, -1.0, -1.0)));
        let mut store = CalibrationStore::new();
        let got = store.capture_from_frame(CalibrationSlot::BottomLeft, Some(&frame));
        assert_eq!(got, Ok(p(10.0, 20.0, 30.0)));
        assert_eq!(store.get(CalibrationSlot::BottomLeft), Some(p(10.0, 20.0, 30.0)));
    }

    #[test]
    fn capture_without_frame_is_missing_input() {
        let mut store = CalibrationStore::new();
        let err = store.capture_from_frame(CalibrationSlot::TopLeft, None).unwrap_err();
        assert_eq!(err, MissingInputError::NoFrame { slot: CalibrationSlot::TopLeft });
        assert_eq!(store, CalibrationStore::new());
    }

    #[test]
    fn capture_without_pointable_is_missing_input() {
        let mut store = CalibrationStore::new();
        let frame = Frame::new(8, 0);
        let err = store.capture_from_frame(CalibrationSlot::TopRight, Some(&frame)).unwrap_err();
        assert_eq!(
            err,
            MissingInputError::NoPointable { slot: CalibrationSlot::TopRight, frame_id: 8 }
        );
        assert_eq!(store.get(CalibrationSlot::TopRight), None);
    }

    #[test]
    fn slot_parse_forms() {
        assert_eq!(CalibrationSlot::parse("tl"), Some(CalibrationSlot::TopLeft));
        assert_eq!(CalibrationSlot::parse("topRight"), Some(CalibrationSlot::TopRight));
        assert_eq!(CalibrationSlot::parse("bottom-left"), Some(CalibrationSlot::BottomLeft));
        assert_eq!(CalibrationSlot::parse("BR"), Some(CalibrationSlot::BottomRight));
        assert_eq!(CalibrationSlot::parse("middle"), None);
    }
}
