//! Errors surfaced to operator triggers.
//!
//! None of these stop the dispatch loop; they are reported and the next
//! event is processed normally.

use thiserror::Error;

use crate::calibration::CalibrationSlot;

fn slot_list(slots: &[CalibrationSlot]) -> String {
    slots.iter().map(|s| s.name()).collect::<Vec<_>>().join(", ")
}

/// A capture was triggered without sensor input to capture from.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MissingInputError {
    #[error("cannot capture {slot}: no frame received yet")]
    NoFrame { slot: CalibrationSlot },

    #[error("cannot capture {slot}: frame {frame_id} has no pointable")]
    NoPointable { slot: CalibrationSlot, frame_id: i64 },
}

/// A plane was requested before all four corners were captured.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("calibration incomplete: {} not captured", slot_list(.missing))]
pub struct IncompleteCalibrationError {
    pub missing: Vec<CalibrationSlot>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error(transparent)]
    MissingInput(#[from] MissingInputError),

    #[error(transparent)]
    IncompleteCalibration(#[from] IncompleteCalibrationError),
}
