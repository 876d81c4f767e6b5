//! # leap_surface
//!
//! Calibrate a physical surface (touch table, projection wall) in the
//! coordinate space of a hand-tracking sensor, while showing live telemetry
//! for every frame.
//!
//! ## Calibration
//!
//! The operator touches the four corners of the surface in turn and triggers
//! a capture for each.  A capture records the tip of the frame's primary
//! pointable (`pointables[0]`).  With all four captured, the plane normal is
//!
//! ```text
//! A = topRight − topLeft
//! B = topLeft  − bottomLeft
//! n = A × B                 (not normalized)
//! ```
//!
//! ## Event flow
//!
//! | Event | Effect |
//! |---|---|
//! | sensor frame | dropped while paused; otherwise telemetry, history advance, auto-pause check |
//! | `Capture(slot)` | store current primary tip in `slot` |
//! | `ComputePlane` | fit the plane from the four corners |
//! | `TogglePause` | running ↔ paused |
//! | `SetAutoPause(bool)` | pause automatically when a gesture appears |
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: a scripted session sweeps a virtual
//!   fingertip over a tilted table.
//! * `leap` — **Hardware mode**: polls a real LeapMotion controller via LeapC,
//!   with operator commands typed on stdin.

pub mod error;
pub mod calibration;
pub mod plane;
pub mod pause;
pub mod source;
pub mod sim;
pub mod app;

pub use calibration::{CalibrationSet, CalibrationSlot, CalibrationStore};
pub use error::{IncompleteCalibrationError, MissingInputError, SurfaceError};
pub use pause::{PauseController, PauseState};
pub use plane::{compute_normal, compute_plane, Plane};
