//! # leap_frame
//!
//! What the hand-tracking sensor hands us, and what we read back out of it.
//!
//! * [`Frame`] — one snapshot: hands, pointables (fingers and tools),
//!   gestures, and the sensor's cumulative motion state.
//! * [`FrameHistory`] — current + previous frame, with the motion factors
//!   (translation, rotation axis/angle, scale) between them.
//! * [`telemetry`] — the per-frame text blocks shown to the operator.
//!
//! ```rust
//! use leap_frame::{Frame, FrameHistory, Pointable};
//! use surface_vector::Vector3;
//!
//! let mut history = FrameHistory::new();
//! history.advance(Frame::new(1, 0));
//! history.advance(
//!     Frame::new(2, 16_000).with_pointable(Pointable::finger(7, Vector3::new(0.0, 120.0, 0.0))),
//! );
//! assert_eq!(history.previous().map(|f| f.id), Some(1));
//! assert!(history.motion_delta().is_some());
//! ```

pub mod motion;
pub mod gesture;
pub mod frame;
pub mod history;
pub mod telemetry;

pub use frame::{Frame, Hand, Pointable, PointableKind, Sphere};
pub use gesture::{Gesture, GestureKind, GestureState, GestureType};
pub use history::FrameHistory;
pub use motion::{MotionDelta, MotionState};
pub use telemetry::{format_frame, Telemetry};
