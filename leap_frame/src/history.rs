//! The current frame and the one before it.

use log::trace;

use crate::frame::Frame;
use crate::motion::MotionDelta;

/// Two-deep frame history.
///
/// Only [`advance`](FrameHistory::advance) mutates it: the current frame
/// shifts to previous, the new frame becomes current, and whatever was
/// previous is dropped.
#[derive(Debug, Default)]
pub struct FrameHistory {
    current:  Option<Frame>,
    previous: Option<Frame>,
}

impl FrameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `frame` as current.  Any frame is accepted.
    pub fn advance(&mut self, frame: Frame) {
        trace!("history: advance to frame {}", frame.id);
        self.previous = self.current.replace(frame);
    }

    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&Frame> {
        self.previous.as_ref()
    }

    /// Motion between previous and current.
    ///
    /// `None` until two valid frames have been seen.  That is the normal
    /// state right after startup, not a failure.
    pub fn motion_delta(&self) -> Option<MotionDelta> {
        let current  = self.current.as_ref()?;
        let previous = self.previous.as_ref()?;
        current.motion_since(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionState;
    use surface_vector::Vector3;

    #[test]
    fn starts_empty() {
        let h = FrameHistory::new();
        assert!(h.current().is_none());
        assert!(h.previous().is_none());
        assert!(h.motion_delta().is_none());
    }

    #[test]
    fn advance_shifts_current_to_previous() {
        let mut h = FrameHistory::new();
        h.advance(Frame::new(1, 0));
        assert_eq!(h.current().map(|f| f.id), Some(1));
        assert!(h.previous().is_none());

        h.advance(Frame::new(2, 10));
        assert_eq!(h.current().map(|f| f.id), Some(2));
        assert_eq!(h.previous().map(|f| f.id), Some(1));

        h.advance(Frame::new(3, 20));
        assert_eq!(h.current().map(|f| f.id), Some(3));
        assert_eq!(h.previous().map(|f| f.id), Some(2));
    }

    #[test]
    fn single_frame_has_no_motion() {
        let mut h = FrameHistory::new();
        h.advance(Frame::new(1, 0));
        assert!(h.motion_delta().is_none());
    }

    #[test]
    fn invalid_previous_has_no_motion() {
        let mut h = FrameHistory::new();
        h.advance(Frame::invalid(1, 0));
        h.advance(Frame::new(2, 10));
        assert!(h.motion_delta().is_none());

        h.advance(Frame::new(3, 20));
        assert!(h.motion_delta().is_some());
    }

    #[test]
    fn motion_between_consecutive_frames() {
        let mut h = FrameHistory::new();
        h.advance(Frame::new(1, 0).with_motion(MotionState {
            translation: Vector3::new(10.0, 0.0, 0.0),
            ..Default::default()
        }));
        h.advance(Frame::new(2, 10).with_motion(MotionState {
            translation: Vector3::new(12.5, -1.0, 0.0),
            scale: 0.0,
            ..Default::default()
        }));
        let d = h.motion_delta().unwrap();
        assert_eq!(d.translation, Vector3::new(2.5, -1.0, 0.0));
        assert_eq!(d.scale_factor, 1.0);
    }
}
