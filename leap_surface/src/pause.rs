//! Whether incoming frames are processed at all.

use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseState { Running, Paused }

/// Running/paused gate, with optional auto-pause when gestures appear.
///
/// The only automatic transition is running → paused on a gesture; resuming
/// always takes an explicit [`toggle`](PauseController::toggle).
#[derive(Debug, Clone)]
pub struct PauseController {
    state:                 PauseState,
    auto_pause_on_gesture: bool,
}

impl Default for PauseController {
    fn default() -> Self {
        PauseController { state: PauseState::Running, auto_pause_on_gesture: false }
    }
}

impl PauseController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PauseState { self.state }
    pub fn auto_pause_on_gesture(&self) -> bool { self.auto_pause_on_gesture }

    pub fn toggle(&mut self) -> PauseState {
        self.state = match self.state {
            PauseState::Running => PauseState::Paused,
            PauseState::Paused  => PauseState::Running,
        };
        info!("pause: toggled to {:?}", self.state);
        self.state
    }

    /// Only sets the flag; the current state is left alone.
    pub fn set_auto_pause_on_gesture(&mut self, enabled: bool) {
        self.auto_pause_on_gesture = enabled;
    }

    /// Returns true if this call paused.
    pub fn on_gestures_observed(&mut self, count: usize) -> bool {
        if count > 0 && self.auto_pause_on_gesture && self.state == PauseState::Running {
            self.state = PauseState::Paused;
            info!("pause: {} gesture(s) observed, auto-paused", count);
            true
        } else {
            false
        }
    }

    pub fn should_process_frame(&self) -> bool {
        self.state == PauseState::Running
    }

    /// Text for the operator's pause control: the action it would take.
    pub fn control_label(&self) -> &'static str {
        match self.state {
            PauseState::Running => "Pause",
            PauseState::Paused  => "Resume",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
