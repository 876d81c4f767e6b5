//! Top-level dispatcher.
//!
//! `AppState` owns the `FrameHistory`, the `PauseController` and the
//! `CalibrationStore`.  It processes `SurfaceEvent`s one at a time and hands
//! the results (telemetry, plane, status text) to a `DisplaySink`.

use std::sync::mpsc::Receiver;

use log::{debug, info, warn};
use num_traits::Zero;

use leap_frame::{format_frame, Frame, FrameHistory, Telemetry};
use surface_vector::{format_vector, DEFAULT_DIGITS};

use crate::calibration::CalibrationStore;
use crate::error::SurfaceError;
use crate::pause::{PauseController, PauseState};
use crate::plane::{compute_plane, Plane};
use crate::source::{Command, SurfaceEvent};

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Pause as soon as a frame carries any gesture.
    pub auto_pause_on_gesture: bool,
    /// Begin in the paused state.
    pub start_paused:          bool,
    /// Decimals for captured points and plane normals in status text.
    pub digits:                usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            auto_pause_on_gesture: false,
            start_paused:          false,
            digits:                DEFAULT_DIGITS,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DisplaySink — the presentation layer
// ════════════════════════════════════════════════════════════════════════════

pub trait DisplaySink {
    fn show_telemetry(&mut self, telemetry: &Telemetry);
    fn show_plane(&mut self, plane: &Plane);
    fn show_status(&mut self, status: &str);
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    history:     FrameHistory,
    pause:       PauseController,
    calibration: CalibrationStore,

    /// Most recent plane; recomputed on every request.
    plane:       Option<Plane>,
    digits:      usize,

    pub status:  String,
}

impl AppState {
    pub fn new(cfg: &AppConfig) -> Self {
        let mut pause = PauseController::new();
        pause.set_auto_pause_on_gesture(cfg.auto_pause_on_gesture);
        if cfg.start_paused {
            pause.toggle();
        }

        AppState {
            history:     FrameHistory::new(),
            pause,
            calibration: CalibrationStore::new(),
            plane:       None,
            digits:      cfg.digits,
            status:      "Ready — capture topLeft, topRight, bottomLeft, bottomRight".to_string(),
        }
    }

    // ── one sensor frame ──────────────────────────────────────────────────

    /// Process `frame`, or drop it whole while paused.
    pub fn handle_frame(&mut self, frame: Frame) -> Option<Telemetry> {
        if !self.pause.should_process_frame() {
            debug!("dispatch: paused, dropping frame {}", frame.id);
            return None;
        }

        let telemetry = format_frame(&frame, self.history.current());
        let gestures = frame.gestures.len();
        self.history.advance(frame);

        if self.pause.on_gestures_observed(gestures) {
            self.status = format!(
                "Auto-paused on {} gesture(s) [{}]",
                gestures,
                self.pause.control_label()
            );
        }
        Some(telemetry)
    }

    // ── one operator command ──────────────────────────────────────────────

    pub fn handle_command(&mut self, cmd: Command) -> Result<(), SurfaceError> {
        match cmd {
            Command::Capture(slot) => {
                // Primary pointable = current frame's pointables[0].
                let point = self.calibration.capture_from_frame(slot, self.history.current())?;
                let remaining = self.calibration.missing();
                self.status = if remaining.is_empty() {
                    format!("Captured {} at {} — all corners set", slot, format_vector(point, self.digits))
                } else {
                    format!(
                        "Captured {} at {} — {} remaining",
                        slot, format_vector(point, self.digits), remaining.len()
                    )
                };
            }

            Command::ComputePlane => {
                let plane = compute_plane(&self.calibration)?;
                self.status = if plane.normal.is_zero() {
                    "Plane is degenerate: corners are collinear".to_string()
                } else if plane.is_degenerate() {
                    format!("Plane is degenerate: normal {:?} has no direction", plane.normal)
                } else {
                    format!("Plane normal {}", format_vector(plane.normal, self.digits))
                };
                self.plane = Some(plane);
            }

            Command::TogglePause => {
                let state = self.pause.toggle();
                self.status = match state {
                    PauseState::Paused  => format!("Paused [{}]", self.pause.control_label()),
                    PauseState::Running => format!("Running [{}]", self.pause.control_label()),
                };
            }

            Command::SetAutoPause(enabled) => {
                self.pause.set_auto_pause_on_gesture(enabled);
                self.status = format!(
                    "Auto-pause on gesture {}",
                    if enabled { "enabled" } else { "disabled" }
                );
            }

            Command::Quit => { /* handled in run loop */ }
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn history(&self)     -> &FrameHistory     { &self.history }
    pub fn pause(&self)       -> &PauseController  { &self.pause }
    pub fn calibration(&self) -> &CalibrationStore { &self.calibration }
    pub fn plane(&self)       -> Option<&Plane>    { self.plane.as_ref() }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the dispatch loop
// ════════════════════════════════════════════════════════════════════════════

/// Drain `events` until `Quit` or until every source has hung up.
///
/// Errors from operator commands are logged, shown as status, and do not
/// end the loop.  Returns the final state.
pub fn run(cfg: &AppConfig, events: Receiver<SurfaceEvent>, sink: &mut dyn DisplaySink) -> AppState {
    let mut app = AppState::new(cfg);
    sink.show_status(&app.status);

    for event in events {
        match event {
            SurfaceEvent::Frame(frame) => {
                let was_running = app.pause.should_process_frame();
                if let Some(t) = app.handle_frame(frame) {
                    sink.show_telemetry(&t);
                }
                if was_running && !app.pause.should_process_frame() {
                    sink.show_status(&app.status);
                }
            }

            SurfaceEvent::Command(Command::Quit) => {
                info!("dispatch: quit requested");
                break;
            }

            SurfaceEvent::Command(cmd) => match app.handle_command(cmd) {
                Ok(()) => {
                    sink.show_status(&app.status);
                    if cmd == Command::ComputePlane {
                        if let Some(plane) = app.plane() {
                            sink.show_plane(plane);
                        }
                    }
                }
                Err(e) => {
                    warn!("dispatch: {:?} failed: {}", cmd, e);
                    app.status = e.to_string();
                    sink.show_status(&app.status);
                }
            },
        }
    }

    app
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
