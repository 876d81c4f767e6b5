//! Where events come from — sensor hardware, the simulator, the operator.
//!
//! Every producer implements [`EventSource`] and runs on its own thread,
//! sending [`SurfaceEvent`]s into one shared channel.  The dispatcher drains
//! that channel on a single thread, so frames and operator commands are
//! naturally serialized.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, warn};

use leap_frame::Frame;

use crate::calibration::CalibrationSlot;

// ════════════════════════════════════════════════════════════════════════════
// Events
// ════════════════════════════════════════════════════════════════════════════

/// An operator trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Capture the primary pointable's tip into a corner slot.
    Capture(CalibrationSlot),
    /// Fit the plane from the four captured corners.
    ComputePlane,
    TogglePause,
    SetAutoPause(bool),
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    Frame(Frame),
    Command(Command),
}

// ════════════════════════════════════════════════════════════════════════════
// EventSource trait — unified interface for hw, sim and operator input
// ════════════════════════════════════════════════════════════════════════════

pub trait EventSource: Send + 'static {
    /// Produce events until done or until the receiver hangs up.
    fn run(self: Box<Self>, tx: Sender<SurfaceEvent>);
}

/// Spawn each source on its own thread, all feeding one receiver.
///
/// The receiver disconnects once every source has returned.
pub fn spawn_event_sources(sources: Vec<Box<dyn EventSource>>) -> Receiver<SurfaceEvent> {
    let (tx, rx) = mpsc::channel();
    for source in sources {
        let tx = tx.clone();
        thread::spawn(move || source.run(tx));
    }
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// StdinCommands — typed operator commands
// ════════════════════════════════════════════════════════════════════════════

/// Reads one command per line from stdin.
///
/// | Line | Command |
/// |---|---|
/// | `tl` `tr` `bl` `br` (or full slot names) | capture that corner |
/// | `plane` | compute the plane |
/// | `pause` / `p` | toggle pause |
/// | `auto on` / `auto off` | auto-pause on gesture |
/// | `quit` / `q` | quit |
pub struct StdinCommands;

impl EventSource for StdinCommands {
    fn run(self: Box<Self>, tx: Sender<SurfaceEvent>) {
        use std::io::BufRead;

        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(l)  => l,
                Err(e) => {
                    warn!("stdin: read failed: {}", e);
                    return;
                }
            };
            if line.trim().is_empty() { continue; }
            match parse_command(&line) {
                Some(cmd) => {
                    if tx.send(SurfaceEvent::Command(cmd)).is_err() { return; }
                    if cmd == Command::Quit { return; }
                }
                None => warn!("stdin: unrecognised command {:?}", line.trim()),
            }
        }
        debug!("stdin: closed");
    }
}

pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?.to_ascii_lowercase();
    let cmd = match head.as_str() {
        "plane"          => Command::ComputePlane,
        "pause" | "p"    => Command::TogglePause,
        "quit"  | "q"    => Command::Quit,
        "auto" => match words.next().map(str::to_ascii_lowercase).as_deref() {
            Some("on")  => Command::SetAutoPause(true),
            Some("off") => Command::SetAutoPause(false),
            _           => return None,
        },
        other => Command::Capture(CalibrationSlot::parse(other)?),
    };
    if words.next().is_some() { return None; }
    Some(cmd)
}

// ════════════════════════════════════════════════════════════════════════════
// LeapFrameSource — real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Frames from a LeapMotion controller via LeapC.
///
/// LeapC reports hands and digits only, so the frames it yields carry no
/// tools and no gestures, and the frame's cumulative translation is the mean
/// palm position.  Pointables are emitted hand by hand with the index finger
/// first, which makes the first hand's index fingertip the primary pointable.
#[cfg(feature = "leap")]
pub struct LeapFrameSource;

#[cfg(feature = "leap")]
impl EventSource for LeapFrameSource {
    fn run(self: Box<Self>, tx: Sender<SurfaceEvent>) {
        use leaprs::*;
        use leap_frame::{Hand, MotionState, Pointable};
        use surface_vector::Vector3;

        macro_rules! v {
            ($p:expr) => {{
                let p = $p;
                Vector3::new(f64::from(p.x), f64::from(p.y), f64::from(p.z))
            }};
        }

        // Index first, then thumb, middle, ring, pinky.
        const DIGIT_ORDER: [usize; 5] = [1, 0, 2, 3, 4];

        let mut connection = match Connection::create(ConnectionConfig::default()) {
            Ok(c)  => c,
            Err(e) => {
                log::error!("leap: failed to create LeapC connection: {:?}", e);
                return;
            }
        };
        if let Err(e) = connection.open() {
            log::error!("leap: failed to open device: {:?}", e);
            return;
        }

        loop {
            let msg = match connection.poll(100) {
                Ok(m)  => m,
                Err(_) => continue,
            };

            if let Event::Tracking(tracking) = msg.event() {
                let mut frame = Frame::new(tracking.tracking_frame_id, tracking.info.timestamp as u64);
                let mut palm_sum = Vector3::default();

                for hand in tracking.hands() {
                    let palm = hand.palm();
                    let id = hand.id as i32;
                    let palm_position = v!(palm.position());
                    palm_sum = palm_sum + palm_position;

                    frame = frame.with_hand(
                        Hand::new(id, palm_position)
                            .orientation(v!(palm.direction()), v!(palm.normal()))
                            .velocity(v!(palm.velocity()))
                            .motion(MotionState { translation: palm_position, ..Default::default() }),
                    );

                    let digits: Vec<_> = hand.digits().collect();
                    for &i in DIGIT_ORDER.iter().filter(|&&i| i < digits.len()) {
                        let digit = &digits[i];
                        let base = v!(digit.metacarpal().prev_joint());
                        let tip  = v!(digit.distal().next_joint());
                        let from = v!(digit.distal().prev_joint());
                        frame = frame.with_pointable(
                            Pointable::finger(id * 10 + i as i32, tip)
                                .on_hand(id)
                                .size((tip - base).magnitude(), f64::from(digit.distal().width))
                                .direction((tip - from).normalized().unwrap_or_default()),
                        );
                    }
                }

                if !frame.hands.is_empty() {
                    let n = frame.hands.len() as f64;
                    frame = frame.with_motion(MotionState {
                        translation: palm_sum * (1.0 / n),
                        ..Default::default()
                    });
                }

                if tx.send(SurfaceEvent::Frame(frame)).is_err() { return; }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
