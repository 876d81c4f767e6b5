//! leap_surface — interactive entry point.

use flexi_logger::Logger;

use leap_frame::Telemetry;
use leap_surface::app::{run, AppConfig, DisplaySink};
use leap_surface::plane::Plane;
use leap_surface::source::{spawn_event_sources, EventSource, StdinCommands};
#[cfg(not(feature = "leap"))]
use leap_surface::sim::{SimConfig, SimulatedTable};
use leap_surface::CalibrationSlot;
use surface_vector::format_vector;

/// Command-line options beyond the dispatcher's own config.
struct Options {
    app:         AppConfig,
    /// Print telemetry for every Nth processed frame.
    every:       usize,
    /// Simulation only; a hardware build always reads stdin commands.
    #[cfg(not(feature = "leap"))]
    sim:         SimConfig,
    #[cfg(not(feature = "leap"))]
    interactive: bool,
}

fn main() {
    let _logger = match Logger::try_with_env_or_str("info").and_then(|l| l.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("  ⚠  logging disabled: {}", e);
            None
        }
    };

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Leap Surface — Four-Corner Plane Calibration          ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: leap_surface [--auto-pause] [--paused] [--digits N] [--every N] [--fast] [--interactive]");
            std::process::exit(2);
        }
    };

    let mut sources: Vec<Box<dyn EventSource>> = Vec::new();

    #[cfg(feature = "leap")]
    {
        println!("  Mode: LeapMotion hardware");
        println!("  Commands: tl tr bl br | plane | pause | auto on|off | quit");
        sources.push(Box::new(leap_surface::source::LeapFrameSource));
        sources.push(Box::new(StdinCommands));
    }
    #[cfg(not(feature = "leap"))]
    {
        println!("  Mode: simulated table  (use --features leap for hardware)");
        sources.push(Box::new(SimulatedTable::new(opts.sim.clone())));
        if opts.interactive {
            println!("  Commands: tl tr bl br | plane | pause | auto on|off | quit");
            sources.push(Box::new(StdinCommands));
        }
    }
    println!();

    let events = spawn_event_sources(sources);
    let mut sink = ConsoleSink { every: opts.every.max(1), seen: 0, digits: opts.app.digits };
    let app = run(&opts.app, events, &mut sink);

    println!();
    println!("  Calibration:");
    for slot in CalibrationSlot::ALL {
        match app.calibration().get(slot) {
            Some(p) => println!("    {:<12} {}", slot.name(), format_vector(p, opts.app.digits)),
            None    => println!("    {:<12} unset", slot.name()),
        }
    }
    match app.plane() {
        Some(plane) => println!("  Plane normal: {}", format_vector(plane.normal, opts.app.digits)),
        None        => println!("  Plane normal: not computed"),
    }
    println!();
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options {
        app:         AppConfig::default(),
        every:       15,
        #[cfg(not(feature = "leap"))]
        sim:         SimConfig::default(),
        #[cfg(not(feature = "leap"))]
        interactive: false,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--auto-pause"  => opts.app.auto_pause_on_gesture = true,
            "--paused"      => opts.app.start_paused = true,
            #[cfg(not(feature = "leap"))]
            "--fast"        => opts.sim.paced = false,
            #[cfg(not(feature = "leap"))]
            "--interactive" => opts.interactive = true,
            #[cfg(feature = "leap")]
            "--fast" | "--interactive" => {
                return Err(format!("{} only applies to the simulated table", arg));
            }
            "--digits" => {
                opts.app.digits = next_number(&mut args, "--digits")?;
            }
            "--every" => {
                opts.every = next_number(&mut args, "--every")?;
            }
            other => return Err(format!("unknown argument {:?}", other)),
        }
    }
    Ok(opts)
}

fn next_number(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<usize, String> {
    let raw = args.next().ok_or_else(|| format!("{} needs a value", flag))?;
    raw.parse().map_err(|_| format!("{} expects a number, got {:?}", flag, raw))
}

// ════════════════════════════════════════════════════════════════════════════
// ConsoleSink
// ════════════════════════════════════════════════════════════════════════════

struct ConsoleSink {
    every:  usize,
    seen:   usize,
    digits: usize,
}

impl DisplaySink for ConsoleSink {
    fn show_telemetry(&mut self, telemetry: &Telemetry) {
        let due = self.seen % self.every == 0;
        self.seen += 1;
        if !due && telemetry.gestures.is_empty() { return; }
        println!("──────────────────────────────────────────────────────────────");
        println!("{}", telemetry);
    }

    fn show_plane(&mut self, plane: &Plane) {
        println!("══════════════════════════════════════════════════════════════");
        println!("  Plane normal : {}", format_vector(plane.normal, self.digits));
        match plane.unit_normal() {
            Some(n) => println!("  Unit normal  : {}", format_vector(n, 3)),
            None    => println!("  Unit normal  : undefined (corners do not span a plane)"),
        }
        println!("  Anchor (TL)  : {} mm", format_vector(plane.anchor, self.digits));
        println!("══════════════════════════════════════════════════════════════");
    }

    fn show_status(&mut self, status: &str) {
        println!("  » {}", status);
    }
}
