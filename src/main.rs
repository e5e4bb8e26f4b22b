//! Laser Dodge headless demo
//!
//! Drives a scripted session at the nominal cadence and prints the final
//! snapshot. Set `RUST_LOG=debug` for per-volley detail.

use laser_dodge::audio::{CueError, CueGate, HitCue};
use laser_dodge::sim::TickInput;
use laser_dodge::{GameSession, SessionConfig};

/// Demo cue backend: just logs. The gate keeps it from spamming.
struct LogCue;

impl HitCue for LogCue {
    fn play_hit_cue(&mut self) -> Result<(), CueError> {
        log::info!("* hit cue *");
        Ok(())
    }
}

/// Movement applied per tick while strafing
const MOVE_STEP: i32 = 20;

/// Hard cap on demo length (ticks)
const MAX_TICKS: u32 = 20_000;

fn main() {
    env_logger::init();

    let config = SessionConfig::calibrated(0xC0FFEE);
    let audio = CueGate::new(LogCue, 0.25);
    let mut session = GameSession::new(&config, audio).expect("calibrated config is valid");

    session.reset();

    // Scripted dodge: strafe side to side under the anchors
    let mut dir = 1;
    for i in 0..MAX_TICKS {
        if session.is_over() {
            break;
        }
        if i % 40 == 0 {
            dir = -dir;
        }
        session.tick(&TickInput {
            move_x: dir * MOVE_STEP,
            move_y: 0,
        });
    }

    let snap = session.snapshot();
    log::info!("survived {} ticks", snap.score);
    println!(
        "{}",
        serde_json::to_string_pretty(&snap).expect("snapshot serializes")
    );
}
