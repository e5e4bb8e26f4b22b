//! Hit-cue audio collaborator
//!
//! The core never talks to a sound backend directly. The session owns one
//! injected [`HitCue`] collaborator; a cue is fire-and-forget and must not
//! queue or overlap itself. [`CueGate`] wraps backends that don't enforce
//! that on their own.

use thiserror::Error;

/// Transient cue playback failures. The session logs these and carries on;
/// a broken speaker never halts the simulation.
#[derive(Debug, Error)]
pub enum CueError {
    #[error("audio backend unavailable")]
    Unavailable,
    #[error("cue playback failed: {0}")]
    Playback(String),
}

/// The audio collaborator: one operation, fire-and-forget.
pub trait HitCue {
    /// Play the hit cue. A call while a cue is already in progress must be
    /// a no-op, not a queue or an overlap.
    fn play_hit_cue(&mut self) -> Result<(), CueError>;

    /// Advance any internal playback clock; called once per session tick
    fn advance(&mut self, _dt: f32) {}
}

/// Cue sink that plays nothing. Used by tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCue;

impl HitCue for NullCue {
    fn play_hit_cue(&mut self) -> Result<(), CueError> {
        Ok(())
    }
}

/// Wraps a backend and suppresses re-triggering for the cue's duration
#[derive(Debug)]
pub struct CueGate<C> {
    inner: C,
    cue_secs: f32,
    remaining: f32,
    muted: bool,
}

impl<C: HitCue> CueGate<C> {
    pub fn new(inner: C, cue_secs: f32) -> Self {
        Self {
            inner,
            cue_secs,
            remaining: 0.0,
            muted: false,
        }
    }

    /// Mute or unmute without dropping the backend
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Whether a cue is currently in progress
    pub fn playing(&self) -> bool {
        self.remaining > 0.0
    }
}

impl<C: HitCue> HitCue for CueGate<C> {
    fn play_hit_cue(&mut self) -> Result<(), CueError> {
        if self.muted || self.playing() {
            return Ok(());
        }
        self.inner.play_hit_cue()?;
        self.remaining = self.cue_secs;
        Ok(())
    }

    fn advance(&mut self, dt: f32) {
        self.inner.advance(dt);
        self.remaining = (self.remaining - dt).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingCue {
        plays: u32,
    }

    impl HitCue for CountingCue {
        fn play_hit_cue(&mut self) -> Result<(), CueError> {
            self.plays += 1;
            Ok(())
        }
    }

    struct BrokenCue;

    impl HitCue for BrokenCue {
        fn play_hit_cue(&mut self) -> Result<(), CueError> {
            Err(CueError::Unavailable)
        }
    }

    #[test]
    fn test_gate_suppresses_overlap() {
        let mut gate = CueGate::new(CountingCue::default(), 0.25);

        gate.play_hit_cue().unwrap();
        gate.play_hit_cue().unwrap();
        assert_eq!(gate.inner.plays, 1);
        assert!(gate.playing());

        // Still inside the cue window
        gate.advance(0.1);
        gate.play_hit_cue().unwrap();
        assert_eq!(gate.inner.plays, 1);

        // Window over: the next trigger goes through
        gate.advance(0.2);
        assert!(!gate.playing());
        gate.play_hit_cue().unwrap();
        assert_eq!(gate.inner.plays, 2);
    }

    #[test]
    fn test_muted_gate_plays_nothing() {
        let mut gate = CueGate::new(CountingCue::default(), 0.25);
        gate.set_muted(true);
        gate.play_hit_cue().unwrap();
        assert_eq!(gate.inner.plays, 0);
        assert!(!gate.playing());
    }

    #[test]
    fn test_failed_play_does_not_mark_playing() {
        let mut gate = CueGate::new(BrokenCue, 0.25);
        assert!(gate.play_hit_cue().is_err());
        assert!(!gate.playing());
    }
}
