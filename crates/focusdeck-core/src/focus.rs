//! Focus timer: a single 25-minute countdown.
//!
//! Pure state machine, no internal thread -- the caller invokes `tick()`
//! once per simulated second. Never persisted; a fresh process always
//! starts Idle at 25:00.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Session length in seconds.
pub const SESSION_SECS: u32 = 25 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusState {
    Idle,
    Running,
    Paused,
}

/// Ambience preference. Display-only, no playback in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbientSound {
    Rain,
    Forest,
    Ocean,
    Cafe,
}

impl std::str::FromStr for AmbientSound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rain" => Ok(AmbientSound::Rain),
            "forest" => Ok(AmbientSound::Forest),
            "ocean" => Ok(AmbientSound::Ocean),
            "cafe" => Ok(AmbientSound::Cafe),
            other => Err(format!("unknown sound: {other}")),
        }
    }
}

impl std::fmt::Display for AmbientSound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AmbientSound::Rain => "rain",
            AmbientSound::Forest => "forest",
            AmbientSound::Ocean => "ocean",
            AmbientSound::Cafe => "cafe",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct FocusTimer {
    state: FocusState,
    remaining_secs: u32,
    sound: AmbientSound,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            state: FocusState::Idle,
            remaining_secs: SESSION_SECS,
            sound: AmbientSound::Rain,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn sound(&self) -> AmbientSound {
        self.sound
    }

    /// Zero-padded `MM:SS`, derived from the remaining seconds.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    /// Full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::FocusSnapshot {
            state: self.state,
            remaining_secs: self.remaining_secs,
            display: self.display(),
            sound: self.sound,
            at: Utc::now(),
        }
    }

    /// Begin (or resume) the countdown. No-op when already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.state == FocusState::Running {
            return None;
        }
        self.state = FocusState::Running;
        Some(Event::FocusStarted {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Suspend the countdown. No-op unless running.
    pub fn pause(&mut self) -> Option<Event> {
        if self.state != FocusState::Running {
            return None;
        }
        self.state = FocusState::Paused;
        Some(Event::FocusPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Back to Idle at the full session length, from any state.
    pub fn reset(&mut self) -> Event {
        self.state = FocusState::Idle;
        self.remaining_secs = SESSION_SECS;
        Event::FocusReset { at: Utc::now() }
    }

    /// One simulated second. Emits exactly one completion event when the
    /// countdown reaches zero, transitioning back to Idle at the full
    /// session length so the next start() runs a fresh session.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != FocusState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = FocusState::Idle;
            self.remaining_secs = SESSION_SECS;
            return Some(Event::FocusCompleted { at: Utc::now() });
        }
        None
    }

    /// Pure preference update; nothing is played.
    pub fn select_sound(&mut self, sound: AmbientSound) -> Event {
        self.sound = sound;
        Event::SoundSelected {
            sound,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_at_twenty_five_minutes() {
        let timer = FocusTimer::new();
        assert_eq!(timer.state(), FocusState::Idle);
        assert_eq!(timer.remaining_secs(), 1500);
        assert_eq!(timer.display(), "25:00");
    }

    #[test]
    fn start_is_noop_while_running() {
        let mut timer = FocusTimer::new();
        assert!(timer.start().is_some());
        assert!(timer.start().is_none());
        assert_eq!(timer.state(), FocusState::Running);
    }

    #[test]
    fn pause_only_from_running() {
        let mut timer = FocusTimer::new();
        assert!(timer.pause().is_none());
        timer.start();
        assert!(timer.pause().is_some());
        assert_eq!(timer.state(), FocusState::Paused);
        assert!(timer.pause().is_none());
    }

    #[test]
    fn pause_freezes_remaining_time() {
        let mut timer = FocusTimer::new();
        timer.start();
        for _ in 0..10 {
            timer.tick();
        }
        timer.pause();
        let frozen = timer.remaining_secs();
        for _ in 0..10 {
            assert!(timer.tick().is_none());
        }
        assert_eq!(timer.remaining_secs(), frozen);
    }

    #[test]
    fn reset_from_any_state_restores_full_session() {
        let mut timer = FocusTimer::new();
        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.state(), FocusState::Idle);
        assert_eq!(timer.remaining_secs(), SESSION_SECS);

        timer.start();
        timer.tick();
        timer.pause();
        timer.reset();
        assert_eq!(timer.state(), FocusState::Idle);
        assert_eq!(timer.remaining_secs(), SESSION_SECS);
    }

    #[test]
    fn full_run_completes_exactly_once() {
        let mut timer = FocusTimer::new();
        timer.start();
        let mut completions = 0;
        for _ in 0..SESSION_SECS {
            if let Some(Event::FocusCompleted { .. }) = timer.tick() {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(timer.state(), FocusState::Idle);
        assert_eq!(timer.remaining_secs(), SESSION_SECS);
        // Further ticks do nothing.
        assert!(timer.tick().is_none());
    }

    #[test]
    fn start_after_completion_runs_fresh_session() {
        let mut timer = FocusTimer::new();
        timer.start();
        for _ in 0..SESSION_SECS {
            timer.tick();
        }
        // Restarting must not re-emit a completion on the first tick.
        timer.start();
        assert!(timer.tick().is_none());
        assert_eq!(timer.state(), FocusState::Running);
        assert_eq!(timer.remaining_secs(), SESSION_SECS - 1);
    }

    #[test]
    fn display_is_zero_padded() {
        let mut timer = FocusTimer::new();
        timer.start();
        timer.tick();
        assert_eq!(timer.display(), "24:59");
        for _ in 0..54 {
            timer.tick();
        }
        assert_eq!(timer.display(), "24:05");
    }

    #[test]
    fn sound_selection_is_pure_state() {
        let mut timer = FocusTimer::new();
        timer.start();
        let before = timer.remaining_secs();
        timer.select_sound(AmbientSound::Cafe);
        assert_eq!(timer.sound(), AmbientSound::Cafe);
        assert_eq!(timer.remaining_secs(), before);
        assert_eq!(timer.state(), FocusState::Running);
    }

    #[test]
    fn sound_parses_from_name() {
        assert_eq!("ocean".parse::<AmbientSound>(), Ok(AmbientSound::Ocean));
        assert!("vinyl".parse::<AmbientSound>().is_err());
    }
}
