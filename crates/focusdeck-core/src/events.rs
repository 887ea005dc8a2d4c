use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::focus::{AmbientSound, FocusState};
use crate::panels::Panel;
use crate::water::PromptChannel;

/// Every state change in the dashboard produces an Event.
/// The CLI prints them; the shell and tests observe them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    PanelShown {
        panel: Panel,
        /// True when this call constructed the panel's subtree.
        built: bool,
        at: DateTime<Utc>,
    },
    ReturnedToDashboard {
        from: Panel,
        at: DateTime<Utc>,
    },
    ThemeChanged {
        dark: bool,
        at: DateTime<Utc>,
    },
    WaterReminderStarted {
        interval_min: u32,
        next_prompt_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    WaterReminderStopped {
        at: DateTime<Utc>,
    },
    WaterPromptDue {
        channel: PromptChannel,
        next_prompt_at: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    DrinkRecorded {
        glasses_today: u32,
        total_ml: u32,
        fill_fraction: f64,
        at: DateTime<Utc>,
    },
    WaterDayReset {
        at: DateTime<Utc>,
    },
    FocusStarted {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    FocusPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    FocusReset {
        at: DateTime<Utc>,
    },
    FocusCompleted {
        at: DateTime<Utc>,
    },
    SoundSelected {
        sound: AmbientSound,
        at: DateTime<Utc>,
    },
    FocusSnapshot {
        state: FocusState,
        remaining_secs: u32,
        display: String,
        sound: AmbientSound,
        at: DateTime<Utc>,
    },
    SessionOpened {
        name: String,
        email: String,
        at: DateTime<Utc>,
    },
    SessionRestored {
        name: String,
        at: DateTime<Utc>,
    },
    SessionClosed {
        at: DateTime<Utc>,
    },
    TaskAdded {
        id: String,
        title: String,
        at: DateTime<Utc>,
    },
    TaskCompleted {
        id: String,
        at: DateTime<Utc>,
    },
    TaskRemoved {
        id: String,
        at: DateTime<Utc>,
    },
}
