//! Water reminder: a repeating hydration prompt plus persisted counters.
//!
//! Caller-driven like the rest of the dashboard: `poll()` compares the
//! wall clock against the armed schedule, so cancellation is a plain field
//! reset and two schedules can never coexist.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::events::Event;
use crate::storage::{keys, Store};

pub const GLASS_ML: u32 = 250;
pub const DAILY_GOAL_GLASSES: u32 = 8;
pub const DEFAULT_INTERVAL_MIN: u32 = 60;
pub const MIN_INTERVAL_MIN: u32 = 15;
pub const MAX_INTERVAL_MIN: u32 = 180;

/// Hydration counters, persisted after every mutation under `waterStats`.
/// Wire names match the stored JSON the dashboard always used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterStats {
    #[serde(rename = "glassesToday", default)]
    pub glasses_today: u32,
    #[serde(rename = "totalML", default)]
    pub total_ml: u32,
    #[serde(rename = "lastDrink", default)]
    pub last_drink: Option<DateTime<Utc>>,
}

/// How a due prompt is delivered. System prompts require permission;
/// without it the prompt degrades to a blocking alert, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptChannel {
    System,
    Alert,
}

#[derive(Debug, Clone)]
struct ReminderSchedule {
    interval_min: u32,
    next_prompt_at: DateTime<Utc>,
}

/// Reminder schedule and counters. At most one schedule is armed.
#[derive(Debug)]
pub struct WaterReminder {
    stats: WaterStats,
    schedule: Option<ReminderSchedule>,
    system_prompts: bool,
}

impl WaterReminder {
    pub fn new(system_prompts: bool) -> Self {
        Self {
            stats: WaterStats::default(),
            schedule: None,
            system_prompts,
        }
    }

    /// Restore persisted counters; a missing or malformed entry starts
    /// from zero.
    pub fn restore(store: &Store, system_prompts: bool) -> Self {
        Self {
            stats: store.get_or(keys::WATER_STATS, WaterStats::default()),
            schedule: None,
            system_prompts,
        }
    }

    pub fn stats(&self) -> &WaterStats {
        &self.stats
    }

    pub fn is_active(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn interval_min(&self) -> Option<u32> {
        self.schedule.as_ref().map(|s| s.interval_min)
    }

    /// Glass fill fraction: glasses / daily goal, capped at 1.0.
    pub fn fill_fraction(&self) -> f64 {
        (f64::from(self.stats.glasses_today) / f64::from(DAILY_GOAL_GLASSES)).min(1.0)
    }

    /// Wall-clock time-of-day of the next prompt, or `None` when stopped.
    pub fn next_prompt_display(&self) -> Option<String> {
        self.schedule
            .as_ref()
            .map(|s| s.next_prompt_at.format("%H:%M").to_string())
    }

    pub fn channel(&self) -> PromptChannel {
        if self.system_prompts {
            PromptChannel::System
        } else {
            PromptChannel::Alert
        }
    }

    /// Arm the repeating prompt, superseding any existing schedule.
    /// The interval is clamped to [15, 180] minutes.
    pub fn start(&mut self, interval_min: u32, now: DateTime<Utc>) -> Event {
        let interval_min = interval_min.clamp(MIN_INTERVAL_MIN, MAX_INTERVAL_MIN);
        let next_prompt_at = now + Duration::minutes(i64::from(interval_min));
        self.schedule = Some(ReminderSchedule {
            interval_min,
            next_prompt_at,
        });
        log::debug!("water reminder armed every {interval_min} min");
        Event::WaterReminderStarted {
            interval_min,
            next_prompt_at,
            at: now,
        }
    }

    /// Cancel the schedule. `None` when no reminder was active.
    pub fn stop(&mut self) -> Option<Event> {
        self.schedule.take()?;
        Some(Event::WaterReminderStopped { at: Utc::now() })
    }

    /// Record one glass: +1 glass, +250 mL, stamp the drink time, persist.
    pub fn record_drink(
        &mut self,
        store: &mut Store,
        now: DateTime<Utc>,
    ) -> Result<Event, StoreError> {
        self.stats.glasses_today += 1;
        self.stats.total_ml += GLASS_ML;
        self.stats.last_drink = Some(now);
        store.set(keys::WATER_STATS, &self.stats)?;
        Ok(Event::DrinkRecorded {
            glasses_today: self.stats.glasses_today,
            total_ml: self.stats.total_ml,
            fill_fraction: self.fill_fraction(),
            at: now,
        })
    }

    /// Zero the counters. Manual only -- there is no midnight rollover.
    pub fn reset_day(&mut self, store: &mut Store) -> Result<Event, StoreError> {
        self.stats.glasses_today = 0;
        self.stats.total_ml = 0;
        store.set(keys::WATER_STATS, &self.stats)?;
        Ok(Event::WaterDayReset { at: Utc::now() })
    }

    /// Emit a prompt when the schedule is due and re-arm for the next
    /// interval. Call periodically.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<Event> {
        let schedule = self.schedule.as_mut()?;
        if now < schedule.next_prompt_at {
            return None;
        }
        schedule.next_prompt_at = now + Duration::minutes(i64::from(schedule.interval_min));
        Some(Event::WaterPromptDue {
            channel: if self.system_prompts {
                PromptChannel::System
            } else {
                PromptChannel::Alert
            },
            next_prompt_at: schedule.next_prompt_at,
            at: now,
        })
    }
}
