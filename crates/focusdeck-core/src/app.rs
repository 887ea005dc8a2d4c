//! The dashboard application: owns every service, wires their outcomes
//! into notifications, and exposes the operations the shell and CLI drive.
//!
//! Each piece of shared state (session, water counters, focus countdown,
//! active panel, theme) is owned by exactly one component and mutated only
//! through that component's operations.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::{AuthError, CoreError};
use crate::events::Event;
use crate::focus::{AmbientSound, FocusTimer};
use crate::notify::{NotificationCenter, NotificationKind};
use crate::panels::{Panel, SectionRegistry};
use crate::planner::{DayPlanner, Priority};
use crate::session::{AuthClient, SessionManager};
use crate::storage::{keys, Config, Store};
use crate::water::WaterReminder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub struct App {
    store: Store,
    config: Config,
    theme: Theme,
    pub notifications: NotificationCenter,
    pub panels: SectionRegistry,
    pub water: WaterReminder,
    pub focus: FocusTimer,
    session: SessionManager,
    planner: DayPlanner,
}

impl App {
    /// Construct the app from the default data directory, restoring prior
    /// state (session, theme, counters, tasks) from the store.
    pub fn new() -> Result<Self, CoreError> {
        let store = Store::open()?;
        let config = Config::load_or_default();
        Ok(Self::with_store(store, config))
    }

    /// Construct over an explicit store and config. Restores persisted
    /// state the same way [`App::new`] does.
    pub fn with_store(store: Store, config: Config) -> Self {
        let theme = store.get(keys::THEME).unwrap_or(if config.ui.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        });
        let water = WaterReminder::restore(&store, config.water.system_prompts);
        let planner = DayPlanner::restore(&store);
        let mut session = SessionManager::new(AuthClient::new(config.auth.endpoint.clone()));
        let mut notifications = NotificationCenter::new();
        if let Some(Event::SessionRestored { name, .. }) = session.restore(&store) {
            notifications.notify(format!("Welcome back, {name}!"), NotificationKind::Info);
        }

        Self {
            store,
            config,
            theme,
            notifications,
            panels: SectionRegistry::new(),
            water,
            focus: FocusTimer::new(),
            session,
            planner,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn session(&self) -> Option<&crate::session::Session> {
        self.session.current()
    }

    pub fn tasks(&self) -> &[crate::planner::Task] {
        self.planner.tasks()
    }

    // ── Shell ────────────────────────────────────────────────────────

    pub fn show_panel(&mut self, panel: Panel) -> Event {
        self.panels.show(panel)
    }

    pub fn go_back(&mut self) -> Event {
        self.panels.go_back()
    }

    pub fn toggle_theme(&mut self) -> Result<Event, CoreError> {
        let next = self.theme.toggled();
        self.store.set(keys::THEME, &next)?;
        self.theme = next;
        Ok(Event::ThemeChanged {
            dark: next.is_dark(),
            at: Utc::now(),
        })
    }

    /// Advance the caller-driven schedules: water prompts and banner expiry.
    pub fn pump(&mut self, now: DateTime<Utc>) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(due) = self.water.poll(now) {
            self.notifications.notify(
                "Time to drink water! Stay hydrated for better productivity!",
                NotificationKind::Info,
            );
            events.push(due);
        }
        self.notifications.sweep(now);
        events
    }

    // ── Water reminder ───────────────────────────────────────────────

    pub fn start_water_reminder(&mut self, interval_min: Option<u32>) -> Event {
        let requested = interval_min.unwrap_or(self.config.water.default_interval_min);
        let event = self.water.start(requested, Utc::now());
        if let Event::WaterReminderStarted { interval_min, .. } = &event {
            self.notifications.notify(
                format!(
                    "Water reminder started! You'll be reminded every {interval_min} minutes."
                ),
                NotificationKind::Success,
            );
        }
        event
    }

    pub fn stop_water_reminder(&mut self) -> Option<Event> {
        let event = self.water.stop()?;
        self.notifications
            .notify("Water reminder stopped!", NotificationKind::Success);
        Some(event)
    }

    pub fn record_drink(&mut self) -> Result<Event, CoreError> {
        let event = self.water.record_drink(&mut self.store, Utc::now())?;
        self.notifications
            .notify("Great! Keep staying hydrated!", NotificationKind::Success);
        Ok(event)
    }

    pub fn reset_water_day(&mut self) -> Result<Event, CoreError> {
        Ok(self.water.reset_day(&mut self.store)?)
    }

    // ── Focus timer ──────────────────────────────────────────────────

    pub fn start_focus(&mut self) -> Option<Event> {
        let event = self.focus.start()?;
        self.notifications
            .notify("Focus session started!", NotificationKind::Success);
        Some(event)
    }

    pub fn pause_focus(&mut self) -> Option<Event> {
        let event = self.focus.pause()?;
        self.notifications
            .notify("Focus session paused", NotificationKind::Success);
        Some(event)
    }

    pub fn reset_focus(&mut self) -> Event {
        let event = self.focus.reset();
        self.notifications
            .notify("Focus session reset", NotificationKind::Success);
        event
    }

    /// One simulated second of focus time. Posts the completion banner when
    /// the countdown finishes.
    pub fn tick_focus(&mut self) -> Option<Event> {
        let event = self.focus.tick()?;
        self.notifications.notify(
            "Focus session completed! Take a break.",
            NotificationKind::Success,
        );
        Some(event)
    }

    pub fn select_sound(&mut self, sound: AmbientSound) -> Event {
        let event = self.focus.select_sound(sound);
        self.notifications
            .notify(format!("Selected sound: {sound}"), NotificationKind::Success);
        event
    }

    // ── Session ──────────────────────────────────────────────────────

    pub async fn login(&mut self, email: &str, password: &str) -> Result<Event, CoreError> {
        match self.session.login(&mut self.store, email, password).await {
            Ok(event) => {
                self.notifications
                    .notify("Login successful!", NotificationKind::Success);
                Ok(event)
            }
            Err(err) => {
                let message = failure_message(&err, "Login failed! Please try again.");
                self.notifications.notify(message, NotificationKind::Error);
                Err(err)
            }
        }
    }

    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Event, CoreError> {
        match self
            .session
            .signup(&mut self.store, name, email, password, confirm)
            .await
        {
            Ok(event) => {
                self.notifications
                    .notify("Account created successfully!", NotificationKind::Success);
                Ok(event)
            }
            Err(err) => {
                let message = failure_message(&err, "Signup failed! Please try again.");
                self.notifications.notify(message, NotificationKind::Error);
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) -> Event {
        let event = self.session.logout(&mut self.store);
        self.notifications
            .notify("Logged out successfully!", NotificationKind::Success);
        event
    }

    // ── Day planner ──────────────────────────────────────────────────

    pub fn add_task(
        &mut self,
        title: &str,
        priority: Priority,
        start: NaiveTime,
        end: NaiveTime,
        description: &str,
    ) -> Result<Event, CoreError> {
        match self
            .planner
            .add(&mut self.store, title, priority, start, end, description)
        {
            Ok(event) => {
                self.notifications
                    .notify("Task added!", NotificationKind::Success);
                Ok(event)
            }
            Err(err) => {
                self.notifications
                    .notify(err.to_string(), NotificationKind::Error);
                Err(err)
            }
        }
    }

    pub fn complete_task(&mut self, id: &str) -> Result<Event, CoreError> {
        self.planner.complete(&mut self.store, id)
    }

    pub fn remove_task(&mut self, id: &str) -> Result<Event, CoreError> {
        self.planner.remove(&mut self.store, id)
    }

    // ── Catalogs ─────────────────────────────────────────────────────

    /// Open a book or AI tool link with the platform handler.
    pub fn open_link(&mut self, url: &str) -> Result<(), CoreError> {
        catalog::open_link(url)?;
        Ok(())
    }

    /// Second activation affordance on book cards: the download is a
    /// banner, the link itself goes through [`App::open_link`].
    pub fn download_book(&mut self, title: &str) -> u64 {
        self.notifications.notify(
            format!("Download started for: {title}"),
            NotificationKind::Success,
        )
    }

    /// Games have no implementation behind them; activation is a banner.
    pub fn play_game(&mut self, name: &str) -> u64 {
        self.notifications
            .notify(format!("Starting {name}..."), NotificationKind::Success)
    }
}

/// Validation problems and explicit rejections surface their own reason;
/// transport failures get the generic retry message.
fn failure_message(err: &CoreError, fallback: &str) -> String {
    match err {
        CoreError::Auth(AuthError::Rejected(reason)) => reason.clone(),
        CoreError::Validation(v) => v.to_string(),
        _ => fallback.to_string(),
    }
}
