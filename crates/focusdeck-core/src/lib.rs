//! # FocusDeck Core Library
//!
//! Core logic for the FocusDeck productivity dashboard: a shell that
//! reveals feature panels on demand, keeps small slices of user state in a
//! durable local store, and talks to a remote authentication endpoint.
//!
//! ## Architecture
//!
//! - **Panels**: lazily constructed, cached-for-life subtrees with exactly
//!   one active panel at a time
//! - **Timers**: caller-driven state machines -- the water reminder and the
//!   focus countdown advance when the caller polls or ticks, never from an
//!   internal thread
//! - **Storage**: a JSON key/value store (the durable-local-storage analog)
//!   plus TOML configuration
//! - **Session**: in-memory identity mirrored 1:1 into the store, fed by an
//!   HTTP authentication collaborator
//!
//! ## Key Components
//!
//! - [`App`]: owns every service and wires outcomes into notifications
//! - [`SectionRegistry`]: panel lifecycle state machine
//! - [`WaterReminder`] / [`FocusTimer`]: the two timer services
//! - [`SessionManager`]: authentication and session mirroring

pub mod app;
pub mod catalog;
pub mod error;
pub mod events;
pub mod focus;
pub mod notify;
pub mod panels;
pub mod planner;
pub mod session;
pub mod storage;
pub mod water;

pub use app::{App, Theme};
pub use error::{AuthError, ConfigError, CoreError, StoreError, ValidationError};
pub use events::Event;
pub use focus::{AmbientSound, FocusState, FocusTimer};
pub use notify::{Notification, NotificationCenter, NotificationKind};
pub use panels::{Panel, SectionRegistry};
pub use planner::{DayPlanner, Priority, Task};
pub use session::{AuthClient, Session, SessionManager};
pub use storage::{Config, Store};
pub use water::{PromptChannel, WaterReminder, WaterStats};
