//! Day planner: task records persisted under the `tasks` key.

use chrono::{NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, ValidationError};
use crate::events::Event;
use crate::storage::{keys, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

/// Task list with a persisted mirror.
#[derive(Debug, Default)]
pub struct DayPlanner {
    tasks: Vec<Task>,
}

impl DayPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore(store: &Store) -> Self {
        Self {
            tasks: store.get_or(keys::TASKS, Vec::new()),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Add a task. Title must be non-empty and the time range must run
    /// forward; both are checked before anything is stored.
    pub fn add(
        &mut self,
        store: &mut Store,
        title: &str,
        priority: Priority,
        start: NaiveTime,
        end: NaiveTime,
        description: &str,
    ) -> Result<Event, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }
        if end <= start {
            return Err(ValidationError::InvalidValue {
                field: "end".into(),
                message: format!("end time {end} is not after start time {start}"),
            }
            .into());
        }

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            priority,
            start,
            end,
            description: description.to_string(),
            done: false,
        };
        let event = Event::TaskAdded {
            id: task.id.clone(),
            title: task.title.clone(),
            at: Utc::now(),
        };
        self.tasks.push(task);
        store.set(keys::TASKS, &self.tasks)?;
        Ok(event)
    }

    pub fn complete(&mut self, store: &mut Store, id: &str) -> Result<Event, CoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ValidationError::UnknownId {
                kind: "task",
                id: id.to_string(),
            })?;
        task.done = true;
        store.set(keys::TASKS, &self.tasks)?;
        Ok(Event::TaskCompleted {
            id: id.to_string(),
            at: Utc::now(),
        })
    }

    pub fn remove(&mut self, store: &mut Store, id: &str) -> Result<Event, CoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Err(ValidationError::UnknownId {
                kind: "task",
                id: id.to_string(),
            }
            .into());
        }
        store.set(keys::TASKS, &self.tasks)?;
        Ok(Event::TaskRemoved {
            id: id.to_string(),
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path().join("state.json"));
        (dir, store)
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn add_persists_and_restores() {
        let (_dir, mut store) = temp_store();
        let mut planner = DayPlanner::new();
        planner
            .add(&mut store, "Revise notes", Priority::High, t(9, 0), t(10, 30), "chapter 3")
            .unwrap();

        let restored = DayPlanner::restore(&store);
        assert_eq!(restored.tasks().len(), 1);
        assert_eq!(restored.tasks()[0].title, "Revise notes");
        assert_eq!(restored.tasks()[0].priority, Priority::High);
        assert!(!restored.tasks()[0].done);
    }

    #[test]
    fn empty_title_is_rejected_without_side_effects() {
        let (_dir, mut store) = temp_store();
        let mut planner = DayPlanner::new();
        let err = planner
            .add(&mut store, "   ", Priority::Low, t(9, 0), t(10, 0), "")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MissingField("title"))
        ));
        assert!(planner.tasks().is_empty());
        assert!(!store.contains(keys::TASKS));
    }

    #[test]
    fn backwards_time_range_is_rejected() {
        let (_dir, mut store) = temp_store();
        let mut planner = DayPlanner::new();
        let err = planner
            .add(&mut store, "x", Priority::Low, t(10, 0), t(9, 0), "")
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn complete_marks_done() {
        let (_dir, mut store) = temp_store();
        let mut planner = DayPlanner::new();
        planner
            .add(&mut store, "a", Priority::Medium, t(8, 0), t(9, 0), "")
            .unwrap();
        let id = planner.tasks()[0].id.clone();
        planner.complete(&mut store, &id).unwrap();
        assert!(planner.tasks()[0].done);

        let restored = DayPlanner::restore(&store);
        assert!(restored.tasks()[0].done);
    }

    #[test]
    fn remove_unknown_id_is_an_error() {
        let (_dir, mut store) = temp_store();
        let mut planner = DayPlanner::new();
        let err = planner.remove(&mut store, "nope").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::UnknownId { .. })
        ));
    }

    #[test]
    fn remove_deletes_and_persists() {
        let (_dir, mut store) = temp_store();
        let mut planner = DayPlanner::new();
        planner
            .add(&mut store, "a", Priority::Low, t(8, 0), t(9, 0), "")
            .unwrap();
        planner
            .add(&mut store, "b", Priority::Low, t(9, 0), t(10, 0), "")
            .unwrap();
        let id = planner.tasks()[0].id.clone();
        planner.remove(&mut store, &id).unwrap();
        assert_eq!(planner.tasks().len(), 1);
        assert_eq!(DayPlanner::restore(&store).tasks().len(), 1);
    }
}
