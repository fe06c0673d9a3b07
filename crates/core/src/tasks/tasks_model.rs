//! Tasks domain models.

use serde::{Deserialize, Serialize};

use crate::collection::{Entity, EntityId};
use crate::errors::ValidationError;
use crate::utils::validation::normalize_title;

/// Identifier of the goal a task belongs to.
pub type GoalId = EntityId;

/// Domain model representing a task under a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: EntityId,
    pub goal_id: GoalId,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Entity for Task {
    const SINGULAR: &'static str = "task";
    const PLURAL: &'static str = "tasks";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Input model for creating a new task
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewTask {
    pub goal_id: GoalId,
    pub title: String,
}

impl NewTask {
    pub fn new(goal_id: GoalId, title: impl Into<String>) -> Self {
        Self {
            goal_id,
            title: title.into(),
        }
    }

    /// Build from raw user input: trimmed, non-empty, at most 100 characters.
    pub fn validated(goal_id: GoalId, title: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(goal_id, normalize_title(title)?))
    }
}

/// Partial update for a task
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    /// Update carrying only the completion flag.
    pub fn completion(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}

/// Pending/completed split of a task list, always derived from the list itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub pending: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            pending: tasks.len() - completed,
            completed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.completed
    }
}
