//! Goals domain models.

use serde::{Deserialize, Serialize};

use crate::collection::{Entity, EntityId};
use crate::errors::ValidationError;
use crate::utils::validation::normalize_title;

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: EntityId,
    pub title: String,
    /// Creation timestamp as sent by the server (RFC 3339)
    pub created_at: String,
}

impl Entity for Goal {
    const SINGULAR: &'static str = "goal";
    const PLURAL: &'static str = "goals";

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewGoal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Build from raw user input: trimmed, non-empty, at most 100 characters.
    pub fn validated(title: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(normalize_title(title)?))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update for a goal; absent fields are left unchanged by the server
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GoalUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }
}
