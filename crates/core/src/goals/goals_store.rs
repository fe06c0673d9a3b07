use std::sync::Arc;

use log::info;

use crate::collection::{CollectionSnapshot, EntityId, LoadState, RemoteCollection};
use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::GoalServiceTrait;

/// In-memory goal list backed by a goal service.
pub struct GoalsStore<S: GoalServiceTrait> {
    collection: RemoteCollection<S>,
}

impl<S: GoalServiceTrait> GoalsStore<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            collection: RemoteCollection::with_scope(service, ()),
        }
    }

    /// Initial load when the goal list is first shown.
    pub async fn mount(&self) {
        self.collection.load().await;
    }

    pub async fn fetch_goals(&self) {
        self.collection.fetch().await;
    }

    pub async fn refresh_goals(&self) {
        self.collection.refresh().await;
    }

    pub async fn create_goal(&self, new_goal: NewGoal) -> Option<Goal> {
        self.collection.create(new_goal).await
    }

    /// Create a goal from form input, handing failures back to the caller.
    ///
    /// Validation failures are returned before any request is made and do not
    /// touch the store's error state.
    pub async fn submit_goal(&self, title: &str) -> Result<Goal> {
        let new_goal = NewGoal::validated(title)?;
        let goal = self.collection.try_create(new_goal).await?;
        info!("[GoalsStore] Created goal {} ({})", goal.id, goal.title);
        Ok(goal)
    }

    pub async fn update_goal(&self, id: EntityId, update: GoalUpdate) -> Option<Goal> {
        self.collection.update(id, update).await
    }

    pub async fn delete_goal(&self, id: EntityId) -> bool {
        self.collection.delete(id).await
    }

    pub fn goals(&self) -> Vec<Goal> {
        self.collection.items()
    }

    pub fn loading(&self) -> bool {
        self.collection.is_loading()
    }

    pub fn refreshing(&self) -> bool {
        self.collection.is_refreshing()
    }

    pub fn error(&self) -> Option<String> {
        self.collection.error()
    }

    pub fn state(&self) -> LoadState {
        self.collection.state()
    }

    pub fn snapshot(&self) -> CollectionSnapshot<Goal> {
        self.collection.snapshot()
    }
}
