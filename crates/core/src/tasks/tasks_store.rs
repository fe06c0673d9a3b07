use std::sync::Arc;

use log::debug;

use crate::collection::{CollectionSnapshot, EntityId, LoadState, RemoteCollection};
use crate::tasks::tasks_model::{GoalId, NewTask, Task, TaskCounts, TaskUpdate};
use crate::tasks::tasks_traits::TaskServiceTrait;

/// In-memory task list for a single goal, backed by a task service.
pub struct TasksStore<S: TaskServiceTrait> {
    collection: RemoteCollection<S>,
}

impl<S: TaskServiceTrait> TasksStore<S> {
    /// Store with no goal selected; nothing loads until [`set_goal`](Self::set_goal).
    pub fn new(service: Arc<S>) -> Self {
        Self {
            collection: RemoteCollection::new(service),
        }
    }

    /// Store scoped to `goal_id`. Call [`mount`](Self::mount) to load it.
    pub fn for_goal(service: Arc<S>, goal_id: GoalId) -> Self {
        Self {
            collection: RemoteCollection::with_scope(service, goal_id),
        }
    }

    pub async fn mount(&self) {
        self.collection.load().await;
    }

    /// Select the goal whose tasks are held, loading them when it changed.
    pub async fn set_goal(&self, goal_id: GoalId) {
        debug!("[TasksStore] Selecting goal {}", goal_id);
        self.collection.set_scope(goal_id).await;
    }

    pub fn goal_id(&self) -> Option<GoalId> {
        self.collection.scope()
    }

    pub async fn fetch_tasks(&self, goal_id: GoalId) {
        self.collection.fetch_in(goal_id).await;
    }

    pub async fn refresh_tasks(&self) {
        self.collection.refresh().await;
    }

    pub async fn create_task(&self, new_task: NewTask) -> Option<Task> {
        self.collection.create(new_task).await
    }

    pub async fn update_task(&self, id: EntityId, update: TaskUpdate) -> Option<Task> {
        self.collection.update(id, update).await
    }

    pub async fn delete_task(&self, id: EntityId) -> bool {
        self.collection.delete(id).await
    }

    /// Set a task's completion flag. Returns whether the server accepted it.
    pub async fn toggle_task_completion(&self, id: EntityId, completed: bool) -> bool {
        self.collection
            .update(id, TaskUpdate::completion(completed))
            .await
            .is_some()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.collection.items()
    }

    pub fn counts(&self) -> TaskCounts {
        self.collection.with_items(TaskCounts::from_tasks)
    }

    pub fn pending_count(&self) -> usize {
        self.counts().pending
    }

    pub fn completed_count(&self) -> usize {
        self.counts().completed
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

    pub fn snapshot(&self) -> CollectionSnapshot<Task> {
        self.collection.snapshot()
    }
}
