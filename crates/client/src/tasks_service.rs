use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

use gtd_core::collection::EntityId;
use gtd_core::constants::TASKS_ENDPOINT;
use gtd_core::errors::Result;
use gtd_core::tasks::{GoalId, NewTask, Task, TaskUpdate};
use gtd_core::{ApiResponse, CollectionService};

use crate::api::ApiClient;
use crate::envelope::unwrap_response;

#[derive(Debug, Deserialize)]
struct TasksEnvelope {
    #[serde(default)]
    tasks: Option<Vec<Task>>,
}

impl TasksEnvelope {
    fn into_tasks(self) -> Vec<Task> {
        self.tasks.unwrap_or_default()
    }
}

/// Task endpoints of the GTD API.
#[derive(Debug, Clone)]
pub struct TasksService {
    api: ApiClient,
}

impl TasksService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn task_endpoint(id: EntityId) -> String {
        format!("{}/{}", TASKS_ENDPOINT, id)
    }

    async fn get_list(&self, endpoint: &str) -> Result<ApiResponse<Vec<Task>>> {
        let response = self.api.get::<TasksEnvelope>(endpoint).await?;
        Ok(response.map(TasksEnvelope::into_tasks))
    }

    /// Tasks of one goal, filtered server-side.
    pub async fn get_tasks_by_goal(&self, goal_id: GoalId) -> Result<ApiResponse<Vec<Task>>> {
        self.get_list(&format!("{}?goal_id={}", TASKS_ENDPOINT, goal_id)).await
    }

    /// Every task across all goals.
    pub async fn list_all_tasks(&self) -> Result<ApiResponse<Vec<Task>>> {
        self.get_list(&format!("{}/all", TASKS_ENDPOINT)).await
    }

    /// Tasks not yet completed, across all goals.
    pub async fn list_incomplete_tasks(&self) -> Result<ApiResponse<Vec<Task>>> {
        self.get_list(&format!("{}/incomplete", TASKS_ENDPOINT)).await
    }

    pub async fn get_task(&self, id: EntityId) -> Result<ApiResponse<Task>> {
        let response = self.api.get::<Value>(&Self::task_endpoint(id)).await?;
        unwrap_response(response, "task")
    }

    pub async fn create_task(&self, new_task: &NewTask) -> Result<ApiResponse<Task>> {
        let response = self.api.post::<Value, _>(TASKS_ENDPOINT, new_task).await?;
        unwrap_response(response, "task")
    }

    pub async fn update_task(
        &self,
        id: EntityId,
        update: &TaskUpdate,
    ) -> Result<ApiResponse<Task>> {
        let response = self.api.put::<Value, _>(&Self::task_endpoint(id), update).await?;
        unwrap_response(response, "task")
    }

    pub async fn toggle_task_completion(
        &self,
        id: EntityId,
        completed: bool,
    ) -> Result<ApiResponse<Task>> {
        self.update_task(id, &TaskUpdate::completion(completed)).await
    }

    pub async fn delete_task(&self, id: EntityId) -> Result<ApiResponse<()>> {
        let response = self.api.delete::<IgnoredAny>(&Self::task_endpoint(id)).await?;
        Ok(response.map(|_| ()))
    }
}

#[async_trait]
impl CollectionService for TasksService {
    type Entity = Task;
    type Scope = GoalId;
    type NewEntity = NewTask;
    type Update = TaskUpdate;

    async fn list(&self, goal_id: &GoalId) -> Result<ApiResponse<Vec<Task>>> {
        self.get_tasks_by_goal(*goal_id).await
    }

    async fn create(&self, input: NewTask) -> Result<ApiResponse<Task>> {
        self.create_task(&input).await
    }

    async fn update(&self, id: EntityId, changes: TaskUpdate) -> Result<ApiResponse<Task>> {
        self.update_task(id, &changes).await
    }

    async fn delete(&self, id: EntityId) -> Result<ApiResponse<()>> {
        self.delete_task(id).await
    }
}
