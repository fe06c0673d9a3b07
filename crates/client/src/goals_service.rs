use async_trait::async_trait;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

use gtd_core::collection::EntityId;
use gtd_core::constants::GOALS_ENDPOINT;
use gtd_core::errors::Result;
use gtd_core::goals::{Goal, GoalUpdate, NewGoal};
use gtd_core::{ApiResponse, CollectionService};

use crate::api::ApiClient;
use crate::envelope::unwrap_response;

#[derive(Debug, Deserialize)]
struct GoalsEnvelope {
    #[serde(default)]
    goals: Option<Vec<Goal>>,
}

/// Goal endpoints of the GTD API.
#[derive(Debug, Clone)]
pub struct GoalsService {
    api: ApiClient,
}

impl GoalsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn goal_endpoint(id: EntityId) -> String {
        format!("{}/{}", GOALS_ENDPOINT, id)
    }

    pub async fn get_goals(&self) -> Result<ApiResponse<Vec<Goal>>> {
        let response = self.api.get::<GoalsEnvelope>(GOALS_ENDPOINT).await?;
        Ok(response.map(|body| body.goals.unwrap_or_default()))
    }

    pub async fn get_goal(&self, id: EntityId) -> Result<ApiResponse<Goal>> {
        let response = self.api.get::<Value>(&Self::goal_endpoint(id)).await?;
        unwrap_response(response, "goal")
    }

    pub async fn create_goal(&self, new_goal: &NewGoal) -> Result<ApiResponse<Goal>> {
        let response = self.api.post::<Value, _>(GOALS_ENDPOINT, new_goal).await?;
        unwrap_response(response, "goal")
    }

    pub async fn update_goal(
        &self,
        id: EntityId,
        update: &GoalUpdate,
    ) -> Result<ApiResponse<Goal>> {
        let response = self.api.put::<Value, _>(&Self::goal_endpoint(id), update).await?;
        unwrap_response(response, "goal")
    }

    pub async fn delete_goal(&self, id: EntityId) -> Result<ApiResponse<()>> {
        let response = self.api.delete::<IgnoredAny>(&Self::goal_endpoint(id)).await?;
        Ok(response.map(|_| ()))
    }
}

#[async_trait]
impl CollectionService for GoalsService {
    type Entity = Goal;
    type Scope = ();
    type NewEntity = NewGoal;
    type Update = GoalUpdate;

    async fn list(&self, _scope: &()) -> Result<ApiResponse<Vec<Goal>>> {
        self.get_goals().await
    }

    async fn create(&self, input: NewGoal) -> Result<ApiResponse<Goal>> {
        self.create_goal(&input).await
    }

    async fn update(&self, id: EntityId, changes: GoalUpdate) -> Result<ApiResponse<Goal>> {
        self.update_goal(id, &changes).await
    }

    async fn delete(&self, id: EntityId) -> Result<ApiResponse<()>> {
        self.delete_goal(id).await
    }
}
