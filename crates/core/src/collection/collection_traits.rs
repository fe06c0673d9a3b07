use std::fmt::Debug;

use async_trait::async_trait;

use crate::collection::collection_model::{ApiResponse, Entity, EntityId};
use crate::errors::Result;

/// Capability interface a remote collection is built on.
///
/// Implementations unwrap their endpoint's envelope before returning, so the
/// collection only ever sees bare entities.
#[async_trait]
pub trait CollectionService: Send + Sync {
    type Entity: Entity;
    /// What a list is filtered by (`()` for unscoped collections).
    type Scope: Clone + PartialEq + Debug + Send + Sync + 'static;
    type NewEntity: Debug + Send + 'static;
    type Update: Debug + Send + 'static;

    async fn list(&self, scope: &Self::Scope) -> Result<ApiResponse<Vec<Self::Entity>>>;
    async fn create(&self, input: Self::NewEntity) -> Result<ApiResponse<Self::Entity>>;
    async fn update(
        &self,
        id: EntityId,
        changes: Self::Update,
    ) -> Result<ApiResponse<Self::Entity>>;
    async fn delete(&self, id: EntityId) -> Result<ApiResponse<()>>;
}
