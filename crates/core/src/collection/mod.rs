//! Remote collection module - the generic list state machine shared by goals and tasks.

mod collection_model;
mod collection_traits;
pub mod reconcile;
mod remote_collection;

pub use collection_model::{
    ApiResponse, CollectionAction, CollectionSnapshot, Entity, EntityId, LoadState,
};
pub use collection_traits::CollectionService;
pub use remote_collection::RemoteCollection;
