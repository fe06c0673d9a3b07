//! GTD Core - Domain entities, remote collections, and service traits.
//!
//! This crate contains the client-side state logic for the goals/tasks
//! tracker. It is transport-agnostic and defines the `CollectionService`
//! trait that is implemented over HTTP by the `gtd-client` crate.

pub mod collection;
pub mod config;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod tasks;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use collection::{
    ApiResponse, CollectionService, CollectionSnapshot, LoadState, RemoteCollection,
};
pub use config::ApiConfig;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
