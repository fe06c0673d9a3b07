//! GTD Client - HTTP transport for the GTD backend.
//!
//! Provides the reqwest-based [`ApiClient`] and the goal and task services
//! that implement `gtd_core::CollectionService` over it. Each service
//! unwraps its endpoint's envelope so callers only see bare entities.

mod api;
mod envelope;
mod goals_service;
mod tasks_service;

pub use api::ApiClient;
pub use goals_service::GoalsService;
pub use tasks_service::TasksService;
