//! Goals module - domain models, service trait, and the goals store.

mod goals_model;
mod goals_store;
mod goals_traits;

pub use goals_model::{Goal, GoalUpdate, NewGoal};
pub use goals_store::GoalsStore;
pub use goals_traits::GoalServiceTrait;
