//! Tasks module - domain models, service trait, derived counts and the tasks store.

mod tasks_model;
mod tasks_store;
mod tasks_traits;

pub use tasks_model::{GoalId, NewTask, Task, TaskCounts, TaskUpdate};
pub use tasks_store::TasksStore;
pub use tasks_traits::TaskServiceTrait;
