use crate::collection::CollectionService;
use crate::tasks::tasks_model::{GoalId, NewTask, Task, TaskUpdate};

/// Service capable of listing and mutating tasks. Lists are scoped by goal.
pub trait TaskServiceTrait:
    CollectionService<Entity = Task, Scope = GoalId, NewEntity = NewTask, Update = TaskUpdate>
{
}

impl<T> TaskServiceTrait for T where
    T: CollectionService<Entity = Task, Scope = GoalId, NewEntity = NewTask, Update = TaskUpdate>
{
}
