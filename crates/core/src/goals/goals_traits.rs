use crate::collection::CollectionService;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};

/// Service capable of listing and mutating goals.
///
/// Goals are not scoped, so the list scope is `()`. Implemented for every
/// matching [`CollectionService`].
pub trait GoalServiceTrait:
    CollectionService<Entity = Goal, Scope = (), NewEntity = NewGoal, Update = GoalUpdate>
{
}

impl<T> GoalServiceTrait for T where
    T: CollectionService<Entity = Goal, Scope = (), NewEntity = NewGoal, Update = GoalUpdate>
{
}
