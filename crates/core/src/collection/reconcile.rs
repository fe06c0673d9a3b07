//! Pure list reconciliation applied after the server confirms a mutation.

use crate::collection::{Entity, EntityId};

/// Append a created entity to the end of the list.
pub fn append<E: Entity>(items: &mut Vec<E>, entity: E) {
    items.push(entity);
}

/// Replace every entity whose id matches `id`, keeping its position.
///
/// Returns false when nothing matched (a stale reference); the list is then
/// left untouched.
pub fn replace_by_id<E: Entity>(items: &mut [E], id: EntityId, entity: &E) -> bool {
    let mut replaced = false;
    for slot in items.iter_mut().filter(|item| item.id() == id) {
        *slot = entity.clone();
        replaced = true;
    }
    replaced
}

/// Drop every entity whose id matches `id`. Returns whether anything was removed.
pub fn remove_by_id<E: Entity>(items: &mut Vec<E>, id: EntityId) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
