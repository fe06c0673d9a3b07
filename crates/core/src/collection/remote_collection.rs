//! Generic in-memory list mirrored from a remote service.
//!
//! Holds the entity list plus its loading/error/refreshing flags and merges
//! server answers back into the list without re-fetching. State only changes
//! after the server has answered; there is no optimistic pre-update.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, error};

use crate::collection::collection_model::{
    CollectionAction, CollectionSnapshot, Entity, EntityId, LoadState,
};
use crate::collection::collection_traits::CollectionService;
use crate::collection::reconcile;
use crate::errors::{Error, Result};

type EntityOf<S> = <S as CollectionService>::Entity;

/// Remote-backed collection over the entity type of `S`.
///
/// Methods take `&self` and may overlap. Overlapping mutations are not
/// serialized: each applies its own answer when it arrives, so the last
/// answer to resolve wins.
pub struct RemoteCollection<S: CollectionService> {
    service: Arc<S>,
    scope: RwLock<Option<S::Scope>>,
    state: RwLock<CollectionSnapshot<EntityOf<S>>>,
}

impl<S: CollectionService> RemoteCollection<S> {
    /// Collection with no scope yet; nothing is fetched until one is set.
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            scope: RwLock::new(None),
            state: RwLock::new(CollectionSnapshot::default()),
        }
    }

    pub fn with_scope(service: Arc<S>, scope: S::Scope) -> Self {
        Self {
            service,
            scope: RwLock::new(Some(scope)),
            state: RwLock::new(CollectionSnapshot::default()),
        }
    }

    pub fn scope(&self) -> Option<S::Scope> {
        self.scope
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> CollectionSnapshot<EntityOf<S>> {
        self.read_state().clone()
    }

    pub fn items(&self) -> Vec<EntityOf<S>> {
        self.read_state().items.clone()
    }

    /// Run `f` over the current list without cloning it.
    pub fn with_items<R>(&self, f: impl FnOnce(&[EntityOf<S>]) -> R) -> R {
        f(&self.read_state().items)
    }

    pub fn state(&self) -> LoadState {
        self.read_state().state
    }

    pub fn error(&self) -> Option<String> {
        self.read_state().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read_state().is_loading()
    }

    pub fn is_refreshing(&self) -> bool {
        self.read_state().refreshing
    }

    pub fn clear_error(&self) {
        self.write_state().error = None;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fetching
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter `Loading` and fetch the list for the current scope.
    pub async fn load(&self) {
        if self.scope().is_none() {
            debug!("[{}] No scope set, skipping load", <S::Entity as Entity>::PLURAL);
            return;
        }
        self.write_state().state = LoadState::Loading;
        self.fetch().await;
    }

    /// Switch to `scope` and reload when it differs from the current one.
    ///
    /// The previous scope's entities are dropped immediately so they are never
    /// shown under the new scope.
    pub async fn set_scope(&self, scope: S::Scope) {
        if self.replace_scope(scope) {
            self.load().await;
        }
    }

    /// Fetch for `scope` without entering `Loading`, switching scope first if needed.
    pub async fn fetch_in(&self, scope: S::Scope) {
        self.replace_scope(scope);
        self.fetch().await;
    }

    /// Fetch the list for the current scope and replace the held entities.
    ///
    /// On failure the previous entities are kept and the error is recorded.
    /// An answer for a scope that is no longer current is discarded.
    pub async fn fetch(&self) {
        let Some(scope) = self.scope() else {
            debug!("[{}] No scope set, skipping fetch", <S::Entity as Entity>::PLURAL);
            return;
        };

        self.clear_error();
        let result = self.service.list(&scope).await;

        if self.scope().as_ref() != Some(&scope) {
            debug!(
                "[{}] Discarding list for stale scope {:?}",
                <S::Entity as Entity>::PLURAL,
                scope
            );
            return;
        }

        match result {
            Ok(response) => {
                debug!(
                    "[{}] Fetched {} entries for {:?}",
                    <S::Entity as Entity>::PLURAL,
                    response.data.len(),
                    scope
                );
                let mut state = self.write_state();
                state.items = response.data;
                state.state = LoadState::Ready;
            }
            Err(err) => {
                self.record_failure(CollectionAction::Fetch, &err);
                self.write_state().state = LoadState::Failed;
            }
        }
    }

    /// Pull-to-refresh: fetch again while the current entities stay visible.
    pub async fn refresh(&self) {
        self.write_state().refreshing = true;
        self.fetch().await;
        self.write_state().refreshing = false;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create an entity and append it to the end of the list.
    ///
    /// Returns `None` on failure, with the error recorded.
    pub async fn create(&self, input: S::NewEntity) -> Option<EntityOf<S>> {
        self.try_create(input).await.ok()
    }

    /// Like [`create`](Self::create) but hands the failure back to the caller
    /// as well as recording it.
    ///
    /// When the scope changed while the request was in flight the created
    /// entity is returned but not added to the list.
    pub async fn try_create(&self, input: S::NewEntity) -> Result<EntityOf<S>> {
        self.clear_error();
        debug!("[{}] Creating {:?}", <S::Entity as Entity>::PLURAL, input);
        let scope = self.scope();

        match self.service.create(input).await {
            Ok(response) => {
                let entity = response.data;
                if self.scope_changed(&scope, CollectionAction::Create) {
                    return Ok(entity);
                }
                reconcile::append(&mut self.write_state().items, entity.clone());
                Ok(entity)
            }
            Err(err) => {
                self.record_failure(CollectionAction::Create, &err);
                Err(err)
            }
        }
    }

    /// Update an entity and replace it in place.
    ///
    /// When no held entity has `id` the list is left as is and the server's
    /// entity is still returned.
    pub async fn update(&self, id: EntityId, changes: S::Update) -> Option<EntityOf<S>> {
        self.clear_error();
        debug!("[{}] Updating {} with {:?}", <S::Entity as Entity>::PLURAL, id, changes);
        let scope = self.scope();

        match self.service.update(id, changes).await {
            Ok(response) => {
                let entity = response.data;
                if self.scope_changed(&scope, CollectionAction::Update) {
                    return Some(entity);
                }
                let replaced = reconcile::replace_by_id(&mut self.write_state().items, id, &entity);
                if !replaced {
                    debug!(
                        "[{}] Updated {} is not in the current list",
                        <S::Entity as Entity>::PLURAL,
                        id
                    );
                }
                Some(entity)
            }
            Err(err) => {
                self.record_failure(CollectionAction::Update, &err);
                None
            }
        }
    }

    /// Delete an entity and drop it from the list. Returns whether the server
    /// accepted the delete.
    pub async fn delete(&self, id: EntityId) -> bool {
        self.clear_error();
        debug!("[{}] Deleting {}", <S::Entity as Entity>::PLURAL, id);
        let scope = self.scope();

        match self.service.delete(id).await {
            Ok(_) => {
                if self.scope_changed(&scope, CollectionAction::Delete) {
                    return true;
                }
                reconcile::remove_by_id(&mut self.write_state().items, id);
                true
            }
            Err(err) => {
                self.record_failure(CollectionAction::Delete, &err);
                false
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true when the scope changed.
    fn replace_scope(&self, scope: S::Scope) -> bool {
        {
            let mut current = self.scope.write().unwrap_or_else(PoisonError::into_inner);
            if current.as_ref() == Some(&scope) {
                return false;
            }
            *current = Some(scope);
        }
        let mut state = self.write_state();
        state.items.clear();
        state.error = None;
        state.state = LoadState::Idle;
        true
    }

    /// True when the scope moved away from `started_in` during a request.
    fn scope_changed(&self, started_in: &Option<S::Scope>, action: CollectionAction) -> bool {
        let changed = self.scope() != *started_in;
        if changed {
            debug!(
                "[{}] Scope changed during {}, leaving list as is",
                <S::Entity as Entity>::PLURAL,
                action.verb()
            );
        }
        changed
    }

    fn record_failure(&self, action: CollectionAction, err: &Error) {
        let message = err.message();
        let message = if message.trim().is_empty() {
            action.fallback_message::<EntityOf<S>>()
        } else {
            message
        };
        error!(
            "Error {} {}: {}",
            action.gerund(),
            action.label::<EntityOf<S>>(),
            message
        );
        self.write_state().error = Some(message);
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CollectionSnapshot<EntityOf<S>>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CollectionSnapshot<EntityOf<S>>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
