//! Collection domain models.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier shared by every entity.
pub type EntityId = i64;

/// An entity held in a remote collection.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Label used in log lines and fallback messages ("goal").
    const SINGULAR: &'static str;
    /// Plural label ("goals").
    const PLURAL: &'static str;

    fn id(&self) -> EntityId;
}

/// Uniform result of every service call, independent of the endpoint envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub ok: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, status: u16) -> Self {
        Self {
            data,
            status,
            ok: (200..300).contains(&status),
        }
    }

    /// Replace the payload while keeping status and ok, used to unwrap envelopes.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            data: f(self.data),
            status: self.status,
            ok: self.ok,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Lifecycle of the list fetch.
///
/// Only list fetches move this state; a failed mutation records its error
/// message but leaves the list state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Operation that produced a collection error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionAction {
    Fetch,
    Create,
    Update,
    Delete,
}

impl CollectionAction {
    pub fn verb(&self) -> &'static str {
        match self {
            CollectionAction::Fetch => "fetch",
            CollectionAction::Create => "create",
            CollectionAction::Update => "update",
            CollectionAction::Delete => "delete",
        }
    }

    pub fn gerund(&self) -> &'static str {
        match self {
            CollectionAction::Fetch => "fetching",
            CollectionAction::Create => "creating",
            CollectionAction::Update => "updating",
            CollectionAction::Delete => "deleting",
        }
    }

    /// Entity label for log lines: plural for list fetches, singular otherwise.
    pub fn label<E: Entity>(&self) -> &'static str {
        match self {
            CollectionAction::Fetch => E::PLURAL,
            _ => E::SINGULAR,
        }
    }

    /// Message stored when the error itself carries none.
    pub fn fallback_message<E: Entity>(&self) -> String {
        format!("Failed to {} {}", self.verb(), self.label::<E>())
    }
}

/// Point-in-time view of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot<E> {
    pub items: Vec<E>,
    pub state: LoadState,
    pub error: Option<String>,
    /// Pull-to-refresh in flight; overlays `state` without clearing `items`.
    pub refreshing: bool,
}

impl<E> Default for CollectionSnapshot<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: LoadState::Idle,
            error: None,
            refreshing: false,
        }
    }
}

impl<E> CollectionSnapshot<E> {
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
