//! In-memory services used by the store and collection tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::collection::{ApiResponse, CollectionService, EntityId};
use crate::errors::{Error, Result};
use crate::goals::{Goal, GoalUpdate, NewGoal};
use crate::tasks::{GoalId, NewTask, Task, TaskUpdate};

const CREATED_AT: &str = "2024-01-01T00:00:00Z";

pub fn goal(id: EntityId, title: &str) -> Goal {
    Goal {
        id,
        title: title.to_string(),
        created_at: CREATED_AT.to_string(),
    }
}

pub fn task(id: EntityId, goal_id: GoalId, title: &str, completed: bool) -> Task {
    Task {
        id,
        goal_id,
        title: title.to_string(),
        completed,
        created_at: CREATED_AT.to_string(),
    }
}

type Gates = Mutex<VecDeque<oneshot::Receiver<()>>>;

/// Queue a gate; calls pass gates in the order they were made.
fn push_gate(gates: &Gates) -> oneshot::Sender<()> {
    let (tx, rx) = oneshot::channel();
    gates.lock().unwrap().push_back(rx);
    tx
}

async fn pass_gate(gates: &Gates) {
    let gate = gates.lock().unwrap().pop_front();
    if let Some(gate) = gate {
        let _ = gate.await;
    }
}

/// Server-side rows plus scripted failures shared by both mocks.
struct Backend<E> {
    rows: Mutex<Vec<E>>,
    failures: Mutex<VecDeque<Error>>,
    next_id: AtomicI64,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    list_gate: Mutex<Option<oneshot::Receiver<()>>>,
    create_gates: Gates,
    update_gates: Gates,
}

impl<E: Clone> Backend<E> {
    fn new(rows: Vec<E>, next_id: EntityId) -> Self {
        Self {
            rows: Mutex::new(rows),
            failures: Mutex::new(VecDeque::new()),
            next_id: AtomicI64::new(next_id),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            list_gate: Mutex::new(None),
            create_gates: Mutex::new(VecDeque::new()),
            update_gates: Mutex::new(VecDeque::new()),
        }
    }

    fn take_failure(&self) -> Result<()> {
        match self.failures.lock().unwrap().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> EntityId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn hold_next_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.list_gate.lock().unwrap() = Some(rx);
        tx
    }

    async fn enter_list(&self) -> Result<()> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.list_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.take_failure()
    }
}

pub struct MockGoalService {
    backend: Backend<Goal>,
}

impl Default for MockGoalService {
    fn default() -> Self {
        Self::with_goals(Vec::new())
    }
}

impl MockGoalService {
    pub fn with_goals(goals: Vec<Goal>) -> Self {
        let next_id = goals.iter().map(|g| g.id).max().unwrap_or(0) + 1;
        Self {
            backend: Backend::new(goals, next_id),
        }
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: Error) {
        self.backend.failures.lock().unwrap().push_back(err);
    }

    pub fn create_calls(&self) -> usize {
        self.backend.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollectionService for MockGoalService {
    type Entity = Goal;
    type Scope = ();
    type NewEntity = NewGoal;
    type Update = GoalUpdate;

    async fn list(&self, _scope: &()) -> Result<ApiResponse<Vec<Goal>>> {
        self.backend.enter_list().await?;
        Ok(ApiResponse::new(self.backend.rows.lock().unwrap().clone(), 200))
    }

    async fn create(&self, input: NewGoal) -> Result<ApiResponse<Goal>> {
        self.backend.create_calls.fetch_add(1, Ordering::SeqCst);
        self.backend.take_failure()?;
        let created = goal(self.backend.next_id(), &input.title);
        self.backend.rows.lock().unwrap().push(created.clone());
        Ok(ApiResponse::new(created, 200))
    }

    async fn update(&self, id: EntityId, changes: GoalUpdate) -> Result<ApiResponse<Goal>> {
        self.backend.take_failure()?;
        let mut rows = self.backend.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(Error::HttpStatus(404))?;
        if let Some(title) = changes.title {
            row.title = title;
        }
        Ok(ApiResponse::new(row.clone(), 200))
    }

    async fn delete(&self, id: EntityId) -> Result<ApiResponse<()>> {
        self.backend.take_failure()?;
        self.backend.rows.lock().unwrap().retain(|g| g.id != id);
        Ok(ApiResponse::new((), 204))
    }
}

pub struct MockTaskService {
    backend: Backend<Task>,
}

impl Default for MockTaskService {
    fn default() -> Self {
        Self::with_tasks(Vec::new())
    }
}

impl MockTaskService {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            backend: Backend::new(tasks, next_id),
        }
    }

    pub fn fail_next(&self, err: Error) {
        self.backend.failures.lock().unwrap().push_back(err);
    }

    /// Add a row server-side without going through a store.
    pub fn insert(&self, task: Task) {
        self.backend.rows.lock().unwrap().push(task);
    }

    pub fn list_calls(&self) -> usize {
        self.backend.list_calls.load(Ordering::SeqCst)
    }

    /// Block the next list call until the returned sender fires.
    pub fn hold_next_list(&self) -> oneshot::Sender<()> {
        self.backend.hold_next_list()
    }

    /// Block the next create call until the returned sender fires.
    pub fn hold_next_create(&self) -> oneshot::Sender<()> {
        push_gate(&self.backend.create_gates)
    }

    /// Block the next update call until the returned sender fires.
    pub fn hold_next_update(&self) -> oneshot::Sender<()> {
        push_gate(&self.backend.update_gates)
    }
}

#[async_trait]
impl CollectionService for MockTaskService {
    type Entity = Task;
    type Scope = GoalId;
    type NewEntity = NewTask;
    type Update = TaskUpdate;

    async fn list(&self, goal_id: &GoalId) -> Result<ApiResponse<Vec<Task>>> {
        self.backend.enter_list().await?;
        let tasks = self
            .backend
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.goal_id == *goal_id)
            .cloned()
            .collect();
        Ok(ApiResponse::new(tasks, 200))
    }

    async fn create(&self, input: NewTask) -> Result<ApiResponse<Task>> {
        self.backend.create_calls.fetch_add(1, Ordering::SeqCst);
        pass_gate(&self.backend.create_gates).await;
        self.backend.take_failure()?;
        let created = task(self.backend.next_id(), input.goal_id, &input.title, false);
        self.backend.rows.lock().unwrap().push(created.clone());
        Ok(ApiResponse::new(created, 200))
    }

    async fn update(&self, id: EntityId, changes: TaskUpdate) -> Result<ApiResponse<Task>> {
        pass_gate(&self.backend.update_gates).await;
        self.backend.take_failure()?;
        let mut rows = self.backend.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::HttpStatus(404))?;
        if let Some(title) = changes.title {
            row.title = title;
        }
        if let Some(completed) = changes.completed {
            row.completed = completed;
        }
        Ok(ApiResponse::new(row.clone(), 200))
    }

    async fn delete(&self, id: EntityId) -> Result<ApiResponse<()>> {
        self.backend.take_failure()?;
        self.backend.rows.lock().unwrap().retain(|t| t.id != id);
        Ok(ApiResponse::new((), 204))
    }
}
