//! In-process GTD backend for the client integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use gtd_client::{ApiClient, GoalsService, TasksService};
use gtd_core::goals::{Goal, GoalUpdate, NewGoal};
use gtd_core::tasks::{NewTask, Task, TaskUpdate};
use gtd_core::ApiConfig;

pub const CREATED_AT: &str = "2024-01-01T00:00:00Z";

type HandlerResult = Result<Json<Value>, StatusCode>;

#[derive(Default)]
pub struct MockState {
    goals: Mutex<Vec<Goal>>,
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicI64,
    fail_with: Mutex<Option<StatusCode>>,
    delay: Mutex<Option<Duration>>,
    last_body: Mutex<Option<Value>>,
}

impl MockState {
    pub fn seed_goal(&self, id: i64, title: &str) {
        self.goals.lock().unwrap().push(Goal {
            id,
            title: title.to_string(),
            created_at: CREATED_AT.to_string(),
        });
        self.bump_next_id(id);
    }

    pub fn seed_task(&self, id: i64, goal_id: i64, title: &str, completed: bool) {
        self.tasks.lock().unwrap().push(Task {
            id,
            goal_id,
            title: title.to_string(),
            completed,
            created_at: CREATED_AT.to_string(),
        });
        self.bump_next_id(id);
    }

    /// Answer the next request with `status` and no body.
    pub fn fail_next(&self, status: StatusCode) {
        *self.fail_with.lock().unwrap() = Some(status);
    }

    /// Hold every response for `delay`.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }

    pub fn task(&self, id: i64) -> Option<Task> {
        self.tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    fn bump_next_id(&self, id: i64) {
        self.next_id.fetch_max(id, Ordering::SeqCst);
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn record<T: serde::Serialize>(&self, body: &T) {
        *self.last_body.lock().unwrap() = serde_json::to_value(body).ok();
    }

    async fn enter(&self) -> Result<(), StatusCode> {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.fail_with.lock().unwrap().take() {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }
}

#[derive(Deserialize)]
struct TaskQuery {
    goal_id: Option<i64>,
}

async fn list_goals(State(state): State<Arc<MockState>>) -> HandlerResult {
    state.enter().await?;
    let goals = state.goals.lock().unwrap().clone();
    Ok(Json(json!({ "goals": goals })))
}

async fn create_goal(
    State(state): State<Arc<MockState>>,
    Json(input): Json<NewGoal>,
) -> HandlerResult {
    state.enter().await?;
    state.record(&input);
    let goal = Goal {
        id: state.allocate_id(),
        title: input.title,
        created_at: CREATED_AT.to_string(),
    };
    state.goals.lock().unwrap().push(goal.clone());
    Ok(Json(json!(goal)))
}

async fn get_goal(Path(id): Path<i64>, State(state): State<Arc<MockState>>) -> HandlerResult {
    state.enter().await?;
    let goals = state.goals.lock().unwrap();
    let goal = goals.iter().find(|g| g.id == id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({ "goal": goal })))
}

async fn update_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<MockState>>,
    Json(update): Json<GoalUpdate>,
) -> HandlerResult {
    state.enter().await?;
    state.record(&update);
    let mut goals = state.goals.lock().unwrap();
    let goal = goals
        .iter_mut()
        .find(|g| g.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = update.title {
        goal.title = title;
    }
    Ok(Json(json!({ "goal": goal })))
}

async fn delete_goal(
    Path(id): Path<i64>,
    State(state): State<Arc<MockState>>,
) -> Result<StatusCode, StatusCode> {
    state.enter().await?;
    state.goals.lock().unwrap().retain(|g| g.id != id);
    state.tasks.lock().unwrap().retain(|t| t.goal_id != id);
    Ok(StatusCode::NO_CONTENT)
}

async fn list_tasks(
    Query(query): Query<TaskQuery>,
    State(state): State<Arc<MockState>>,
) -> HandlerResult {
    state.enter().await?;
    let goal_id = query.goal_id.ok_or(StatusCode::BAD_REQUEST)?;
    let tasks: Vec<Task> = state
        .tasks
        .lock()
        .unwrap()
        .iter()
        .filter(|t| t.goal_id == goal_id)
        .cloned()
        .collect();
    Ok(Json(json!({ "tasks": tasks })))
}

async fn list_all_tasks(State(state): State<Arc<MockState>>) -> HandlerResult {
    state.enter().await?;
    let tasks = state.tasks.lock().unwrap().clone();
    Ok(Json(json!({ "tasks": tasks })))
}

async fn list_incomplete_tasks(State(state): State<Arc<MockState>>) -> HandlerResult {
    state.enter().await?;
    let tasks: Vec<Task> = state
        .tasks
        .lock()
        .unwrap()
        .iter()
        .filter(|t| !t.completed)
        .cloned()
        .collect();
    Ok(Json(json!({ "tasks": tasks })))
}

async fn create_task(
    State(state): State<Arc<MockState>>,
    Json(input): Json<NewTask>,
) -> HandlerResult {
    state.enter().await?;
    state.record(&input);
    let task = Task {
        id: state.allocate_id(),
        goal_id: input.goal_id,
        title: input.title,
        completed: false,
        created_at: CREATED_AT.to_string(),
    };
    state.tasks.lock().unwrap().push(task.clone());
    // The backend answers task creation without the {task} wrapper
    Ok(Json(json!(task)))
}

async fn get_task(Path(id): Path<i64>, State(state): State<Arc<MockState>>) -> HandlerResult {
    state.enter().await?;
    let task = state.task(id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({ "task": task })))
}

async fn update_task(
    Path(id): Path<i64>,
    State(state): State<Arc<MockState>>,
    Json(update): Json<TaskUpdate>,
) -> HandlerResult {
    state.enter().await?;
    state.record(&update);
    let mut tasks = state.tasks.lock().unwrap();
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = update.title {
        task.title = title;
    }
    if let Some(completed) = update.completed {
        task.completed = completed;
    }
    Ok(Json(json!({ "task": task })))
}

async fn delete_task(
    Path(id): Path<i64>,
    State(state): State<Arc<MockState>>,
) -> Result<StatusCode, StatusCode> {
    state.enter().await?;
    state.tasks.lock().unwrap().retain(|t| t.id != id);
    Ok(StatusCode::NO_CONTENT)
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/all", get(list_all_tasks))
        .route("/tasks/incomplete", get(list_incomplete_tasks))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(state)
}

pub struct TestServer {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl TestServer {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone())
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config()).unwrap()
    }

    pub fn goals_service(&self) -> GoalsService {
        GoalsService::new(self.client())
    }

    pub fn tasks_service(&self) -> TasksService {
        TasksService::new(self.client())
    }
}
