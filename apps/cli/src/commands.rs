use anyhow::{anyhow, bail, Result};

use gtd_core::goals::{Goal, GoalUpdate, GoalsStore};
use gtd_core::tasks::{GoalId, NewTask, Task, TaskUpdate, TasksStore};
use gtd_core::utils::date_utils::{parse_timestamp, relative_time_now};
use gtd_core::utils::validation::normalize_title;
use gtd_core::{Error, LoadState};

use crate::cli::{GoalsCmd, TasksCmd};
use crate::main_lib::AppState;

const TOGGLE_FAILED: &str = "Failed to update task. Please try again.";

pub async fn goals(state: &AppState, action: GoalsCmd) -> Result<()> {
    let store = GoalsStore::new(state.goals.clone());

    match action {
        GoalsCmd::List => {
            store.mount().await;
            ensure_loaded(store.state(), store.error(), "Failed to fetch goals")?;
            let goals = store.goals();
            if goals.is_empty() {
                println!("No goals yet. Add one with `gtd goals add <title>`.");
            }
            for goal in &goals {
                println!("{}", goal_line(goal));
            }
        }
        GoalsCmd::Add { title } => match store.submit_goal(&title.join(" ")).await {
            Ok(goal) => println!("Created goal {}: {}", goal.id, goal.title),
            Err(Error::Validation(err)) => bail!("{}", err),
            Err(err) => {
                return Err(
                    anyhow::Error::new(err).context("Failed to create goal. Please try again.")
                );
            }
        },
        GoalsCmd::Rename { id, title } => {
            let title = normalize_title(&title.join(" "))?;
            match store.update_goal(id, GoalUpdate::title(title)).await {
                Some(goal) => println!("Renamed goal {} to {}", goal.id, goal.title),
                None => bail!(failure(store.error(), "Failed to update goal")),
            }
        }
        GoalsCmd::Delete { id } => {
            if !store.delete_goal(id).await {
                bail!(failure(store.error(), "Failed to delete goal"));
            }
            println!("Deleted goal {}", id);
        }
    }

    Ok(())
}

pub async fn tasks(state: &AppState, goal: Option<GoalId>, action: TasksCmd) -> Result<()> {
    let goal_id = goal.ok_or_else(|| anyhow!("--goal <id> is required for task commands"))?;
    let store = TasksStore::for_goal(state.tasks.clone(), goal_id);
    store.mount().await;
    ensure_loaded(store.state(), store.error(), "Failed to fetch tasks")?;

    match action {
        TasksCmd::List => print_tasks(&store),
        TasksCmd::Add { title } => {
            let new_task = NewTask::validated(goal_id, &title.join(" "))?;
            match store.create_task(new_task).await {
                Some(task) => println!("Created task {}: {}", task.id, task.title),
                None => bail!(failure(store.error(), "Failed to create task")),
            }
            print_tasks(&store);
        }
        TasksCmd::Toggle { id } => {
            let task = store
                .tasks()
                .into_iter()
                .find(|task| task.id == id)
                .ok_or_else(|| anyhow!("Task {} not found in goal {}", id, goal_id))?;

            if !store.toggle_task_completion(id, !task.completed).await {
                tracing::warn!("Toggle of task {} failed: {:?}", id, store.error());
                print_tasks(&store);
                bail!(TOGGLE_FAILED);
            }
            println!("{}", toggle_message(&task));
            print_tasks(&store);
        }
        TasksCmd::Rename { id, title } => {
            let title = normalize_title(&title.join(" "))?;
            match store.update_task(id, TaskUpdate::title(title)).await {
                Some(task) => println!("Renamed task {} to {}", task.id, task.title),
                None => bail!(failure(store.error(), "Failed to update task")),
            }
        }
        TasksCmd::Delete { id } => {
            if !store.delete_task(id).await {
                bail!(failure(store.error(), "Failed to delete task"));
            }
            println!("Deleted task {}", id);
        }
    }

    Ok(())
}

/// Incomplete tasks across every goal, oldest first as the server returns them.
pub async fn report(state: &AppState) -> Result<()> {
    let tasks = state.tasks.list_incomplete_tasks().await?.into_data();

    println!("=== Incomplete Tasks Report ===");
    println!(
        "Generated at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    if tasks.is_empty() {
        println!("No incomplete tasks found!");
    } else {
        println!("Found {} incomplete task(s):", tasks.len());
        for (index, task) in tasks.iter().enumerate() {
            println!("{}", report_line(index + 1, task));
        }
    }
    println!("=== End Report ===");

    Ok(())
}

fn ensure_loaded(state: LoadState, error: Option<String>, fallback: &str) -> Result<()> {
    if state == LoadState::Failed {
        bail!("{} Run the command again to retry.", failure(error, fallback));
    }
    Ok(())
}

fn failure(error: Option<String>, fallback: &str) -> String {
    error
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn print_tasks<S: gtd_core::tasks::TaskServiceTrait>(store: &TasksStore<S>) {
    let counts = store.counts();
    println!("{} pending, {} completed", counts.pending, counts.completed);
    for task in store.tasks() {
        println!("{}", task_line(&task));
    }
}

fn toggle_message(before: &Task) -> &'static str {
    if before.completed {
        "Task marked as incomplete!"
    } else {
        "Task marked as complete!"
    }
}

fn goal_line(goal: &Goal) -> String {
    format!(
        "{:>4}  {}  ({})",
        goal.id,
        goal.title,
        relative_time_now(&goal.created_at)
    )
}

fn task_line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    format!(
        "{:>4}  [{}] {}  ({})",
        task.id,
        mark,
        task.title,
        relative_time_now(&task.created_at)
    )
}

fn report_line(position: usize, task: &Task) -> String {
    let created = parse_timestamp(&task.created_at)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| task.created_at.clone());
    format!(
        "  {}. [Goal ID: {}] {} (Created: {})",
        position, task.goal_id, task.title, created
    )
}
