use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gtd", version, about = "Goals and tasks from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Manage goals
    Goals {
        #[command(subcommand)]
        action: GoalsCmd,
    },
    /// Manage the tasks of one goal
    Tasks {
        /// Goal the tasks belong to
        #[arg(long, global = true)]
        goal: Option<i64>,
        #[command(subcommand)]
        action: TasksCmd,
    },
    /// Print every incomplete task across all goals
    Report,
}

#[derive(Subcommand)]
pub enum GoalsCmd {
    List,
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    Rename {
        id: i64,
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum TasksCmd {
    List,
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Flip a task between pending and completed
    Toggle {
        id: i64,
    },
    Rename {
        id: i64,
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    Delete {
        id: i64,
    },
}
