mod cli;
mod commands;
mod main_lib;

use clap::Parser;

use cli::{Cli, Cmd};
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing();
    let state = build_state()?;

    match cli.cmd {
        Cmd::Goals { action } => commands::goals(&state, action).await,
        Cmd::Tasks { goal, action } => commands::tasks(&state, goal, action).await,
        Cmd::Report => commands::report(&state).await,
    }
}
