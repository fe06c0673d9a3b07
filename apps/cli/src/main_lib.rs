use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gtd_client::{ApiClient, GoalsService, TasksService};
use gtd_core::ApiConfig;

pub struct AppState {
    pub goals: Arc<GoalsService>,
    pub tasks: Arc<TasksService>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GTD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

pub fn build_state() -> anyhow::Result<AppState> {
    let config = ApiConfig::from_env()?;
    tracing::debug!("Using API at {}", config.base_url);
    let api = ApiClient::new(config)?;
    Ok(AppState {
        goals: Arc::new(GoalsService::new(api.clone())),
        tasks: Arc::new(TasksService::new(api)),
    })
}
