/// Base URL used when no runtime configuration is provided
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:4000";

/// Per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable holding the API base URL
pub const API_BASE_URL_ENV: &str = "GTD_API_BASE_URL";

/// Environment variable overriding the request timeout (milliseconds)
pub const API_TIMEOUT_ENV: &str = "GTD_API_TIMEOUT_MS";

/// Maximum length of a goal or task title
pub const MAX_TITLE_LENGTH: usize = 100;

pub const GOALS_ENDPOINT: &str = "goals";

pub const TASKS_ENDPOINT: &str = "tasks";
