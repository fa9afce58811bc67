use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::assistant::{WidgetConfig, DEFAULT_BOT_ID, DEFAULT_HOST};

pub const DEFAULT_DATA_FILE: &str = "products_dataset.csv";

/// Resolved runtime configuration. Read once at startup; CLI flags are
/// applied as environment overrides before this runs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub assistant_host: String,
    pub assistant_bot_id: String,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            assistant_host: DEFAULT_HOST.to_string(),
            assistant_bot_id: DEFAULT_BOT_ID.to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Widget configuration handed to the assistant bootstrap. The two
    /// feature toggles are fixed off; only the endpoint is configurable.
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            host: self.assistant_host.clone(),
            bot_id: self.assistant_bot_id.clone(),
            show_conversations: false,
            persist_history: false,
        }
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment.
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file
    dotenv().ok();

    AppConfig {
        data_path: env::var("PRODUCTS_CSV")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from),
        assistant_host: env::var("ASSISTANT_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
        assistant_bot_id: env::var("ASSISTANT_BOT_ID")
            .unwrap_or_else(|_| DEFAULT_BOT_ID.to_string()),
        debug: env::var("DEBUG").is_ok(),
    }
}
