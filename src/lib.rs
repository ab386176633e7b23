//! Bocha AI web search tool for AI agents
//!
//! Provides a `web_search` tool that queries the Bocha Web Search API and
//! returns formatted titles, links, and summaries.

pub mod config;
pub mod server;
pub mod tool;
mod tools;
pub mod web_search;

use std::path::PathBuf;
use std::sync::Arc;

pub use config::{BochaConfig, ConfigError, load_yaml_config, load_yaml_config_with};
pub use server::{ToolServer, serve_stdio};
pub use tool::Tool;
pub use tools::{BochaSearchTool, SearchArgs, WEB_SEARCH};
pub use web_search::SearchOutcome;

/// Environment variable naming the config file path
pub const ENV_CONFIG_PATH: &str = "BOCHA_CONFIG";

/// Config file used when `BOCHA_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Resolve the config file path from `BOCHA_CONFIG`, defaulting to `config.yaml`
pub fn config_path() -> PathBuf {
    std::env::var_os(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load configuration and serve the web search tool over stdio
///
/// Returns when the MCP peer disconnects.
pub async fn start_server() -> anyhow::Result<()> {
    let path = config_path();
    let config = load_yaml_config(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path.display(), e))?;

    if !config.has_api_key() {
        tracing::warn!(
            "API key is empty; web_search will report incomplete configuration until it is set"
        );
    }
    tracing::info!("Loaded Bocha config: {:?}", config);

    serve_stdio(BochaSearchTool::new(Arc::new(config))).await
}
