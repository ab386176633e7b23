// Bocha web search tool server
//
// Serves the web_search tool over MCP stdio. Logs go to stderr since stdout
// carries the protocol.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    kodegen_tools_bocha::start_server().await
}
