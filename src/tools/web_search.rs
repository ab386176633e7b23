//! `web_search` tool implementation
//!
//! Searches the web through Bocha AI and returns formatted results with
//! titles, links, and summaries.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::BochaConfig;
use crate::tool::Tool;

/// Tool name registered with the host
pub const WEB_SEARCH: &str = "web_search";

// =============================================================================
// Args
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchArgs {
    /// Keywords or question to search for
    pub query: String,
}

// =============================================================================
// Tool Struct
// =============================================================================

#[derive(Clone)]
pub struct BochaSearchTool {
    config: Arc<BochaConfig>,
}

impl BochaSearchTool {
    #[must_use]
    pub fn new(config: Arc<BochaConfig>) -> Self {
        Self { config }
    }
}

// =============================================================================
// Tool Trait Implementation
// =============================================================================

#[async_trait]
impl Tool for BochaSearchTool {
    type Args = SearchArgs;

    fn name() -> &'static str {
        WEB_SEARCH
    }

    fn description() -> &'static str {
        "使用博查AI进行联网搜索并返回结果。\n\n\
         根据关键词进行联网搜索，返回格式化后的搜索结果，每条包含标题、链接和摘要。\n\n\
         Example: web_search({\"query\": \"天空为什么是蓝色的？\"})"
    }

    fn read_only() -> bool {
        true
    }

    fn destructive() -> bool {
        false
    }

    fn open_world() -> bool {
        true
    }

    async fn execute(&self, args: Self::Args) -> String {
        crate::web_search::search(&self.config, &args.query)
            .await
            .to_string()
    }
}
