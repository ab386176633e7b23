//! Agent tool abstraction
//!
//! A tool is a named, described callable with a JSON-schema argument type.
//! Tools always answer with text: failures are rendered into the returned
//! string rather than surfaced as errors to the host.

use async_trait::async_trait;
use rmcp::model::{JsonObject, Tool as ToolDefinition, ToolAnnotations};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::sync::Arc;

#[async_trait]
pub trait Tool: Send + Sync + 'static {
    type Args: DeserializeOwned + JsonSchema + Send;

    /// Name the host uses to invoke the tool
    fn name() -> &'static str;

    /// Description shown to the orchestrating agent
    fn description() -> &'static str;

    fn read_only() -> bool {
        false
    }

    fn destructive() -> bool {
        true
    }

    fn open_world() -> bool {
        false
    }

    /// JSON schema of `Args`, generated by schemars
    fn input_schema() -> Arc<JsonObject> {
        let schema = schemars::schema_for!(Self::Args);
        Arc::new(schema.as_object().cloned().unwrap_or_default())
    }

    /// Host-facing definition with schema and behaviour hints
    fn definition() -> ToolDefinition {
        ToolDefinition::new(Self::name(), Self::description(), Self::input_schema()).annotate(
            ToolAnnotations::new()
                .read_only(Self::read_only())
                .destructive(Self::destructive())
                .open_world(Self::open_world()),
        )
    }

    async fn execute(&self, args: Self::Args) -> String;
}
