//! Web search via the Bocha Web Search API
//!
//! This module performs one search request per call and shapes the response
//! into the text handed back to the agent. Every failure is folded into a
//! [`SearchOutcome`], so callers always get a string to show.
//!
//! # Architecture
//! - `types` - Wire types and constants
//! - `format` - Rendering of search hits
//! - `outcome` - Error and outcome types
//!
//! # Usage
//! ```no_run
//! use kodegen_tools_bocha::{BochaConfig, web_search};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = BochaConfig::new("https://api.bochaai.com/v1", "sk-...", 5)?;
//!     let outcome = web_search::search(&config, "天空为什么是蓝色的？").await;
//!     println!("{outcome}");
//!     Ok(())
//! }
//! ```

mod format;
mod outcome;
mod types;

// Re-export public types
pub use format::{NO_LINK, NO_SUMMARY, NO_TITLE, format_results};
pub use outcome::{SearchError, SearchOutcome, UNKNOWN_PROVIDER_ERROR};
pub use types::{
    REQUEST_TIMEOUT_SECS, SUCCESS_CODE, SearchData, SearchRequest, SearchResponse, WebPage,
    WebPages,
};

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::BochaConfig;

/// Perform one web search and return its outcome
///
/// Never fails: transport and decode errors become
/// [`SearchOutcome::UnknownError`].
pub async fn search(config: &BochaConfig, query: &str) -> SearchOutcome {
    search_with_timeout(config, query, Duration::from_secs(REQUEST_TIMEOUT_SECS)).await
}

/// [`search`] with an explicit request timeout
///
/// An elapsed timeout is a transport failure and yields
/// [`SearchOutcome::UnknownError`].
pub async fn search_with_timeout(
    config: &BochaConfig,
    query: &str,
    timeout: Duration,
) -> SearchOutcome {
    let outcome = match fetch(config, query, timeout).await {
        Ok(response) => shape_response(query, response),
        Err(err) => {
            match &err {
                SearchError::MissingApiKey => {
                    error!("Bocha search tool is not configured: API key is empty");
                }
                SearchError::HttpStatus { status, body } => {
                    error!(
                        "HTTP error calling Bocha API: status={}, body={}",
                        status, body
                    );
                }
                other => error!("Unknown error calling Bocha API: {}", other),
            }
            err.into()
        }
    };

    if outcome.is_failure() {
        debug!("Bocha search for '{}' finished with a failure outcome", query);
    }
    outcome
}

/// Map a decoded payload to an outcome; pure apart from logging
pub fn shape_response(query: &str, response: SearchResponse) -> SearchOutcome {
    if !response.is_success() {
        let msg = response
            .msg
            .unwrap_or_else(|| UNKNOWN_PROVIDER_ERROR.to_string());
        error!("Bocha API returned error: code={:?}, msg={}", response.code, msg);
        return SearchOutcome::ApplicationError(msg);
    }

    let pages = response.into_pages();
    if pages.is_empty() {
        info!("Bocha search returned no results for query: {}", query);
        return SearchOutcome::EmptyResult {
            query: query.to_string(),
        };
    }

    let text = format_results(query, &pages);
    info!("Bocha search succeeded with {} results", pages.len());
    SearchOutcome::Success(text)
}

/// Send the search request and decode the payload
///
/// The client lives only for this call and is dropped on every return path.
/// Redirects are not followed: any non-2xx status, 3xx included, is an HTTP error.
async fn fetch(
    config: &BochaConfig,
    query: &str,
    timeout: Duration,
) -> Result<SearchResponse, SearchError> {
    if !config.has_api_key() {
        return Err(SearchError::MissingApiKey);
    }

    let endpoint = config.search_endpoint();
    let request = SearchRequest::new(query, config.result_count());

    info!("Starting Bocha web search for query: {}", query);

    let client = Client::builder()
        .timeout(timeout)
        .redirect(Policy::none())
        .build()?;

    let response = client
        .post(&endpoint)
        .header(AUTHORIZATION, format!("Bearer {}", config.api_key()))
        .header(CONTENT_TYPE, "application/json")
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SearchError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
