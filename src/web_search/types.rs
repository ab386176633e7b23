//! Wire types for the Bocha Web Search API

use serde::{Deserialize, Serialize};

/// Per-request timeout for the full request/response cycle (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application-level success code in the response payload
pub const SUCCESS_CODE: i64 = 200;

/// Request body sent to `POST {api_url}/web-search`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    pub summary: bool,
    pub count: u8,
}

impl<'a> SearchRequest<'a> {
    /// Build a request; summaries are always requested
    pub fn new(query: &'a str, count: u8) -> Self {
        Self {
            query,
            summary: true,
            count,
        }
    }
}

/// Top-level response payload
///
/// Every level is optional: the provider omits `data` on failures and
/// `webPages` when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub code: Option<i64>,

    #[serde(default)]
    pub msg: Option<String>,

    #[serde(default)]
    pub data: Option<SearchData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchData {
    #[serde(default, rename = "webPages")]
    pub web_pages: Option<WebPages>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebPages {
    #[serde(default)]
    pub value: Option<Vec<WebPage>>,
}

/// One search hit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebPage {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub snippet: Option<String>,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.code == Some(SUCCESS_CODE)
    }

    /// `data.webPages.value`, or an empty list when any level is missing
    pub fn into_pages(self) -> Vec<WebPage> {
        self.data
            .and_then(|data| data.web_pages)
            .and_then(|pages| pages.value)
            .unwrap_or_default()
    }
}
