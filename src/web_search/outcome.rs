//! Search errors and the outcome type collapsed to text at the tool boundary

use std::fmt;
use thiserror::Error;

/// Fallback provider message when a failed payload carries no `msg`
pub const UNKNOWN_PROVIDER_ERROR: &str = "未知错误";

/// Failures inside a single search call
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("HTTP status {status}")]
    HttpStatus { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Result of one search invocation
///
/// Every variant renders to the string handed back to the agent; the host
/// never sees a typed error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Success(String),
    ConfigIncomplete,
    HttpError { status: u16, body: String },
    ApplicationError(String),
    EmptyResult { query: String },
    UnknownError(String),
}

impl SearchOutcome {
    /// True for real failures; `EmptyResult` is a valid answer
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Success(_) | Self::EmptyResult { .. })
    }
}

impl From<SearchError> for SearchOutcome {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::MissingApiKey => Self::ConfigIncomplete,
            SearchError::HttpStatus { status, body } => Self::HttpError { status, body },
            other => Self::UnknownError(other.to_string()),
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(text) => f.write_str(text),
            Self::ConfigIncomplete => {
                f.write_str("插件配置不完整，请前往插件设置填写 API_KEY。")
            }
            // body is logged by the caller, never shown to the agent
            Self::HttpError { status, .. } => write!(
                f,
                "搜索服务请求失败，状态码: {status}。请检查您的网络或 API Key。"
            ),
            Self::ApplicationError(msg) => write!(f, "博查 API 返回错误: {msg}"),
            Self::EmptyResult { query } => write!(f, "未能找到与“{query}”相关的结果。"),
            Self::UnknownError(detail) => write!(f, "搜索时遇到未知错误: {detail}"),
        }
    }
}
