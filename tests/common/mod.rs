//! Mock Bocha API server for integration tests

#![allow(dead_code)]

use kodegen_tools_bocha::BochaConfig;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "sk-test";

/// Mock Bocha endpoint serving `POST /v1/web-search`
pub struct MockBocha {
    server: MockServer,
}

impl MockBocha {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Base URL as it would appear in plugin settings
    pub fn api_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    pub fn config(&self, result_count: i64) -> BochaConfig {
        BochaConfig::new(self.api_url(), TEST_API_KEY, result_count).expect("valid test config")
    }

    /// Respond to every search with `status` and a JSON body, expecting `calls` hits
    pub async fn respond_json(&self, status: u16, body: Value, calls: u64) {
        Mock::given(method("POST"))
            .and(path("/v1/web-search"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Respond to every search with a raw text body
    pub async fn respond_raw(&self, status: u16, body: &str, calls: u64) {
        Mock::given(method("POST"))
            .and(path("/v1/web-search"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(calls)
            .mount(&self.server)
            .await;
    }
}

/// Successful payload wrapping the given pages
pub fn pages_payload(pages: Value) -> Value {
    json!({
        "code": 200,
        "msg": null,
        "data": {
            "_type": "SearchResponse",
            "webPages": {
                "totalEstimatedMatches": 1000,
                "value": pages
            }
        }
    })
}
