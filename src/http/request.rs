use serde_json::Value;

use super::method::HttpMethod;

/// One request issued by a check. `path` is relative to the run's base
/// address, e.g. `api/leads` or the empty string for the root.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl CheckRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}
