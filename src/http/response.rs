use std::fmt::{self, Display};

use serde_json::Value;

/// Response payload, classified once when the bytes are read.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Structured(Value),
    Raw(String),
}

impl ResponseBody {
    /// Decode as JSON, falling back to lossy UTF-8 text. Never fails.
    pub fn decode(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => ResponseBody::Structured(value),
            Err(_) => ResponseBody::Raw(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Structured(value) => Some(value),
            ResponseBody::Raw(_) => None,
        }
    }
}

impl Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Structured(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                write!(f, "Response: {pretty}")
            }
            ResponseBody::Raw(text) => write!(f, "Response (text): {text}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub duration_ms: u128,
    pub size_bytes: usize,
    pub body: ResponseBody,
}
