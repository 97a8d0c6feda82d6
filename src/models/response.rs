use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Captured HTTP exchange result. Transport failures land in `error`
/// instead of propagating, so checks can interpret 4xx/5xx as signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseInfo {
    pub status: u16,
    pub size: usize,
    pub body: Option<serde_json::Value>,
    pub text: String,
    pub headers: HashMap<String, String>,
    pub duration_ms: u64,
    pub error: Option<String>,
}

impl ResponseInfo {
    pub fn new(status: u16, text: String, duration_ms: u64) -> Self {
        let body = serde_json::from_str(&text).ok();
        Self {
            status,
            size: text.len(),
            body,
            text,
            headers: HashMap::new(),
            duration_ms,
            error: None,
        }
    }

    pub fn error(err: String) -> Self {
        Self {
            status: 0,
            size: 0,
            body: None,
            text: String::new(),
            headers: HashMap::new(),
            duration_ms: 0,
            error: Some(err),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_rejection(&self) -> bool {
        (400..600).contains(&self.status)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Header lookup; reqwest lowercases names on capture.
    pub fn header(&self, name: &str) -> Option<&str> {
        let lower = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_ascii_lowercase() == lower)
            .map(|(_, v)| v.as_str())
    }

    pub fn body_field(&self, name: &str) -> Option<&serde_json::Value> {
        self.body.as_ref().and_then(|b| b.get(name))
    }
}
