use anyhow::Result;
use serde_json::{Value, json};

use super::{Payloads, remediation};
use crate::http::HttpClient;
use crate::models::{Finding, VulnClass};

const CLASS: VulnClass = VulnClass::InsufficientLogging;

const FAILED_ATTEMPTS: usize = 5;

/// Log payloads come back either as a bare array or under a wrapper key.
/// `None` means the shape was unrecognized.
pub fn logged_entry_count(body: Option<&Value>) -> Option<usize> {
    match body? {
        Value::Array(entries) => Some(entries.len()),
        Value::Object(map) => ["logs", "entries"].iter().find_map(|key| {
            if let Some(Value::Array(entries)) = map.get(*key) {
                Some(entries.len())
            } else {
                None
            }
        }),
        _ => None,
    }
}

/// Performs a burst of failed logins, then asks the admin log endpoint
/// whether they were recorded.
pub async fn run(client: &HttpClient) -> Result<Finding> {
    let bad_login = json!({
        "email": Payloads::PROBE_EMAIL,
        "password": Payloads::PROBE_BAD_PASSWORD,
    });

    for _ in 0..FAILED_ATTEMPTS {
        // Rejections are the point here; outcomes are not inspected.
        client.post_json("/api/auth/login", &bad_login).await;
    }

    let resp = client
        .get("/api/admin/logs", &[("type", "failed_login")])
        .await;

    if resp.is_error() {
        return Ok(Finding::warning(
            CLASS,
            format!(
                "Could not query /api/admin/logs: {}",
                resp.error.unwrap_or_default()
            ),
        ));
    }

    if !resp.is_success() {
        return Ok(Finding::warning(
            CLASS,
            format!("Log endpoint returned {} instead of log entries", resp.status),
        ));
    }

    match logged_entry_count(resp.body.as_ref()) {
        Some(0) => Ok(Finding::fail(
            CLASS,
            format!(
                "{} failed login attempts produced no failed_login log entries",
                FAILED_ATTEMPTS
            ),
            remediation(CLASS),
        )),
        Some(count) => Ok(Finding::pass(
            CLASS,
            format!("Failed logins are recorded ({} entries returned)", count),
        )),
        None => Ok(Finding::warning(
            CLASS,
            "Log endpoint response had no recognizable entry list",
        )),
    }
}
