use anyhow::Result;
use serde_json::json;

use super::{Payloads, remediation};
use crate::http::HttpClient;
use crate::models::{Finding, VulnClass};

const CLASS: VulnClass = VulnClass::InsecureDeserialization;

/// Posts a base64 serialized-object blob; acceptance suggests the target
/// deserializes opaque client payloads.
pub async fn run(client: &HttpClient) -> Result<Finding> {
    let resp = client
        .post_json("/api/data", &json!({"payload": Payloads::SERIALIZED_OBJECT}))
        .await;

    if resp.is_error() {
        return Ok(Finding::warning(
            CLASS,
            format!(
                "Could not reach /api/data: {}",
                resp.error.unwrap_or_default()
            ),
        ));
    }

    if resp.is_success() {
        Ok(Finding::fail(
            CLASS,
            "Data endpoint accepted a base64 serialized-object payload without rejection",
            remediation(CLASS),
        ))
    } else if resp.is_rejection() {
        Ok(Finding::pass(
            CLASS,
            format!("Serialized payload rejected ({})", resp.status),
        ))
    } else {
        Ok(Finding::warning(
            CLASS,
            format!("Unexpected status {} from /api/data", resp.status),
        ))
    }
}
