use anyhow::Result;

use super::{Payloads, remediation};
use crate::http::HttpClient;
use crate::models::{Finding, VulnClass};

const CLASS: VulnClass = VulnClass::XmlExternalEntities;

/// Uploads an XML document carrying an external entity. Acceptance means
/// the parser did not reject the DTD.
pub async fn run(client: &HttpClient) -> Result<Finding> {
    let resp = client
        .post_raw(
            "/api/upload",
            "application/xml",
            Payloads::XXE_DOCUMENT.to_string(),
        )
        .await;

    if resp.is_error() {
        return Ok(Finding::warning(
            CLASS,
            format!(
                "Could not reach /api/upload: {}",
                resp.error.unwrap_or_default()
            ),
        ));
    }

    if resp.is_success() {
        Ok(Finding::fail(
            CLASS,
            "Upload endpoint accepted an XML document containing an external entity declaration",
            remediation(CLASS),
        ))
    } else if resp.is_rejection() {
        Ok(Finding::pass(
            CLASS,
            format!("Upload endpoint rejected the external-entity document ({})", resp.status),
        ))
    } else {
        Ok(Finding::warning(
            CLASS,
            format!("Unexpected status {} from /api/upload", resp.status),
        ))
    }
}
