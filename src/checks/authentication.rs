use anyhow::Result;
use serde_json::json;

use super::{Payloads, remediation};
use crate::http::HttpClient;
use crate::models::{Finding, ResponseInfo, VulnClass};

const CLASS: VulnClass = VulnClass::BrokenAuthentication;

/// Flags two successful logins that came back with the same session
/// identifier. Inconclusive logins are not compared.
pub fn session_fixation_reason(first: &ResponseInfo, second: &ResponseInfo) -> Option<String> {
    if !first.is_success() || !second.is_success() {
        return None;
    }

    let first_id = first.body_field("sessionId")?;
    let second_id = second.body_field("sessionId")?;

    if first_id == second_id {
        Some(format!(
            "Session Fixation: session identifier {} reused across consecutive logins",
            first_id
        ))
    } else {
        None
    }
}

/// Three sub-probes folded into one finding: default credentials, session
/// regeneration, weak-password registration. A successful default-credential
/// login is reported as acceptance only, with no claim about the account's
/// privileges.
pub async fn run(client: &HttpClient) -> Result<Finding> {
    let mut reasons: Vec<String> = Vec::new();
    let mut transport_errors: Vec<String> = Vec::new();

    for (email, password) in Payloads::DEFAULT_CREDENTIALS {
        let resp = client
            .post_json("/api/auth/login", &json!({"email": email, "password": password}))
            .await;

        if resp.is_error() {
            transport_errors.push(resp.error.unwrap_or_default());
            continue;
        }
        if resp.is_success() {
            reasons.push(format!("Default credentials accepted ({})", email));
        }
    }

    let (email, password) = Payloads::TEST_CREDENTIALS;
    let credentials = json!({"email": email, "password": password});
    let first = client.post_json("/api/auth/login", &credentials).await;
    let second = client.post_json("/api/auth/login", &credentials).await;

    if first.is_error() || second.is_error() {
        transport_errors.push("session regeneration probe could not log in".to_string());
    } else if let Some(reason) = session_fixation_reason(&first, &second) {
        reasons.push(reason);
    }

    let registration = client
        .post_json(
            "/api/auth/register",
            &json!({
                "email": Payloads::REGISTRATION_EMAIL,
                "password": Payloads::WEAK_PASSWORD,
            }),
        )
        .await;

    if registration.is_error() {
        transport_errors.push(registration.error.unwrap_or_default());
    } else if registration.is_success() {
        reasons.push(format!(
            "Weak password '{}' accepted at registration",
            Payloads::WEAK_PASSWORD
        ));
    }

    if !reasons.is_empty() {
        Ok(Finding::fail(CLASS, reasons.join("; "), remediation(CLASS)))
    } else if !transport_errors.is_empty() {
        Ok(Finding::warning(
            CLASS,
            format!(
                "Authentication probes incomplete: {}",
                transport_errors.join("; ")
            ),
        ))
    } else {
        Ok(Finding::pass(
            CLASS,
            "Default credentials rejected, sessions regenerated across logins, weak registration password refused",
        ))
    }
}
