use anyhow::Result;
use serde_json::json;

use super::{Payloads, remediation};
use crate::http::HttpClient;
use crate::models::{Finding, ResponseInfo, VulnClass};

const CLASS: VulnClass = VulnClass::CrossSiteScripting;

/// A payload echoed back verbatim was stored or reflected unescaped.
pub fn reflects_payload(resp: &ResponseInfo, payload: &str) -> bool {
    !resp.is_error() && resp.text.contains(payload)
}

/// Posts each markup payload as a comment and checks whether the target
/// echoes it back unescaped.
pub async fn run(client: &HttpClient) -> Result<Finding> {
    let mut reflected: Vec<&str> = Vec::new();
    let mut transport_errors = 0usize;

    for &payload in Payloads::XSS {
        let resp = client
            .post_json("/api/comments", &json!({"content": payload}))
            .await;

        if resp.is_error() {
            transport_errors += 1;
            continue;
        }
        if reflects_payload(&resp, payload) {
            reflected.push(payload);
        }
    }

    if !reflected.is_empty() {
        Ok(Finding::fail(
            CLASS,
            format!(
                "Comment endpoint echoed {} payload(s) unescaped: {}",
                reflected.len(),
                reflected.join(", ")
            ),
            remediation(CLASS),
        ))
    } else if transport_errors == Payloads::XSS.len() {
        Ok(Finding::warning(
            CLASS,
            "Could not reach /api/comments for any payload",
        ))
    } else {
        Ok(Finding::pass(
            CLASS,
            "All markup payloads were rejected or sanitized",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_echo_is_reflection() {
        let payload = "<script>alert('XSS')</script>";
        let resp = ResponseInfo::new(
            201,
            format!(r#"{{"content":"{}"}}"#, payload),
            15,
        );
        assert!(reflects_payload(&resp, payload));
    }

    #[test]
    fn test_escaped_echo_is_not_reflection() {
        let resp = ResponseInfo::new(
            201,
            r#"{"content":"&lt;script&gt;alert('XSS')&lt;/script&gt;"}"#.to_string(),
            15,
        );
        assert!(!reflects_payload(&resp, "<script>alert('XSS')</script>"));
    }

    #[test]
    fn test_transport_error_is_not_reflection() {
        let resp = ResponseInfo::error("timeout".to_string());
        assert!(!reflects_payload(&resp, "<script>"));
    }
}
