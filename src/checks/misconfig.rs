use anyhow::Result;

use super::remediation;
use crate::http::HttpClient;
use crate::models::{Finding, ResponseInfo, VulnClass};

const CLASS: VulnClass = VulnClass::SecurityMisconfiguration;

const REQUIRED_HEADERS: &[(&str, &str)] = &[
    ("X-Content-Type-Options", "Missing X-Content-Type-Options header"),
    ("X-Frame-Options", "Missing X-Frame-Options header"),
    (
        "Strict-Transport-Security",
        "Missing Strict-Transport-Security (HSTS) header",
    ),
];

fn is_truthy(value: &serde_json::Value) -> bool {
    value.as_bool() == Some(true) || value.as_str() == Some("true")
}

pub fn collect_flags(resp: &ResponseInfo) -> Vec<String> {
    let mut flags = Vec::new();

    if resp.body_field("debug").map(is_truthy).unwrap_or(false) {
        flags.push("Debug mode enabled in health endpoint response".to_string());
    }

    for (header, flag) in REQUIRED_HEADERS {
        if resp.header(header).is_none() {
            flags.push((*flag).to_string());
        }
    }

    flags
}

/// Inspects the health endpoint for a debug flag and missing security
/// response headers.
pub async fn run(client: &HttpClient) -> Result<Finding> {
    let resp = client.get("/api/health", &[]).await;

    if resp.is_error() {
        return Ok(Finding::warning(
            CLASS,
            format!(
                "Could not fetch /api/health: {}",
                resp.error.unwrap_or_default()
            ),
        ));
    }

    let flags = collect_flags(&resp);

    if flags.is_empty() {
        Ok(Finding::pass(
            CLASS,
            "Health endpoint has no debug flag and all security headers are present",
        ))
    } else {
        Ok(Finding::fail(CLASS, flags.join("; "), remediation(CLASS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health_response(body: &str, headers: &[(&str, &str)]) -> ResponseInfo {
        let mut resp = ResponseInfo::new(200, body.to_string(), 10);
        for (k, v) in headers {
            resp.headers.insert(k.to_lowercase(), v.to_string());
        }
        resp
    }

    const ALL_HEADERS: &[(&str, &str)] = &[
        ("X-Content-Type-Options", "nosniff"),
        ("X-Frame-Options", "DENY"),
        ("Strict-Transport-Security", "max-age=31536000"),
    ];

    #[test]
    fn test_fully_configured_target_has_no_flags() {
        let resp = health_response(r#"{"status":"ok"}"#, ALL_HEADERS);
        assert!(collect_flags(&resp).is_empty());
    }

    #[test]
    fn test_debug_flag_detected() {
        let resp = health_response(r#"{"status":"ok","debug":true}"#, ALL_HEADERS);
        let flags = collect_flags(&resp);
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("Debug mode"));
    }

    #[test]
    fn test_debug_flag_as_string() {
        let resp = health_response(r#"{"debug":"true"}"#, ALL_HEADERS);
        assert_eq!(collect_flags(&resp).len(), 1);
    }

    #[test]
    fn test_missing_hsts_mentions_hsts() {
        let resp = health_response(
            r#"{"status":"ok"}"#,
            &[
                ("X-Content-Type-Options", "nosniff"),
                ("X-Frame-Options", "DENY"),
            ],
        );
        let flags = collect_flags(&resp);
        assert_eq!(flags.len(), 1);
        assert!(flags[0].contains("HSTS"));
    }

    #[test]
    fn test_all_headers_missing_all_flagged() {
        let resp = health_response(r#"{"status":"ok"}"#, &[]);
        assert_eq!(collect_flags(&resp).len(), 3);
    }
}
