use anyhow::Result;
use regex::Regex;

use super::{Payloads, remediation};
use crate::http::HttpClient;
use crate::models::{Finding, ProberConfig, VulnClass};

const CLASS: VulnClass = VulnClass::SensitiveDataExposure;

/// Returns the sensitive patterns matched by the body text, labeled by
/// their pattern source without the case-insensitivity prefix.
pub fn scan_body(text: &str) -> Vec<String> {
    Payloads::SENSITIVE_PATTERNS
        .iter()
        .filter(|pattern| Regex::new(pattern).unwrap().is_match(text))
        .map(|pattern| pattern.trim_start_matches("(?i)").to_string())
        .collect()
}

/// Scans the profile endpoint body for sensitive field patterns and
/// independently checks that the target is served over TLS.
pub async fn run(client: &HttpClient, config: &ProberConfig) -> Result<Finding> {
    let mut flags: Vec<String> = Vec::new();

    if !config.is_https() {
        flags.push("Target base URL is not HTTPS, transport is unencrypted".to_string());
    }

    let resp = client.get("/api/users/profile", &[]).await;

    if resp.is_error() {
        if flags.is_empty() {
            return Ok(Finding::warning(
                CLASS,
                format!(
                    "Could not fetch /api/users/profile: {}",
                    resp.error.unwrap_or_default()
                ),
            ));
        }
    } else {
        for matched in scan_body(&resp.text) {
            flags.push(format!(
                "Profile response matches sensitive pattern '{}'",
                matched
            ));
        }
    }

    if flags.is_empty() {
        Ok(Finding::pass(
            CLASS,
            "No sensitive field patterns in profile response; transport uses HTTPS",
        ))
    } else {
        Ok(Finding::fail(CLASS, flags.join("; "), remediation(CLASS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_field_detected() {
        let matches = scan_body(r#"{"email":"a@b.com","password":"hunter2"}"#);
        assert_eq!(matches, vec!["password"]);
    }

    #[test]
    fn test_case_and_separator_variants() {
        let matches = scan_body(r#"{"Credit_Card":"4111...","API-KEY":"x","SSN":"123"}"#);
        assert!(matches.contains(&"ssn".to_string()));
        assert!(matches.contains(&"credit.?card".to_string()));
        assert!(matches.contains(&"api.?key".to_string()));
    }

    #[test]
    fn test_clean_body_has_no_matches() {
        assert!(scan_body(r#"{"email":"a@b.com","name":"Ada"}"#).is_empty());
    }
}
