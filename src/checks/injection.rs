use anyhow::Result;

use super::{Payloads, remediation};
use crate::http::HttpClient;
use crate::models::{Finding, VulnClass};

const CLASS: VulnClass = VulnClass::Injection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionSignal {
    /// 500 from the target: the payload likely reached a query layer.
    Vulnerable,
    /// 400/422: input validation caught the payload.
    Validated,
    Inconclusive,
}

pub fn classify_status(status: u16) -> InjectionSignal {
    match status {
        500 => InjectionSignal::Vulnerable,
        400 | 422 => InjectionSignal::Validated,
        _ => InjectionSignal::Inconclusive,
    }
}

/// Sends each SQL payload as the `id` query parameter, stopping at the
/// first 500.
pub async fn run(client: &HttpClient) -> Result<Finding> {
    for &payload in Payloads::SQL_INJECTION {
        let resp = client.get("/api/users", &[("id", payload)]).await;

        if resp.is_error() {
            return Ok(Finding::warning(
                CLASS,
                format!(
                    "Could not probe /api/users: {}",
                    resp.error.unwrap_or_default()
                ),
            ));
        }

        if classify_status(resp.status) == InjectionSignal::Vulnerable {
            return Ok(Finding::fail(
                CLASS,
                format!(
                    "Server returned 500 for payload `{}`; the input likely reached the query layer unsanitized",
                    payload
                ),
                remediation(CLASS),
            ));
        }
    }

    Ok(Finding::pass(
        CLASS,
        "No SQL payload triggered a server error on /api/users",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_500_is_vulnerable() {
        assert_eq!(classify_status(500), InjectionSignal::Vulnerable);
    }

    #[test]
    fn test_validation_statuses() {
        assert_eq!(classify_status(400), InjectionSignal::Validated);
        assert_eq!(classify_status(422), InjectionSignal::Validated);
    }

    #[test]
    fn test_other_statuses_inconclusive() {
        assert_eq!(classify_status(200), InjectionSignal::Inconclusive);
        assert_eq!(classify_status(404), InjectionSignal::Inconclusive);
        assert_eq!(classify_status(503), InjectionSignal::Inconclusive);
    }

    #[test]
    fn test_drop_table_payload_in_table() {
        assert!(
            Payloads::SQL_INJECTION
                .iter()
                .any(|p| p.contains("DROP TABLE"))
        );
    }
}
