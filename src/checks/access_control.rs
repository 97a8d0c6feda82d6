use anyhow::Result;

use super::remediation;
use crate::http::HttpClient;
use crate::models::{Finding, ProbeStatus, ResponseInfo, VulnClass};

const CLASS: VulnClass = VulnClass::BrokenAccessControl;

/// Identifier unlikely to belong to the probing principal.
const FOREIGN_USER_ID: &str = "999";

/// 200 on a foreign resource is proof, 403/404 is correct enforcement,
/// anything else is inconclusive.
pub fn classify(resp: &ResponseInfo) -> ProbeStatus {
    if resp.is_error() {
        return ProbeStatus::Warning;
    }
    match resp.status {
        200 => ProbeStatus::Fail,
        403 | 404 => ProbeStatus::Pass,
        _ => ProbeStatus::Warning,
    }
}

pub async fn run(client: &HttpClient) -> Result<Finding> {
    let path = format!("/api/users/{}/profile", FOREIGN_USER_ID);
    let resp = client.get(&path, &[]).await;

    let finding = match classify(&resp) {
        ProbeStatus::Fail => Finding::fail(
            CLASS,
            format!("Fetched another user's profile ({}) without authorization", path),
            remediation(CLASS),
        ),
        ProbeStatus::Pass => Finding::pass(
            CLASS,
            format!("Foreign profile request denied with {}", resp.status),
        ),
        ProbeStatus::Warning => Finding::warning(
            CLASS,
            match resp.error {
                Some(err) => format!("Could not probe {}: {}", path, err),
                None => format!("Unexpected status {} from {}", resp.status, path),
            },
        ),
    };

    Ok(finding)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16) -> ResponseInfo {
        ResponseInfo::new(status, String::new(), 10)
    }

    #[test]
    fn test_foreign_resource_served_fails() {
        assert_eq!(classify(&mock_response(200)), ProbeStatus::Fail);
    }

    #[test]
    fn test_denied_statuses_pass() {
        assert_eq!(classify(&mock_response(403)), ProbeStatus::Pass);
        assert_eq!(classify(&mock_response(404)), ProbeStatus::Pass);
    }

    #[test]
    fn test_other_statuses_inconclusive() {
        assert_eq!(classify(&mock_response(401)), ProbeStatus::Warning);
        assert_eq!(classify(&mock_response(500)), ProbeStatus::Warning);
    }

    #[test]
    fn test_transport_error_inconclusive() {
        let resp = ResponseInfo::error("connection refused".to_string());
        assert_eq!(classify(&resp), ProbeStatus::Warning);
    }
}
