use anyhow::Result;

use crate::models::{Finding, VulnClass};

const CLASS: VulnClass = VulnClass::VulnerableComponents;

/// Dependency auditing needs manifest access the prober does not have, so
/// this check is informational only.
pub fn run() -> Result<Finding> {
    Ok(Finding::pass(
        CLASS,
        "Not probed over HTTP; audit dependency manifests with SCA tooling such as npm audit, cargo audit or OWASP Dependency-Check",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProbeStatus, Severity};

    #[test]
    fn test_always_informational_pass() {
        let finding = run().unwrap();
        assert_eq!(finding.status, ProbeStatus::Pass);
        assert_eq!(finding.severity, Severity::Low);
        assert!(finding.remediation.is_none());
    }
}
