use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn numeric_value(&self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbeStatus {
    Pass,
    Fail,
    Warning,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProbeStatus::Pass => "PASS",
            ProbeStatus::Fail => "FAIL",
            ProbeStatus::Warning => "WARNING",
        };
        write!(f, "{}", s)
    }
}

/// The ten OWASP Top-10 categories covered by the prober, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VulnClass {
    Injection,
    BrokenAuthentication,
    SensitiveDataExposure,
    XmlExternalEntities,
    BrokenAccessControl,
    SecurityMisconfiguration,
    CrossSiteScripting,
    InsecureDeserialization,
    VulnerableComponents,
    InsufficientLogging,
}

impl VulnClass {
    pub const ALL: [VulnClass; 10] = [
        VulnClass::Injection,
        VulnClass::BrokenAuthentication,
        VulnClass::SensitiveDataExposure,
        VulnClass::XmlExternalEntities,
        VulnClass::BrokenAccessControl,
        VulnClass::SecurityMisconfiguration,
        VulnClass::CrossSiteScripting,
        VulnClass::InsecureDeserialization,
        VulnClass::VulnerableComponents,
        VulnClass::InsufficientLogging,
    ];

    /// Severity is fixed per category, not computed from responses.
    pub fn severity(&self) -> Severity {
        match self {
            VulnClass::Injection => Severity::Critical,
            VulnClass::BrokenAuthentication => Severity::Critical,
            VulnClass::SensitiveDataExposure => Severity::High,
            VulnClass::XmlExternalEntities => Severity::High,
            VulnClass::BrokenAccessControl => Severity::Critical,
            VulnClass::SecurityMisconfiguration => Severity::Medium,
            VulnClass::CrossSiteScripting => Severity::High,
            VulnClass::InsecureDeserialization => Severity::High,
            VulnClass::VulnerableComponents => Severity::Low,
            VulnClass::InsufficientLogging => Severity::Medium,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            VulnClass::Injection => "SQL Injection",
            VulnClass::BrokenAuthentication => "Broken Authentication",
            VulnClass::SensitiveDataExposure => "Sensitive Data Exposure",
            VulnClass::XmlExternalEntities => "XML External Entities (XXE)",
            VulnClass::BrokenAccessControl => "Broken Access Control",
            VulnClass::SecurityMisconfiguration => "Security Misconfiguration",
            VulnClass::CrossSiteScripting => "Cross-Site Scripting (XSS)",
            VulnClass::InsecureDeserialization => "Insecure Deserialization",
            VulnClass::VulnerableComponents => "Using Components with Known Vulnerabilities",
            VulnClass::InsufficientLogging => "Insufficient Logging & Monitoring",
        }
    }
}

impl fmt::Display for VulnClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Outcome of one vulnerability check. Every check produces exactly one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub vulnerability: VulnClass,
    pub severity: Severity,
    pub status: ProbeStatus,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl Finding {
    pub fn pass(vulnerability: VulnClass, details: impl Into<String>) -> Self {
        Self {
            vulnerability,
            severity: vulnerability.severity(),
            status: ProbeStatus::Pass,
            details: details.into(),
            remediation: None,
        }
    }

    pub fn fail(
        vulnerability: VulnClass,
        details: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Self {
        Self {
            vulnerability,
            severity: vulnerability.severity(),
            status: ProbeStatus::Fail,
            details: details.into(),
            remediation: Some(remediation.into()),
        }
    }

    pub fn warning(vulnerability: VulnClass, details: impl Into<String>) -> Self {
        Self {
            vulnerability,
            severity: vulnerability.severity(),
            status: ProbeStatus::Warning,
            details: details.into(),
            remediation: None,
        }
    }

    pub fn is_fail(&self) -> bool {
        self.status == ProbeStatus::Fail
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub critical_count: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
}

impl ProbeSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self {
            total: findings.len(),
            passed: 0,
            failed: 0,
            warnings: 0,
            critical_count: 0,
            high_count: 0,
            medium_count: 0,
            low_count: 0,
        };

        for finding in findings {
            match finding.status {
                ProbeStatus::Pass => summary.passed += 1,
                ProbeStatus::Warning => summary.warnings += 1,
                ProbeStatus::Fail => {
                    summary.failed += 1;
                    match finding.severity {
                        Severity::Critical => summary.critical_count += 1,
                        Severity::High => summary.high_count += 1,
                        Severity::Medium => summary.medium_count += 1,
                        Severity::Low => summary.low_count += 1,
                    }
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_classes_distinct_and_ordered() {
        assert_eq!(VulnClass::ALL.len(), 10);
        let mut seen = std::collections::HashSet::new();
        for class in VulnClass::ALL {
            assert!(seen.insert(class));
        }
        assert_eq!(VulnClass::ALL[0], VulnClass::Injection);
        assert_eq!(VulnClass::ALL[9], VulnClass::InsufficientLogging);
    }

    #[test]
    fn test_fixed_severity_table() {
        assert_eq!(VulnClass::Injection.severity(), Severity::Critical);
        assert_eq!(VulnClass::BrokenAccessControl.severity(), Severity::Critical);
        assert_eq!(VulnClass::CrossSiteScripting.severity(), Severity::High);
        assert_eq!(VulnClass::SecurityMisconfiguration.severity(), Severity::Medium);
        assert_eq!(VulnClass::VulnerableComponents.severity(), Severity::Low);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical.numeric_value() > Severity::High.numeric_value());
        assert!(Severity::High.numeric_value() > Severity::Medium.numeric_value());
        assert!(Severity::Medium.numeric_value() > Severity::Low.numeric_value());
    }

    #[test]
    fn test_remediation_only_on_fail() {
        let pass = Finding::pass(VulnClass::Injection, "no payload triggered an error");
        assert!(pass.remediation.is_none());

        let warn = Finding::warning(VulnClass::Injection, "target unreachable");
        assert!(warn.remediation.is_none());

        let fail = Finding::fail(VulnClass::Injection, "500 on payload", "use prepared statements");
        assert_eq!(fail.remediation.as_deref(), Some("use prepared statements"));
        assert_eq!(fail.severity, Severity::Critical);
    }

    #[test]
    fn test_summary_counts_sum_to_total() {
        let findings = vec![
            Finding::pass(VulnClass::Injection, "ok"),
            Finding::fail(VulnClass::CrossSiteScripting, "reflected", "escape output"),
            Finding::fail(VulnClass::VulnerableComponents, "outdated", "upgrade"),
            Finding::warning(VulnClass::InsufficientLogging, "log endpoint unreachable"),
        ];

        let summary = ProbeSummary::from_findings(&findings);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed + summary.failed + summary.warnings, summary.total);
        assert_eq!(summary.high_count, 1);
        assert_eq!(summary.low_count, 1);
        assert_eq!(summary.critical_count, 0);
    }

    #[test]
    fn test_finding_serde_round_trip() {
        let finding = Finding::fail(VulnClass::BrokenAuthentication, "session reused", "rotate ids");
        let json = serde_json::to_string(&finding).unwrap();
        let back: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(back.vulnerability, VulnClass::BrokenAuthentication);
        assert_eq!(back.status, ProbeStatus::Fail);
        assert_eq!(back.severity, Severity::Critical);
    }
}
