use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;

use crate::models::{Finding, ProbeSummary, Severity};

pub struct MarkdownReporter;

const SEVERITY_SECTIONS: &[(Severity, &str)] = &[
    (Severity::Critical, "Critical"),
    (Severity::High, "High"),
    (Severity::Medium, "Medium"),
];

impl MarkdownReporter {
    /// Pure function of (findings, timestamp): rendering the same inputs
    /// twice yields byte-identical output.
    pub fn render(findings: &[Finding], generated_at: DateTime<Utc>) -> String {
        let summary = ProbeSummary::from_findings(findings);
        let mut out = String::new();

        out.push_str("# Security Probe Report\n\n");
        out.push_str(&format!(
            "**Date:** {}\n\n",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!("**Total checks:** {}\n", summary.total));
        out.push_str(&format!("**Passed:** {}\n", summary.passed));
        out.push_str(&format!("**Failed:** {}\n", summary.failed));
        out.push_str(&format!("**Warnings:** {}\n", summary.warnings));

        if summary.warnings > 0 {
            out.push_str(
                "\n> Warnings are inconclusive results, not passes. Rerun the probe or investigate manually.\n",
            );
        }

        for (severity, heading) in SEVERITY_SECTIONS {
            out.push_str(&format!("\n## {} Severity\n\n", heading));

            let bucket: Vec<&Finding> = findings
                .iter()
                .filter(|f| f.is_fail() && f.severity == *severity)
                .collect();

            if bucket.is_empty() {
                out.push_str("No failed checks.\n");
                continue;
            }

            for finding in bucket {
                out.push_str(&format!("### {}\n\n", finding.vulnerability.title()));
                out.push_str(&format!("{}\n", finding.details));
                if let Some(remediation) = &finding.remediation {
                    out.push_str(&format!("\n**Remediation:** {}\n", remediation));
                }
                out.push('\n');
            }
        }

        out
    }

    pub fn export(findings: &[Finding], path: &str) -> Result<()> {
        let report = Self::render(findings, Utc::now());
        fs::write(path, report).with_context(|| format!("Failed to write to {}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VulnClass;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn full_run() -> Vec<Finding> {
        VulnClass::ALL
            .iter()
            .map(|&class| Finding::pass(class, "ok"))
            .collect()
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut findings = full_run();
        findings[0] = Finding::fail(VulnClass::Injection, "500 on payload", "use prepared statements");

        let a = MarkdownReporter::render(&findings, fixed_time());
        let b = MarkdownReporter::render(&findings, fixed_time());
        assert_eq!(a, b);
    }

    #[test]
    fn test_summary_counts_sum_to_total() {
        let mut findings = full_run();
        findings[3] = Finding::warning(VulnClass::XmlExternalEntities, "unreachable");
        findings[6] = Finding::fail(VulnClass::CrossSiteScripting, "reflected", "escape output");

        let report = MarkdownReporter::render(&findings, fixed_time());
        assert!(report.contains("**Total checks:** 10"));
        assert!(report.contains("**Passed:** 8"));
        assert!(report.contains("**Failed:** 1"));
        assert!(report.contains("**Warnings:** 1"));
    }

    #[test]
    fn test_failed_finding_listed_under_its_severity() {
        let mut findings = full_run();
        findings[5] = Finding::fail(
            VulnClass::SecurityMisconfiguration,
            "Missing Strict-Transport-Security (HSTS) header",
            "set the header",
        );

        let report = MarkdownReporter::render(&findings, fixed_time());
        let medium_section = report.split("## Medium Severity").nth(1).unwrap();
        assert!(medium_section.contains("Security Misconfiguration"));
        assert!(medium_section.contains("HSTS"));
        assert!(medium_section.contains("**Remediation:** set the header"));
    }

    #[test]
    fn test_low_severity_fail_never_detailed() {
        let mut findings = full_run();
        findings[8] = Finding::fail(
            VulnClass::VulnerableComponents,
            "outdated dependency",
            "upgrade",
        );

        let report = MarkdownReporter::render(&findings, fixed_time());
        assert!(report.contains("**Failed:** 1"));
        assert!(!report.contains("outdated dependency"));
    }

    #[test]
    fn test_pass_and_warning_never_detailed() {
        let mut findings = full_run();
        findings[0] = Finding::warning(VulnClass::Injection, "target unreachable");

        let report = MarkdownReporter::render(&findings, fixed_time());
        assert!(!report.contains("target unreachable"));
        assert!(report.contains("No failed checks."));
    }

    #[test]
    fn test_all_warnings_summary() {
        let findings: Vec<Finding> = VulnClass::ALL
            .iter()
            .map(|&class| Finding::warning(class, "unreachable"))
            .collect();

        let report = MarkdownReporter::render(&findings, fixed_time());
        assert!(report.contains("**Passed:** 0"));
        assert!(report.contains("**Failed:** 0"));
        assert!(report.contains("**Warnings:** 10"));
        assert!(report.contains("inconclusive"));
    }
}
