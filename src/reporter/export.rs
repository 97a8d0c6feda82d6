use anyhow::{Result, Context};
use std::fs;
use tera::{Tera, Context as TeraContext};
use chrono::Utc;

use crate::models::{Finding, ProbeStatus, ProbeSummary, Severity};

pub struct JsonExporter;

impl JsonExporter {
    pub fn export(findings: &[Finding], path: &str) -> Result<()> {
        let output = ExportData {
            scan_time: Utc::now().to_rfc3339(),
            findings: findings.to_vec(),
            summary: ProbeSummary::from_findings(findings),
        };

        let json = serde_json::to_string_pretty(&output)?;
        fs::write(path, json).with_context(|| format!("Failed to write to {}", path))?;
        Ok(())
    }

    pub fn load(path: &str) -> Result<Vec<Finding>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?;

        let data: ExportData = serde_json::from_str(&content)?;
        Ok(data.findings)
    }
}

pub struct HtmlExporter;

impl HtmlExporter {
    pub fn export(findings: &[Finding], path: &str) -> Result<()> {
        let template = Self::get_template();
        let mut tera = Tera::default();
        tera.add_raw_template("report", &template)?;

        let summary = ProbeSummary::from_findings(findings);

        let mut context = TeraContext::new();
        context.insert("scan_time", &Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string());
        context.insert("total", &summary.total);
        context.insert("passed", &summary.passed);
        context.insert("failed", &summary.failed);
        context.insert("warnings", &summary.warnings);

        let rows: Vec<HtmlRow> = findings
            .iter()
            .map(|f| HtmlRow {
                check: f.vulnerability.title().to_string(),
                severity: f.severity.to_string(),
                severity_class: Self::severity_class(f.severity),
                status: Self::status_label(f.status),
                status_class: Self::status_class(f.status),
                details: f.details.clone(),
                remediation: f.remediation.clone().unwrap_or_default(),
            })
            .collect();

        context.insert("rows", &rows);

        let html = tera.render("report", &context)?;
        fs::write(path, html).with_context(|| format!("Failed to write to {}", path))?;
        Ok(())
    }

    fn severity_class(severity: Severity) -> String {
        match severity {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }.to_string()
    }

    fn status_label(status: ProbeStatus) -> String {
        match status {
            ProbeStatus::Pass => "PASS",
            ProbeStatus::Fail => "FAIL",
            ProbeStatus::Warning => "WARNING",
        }.to_string()
    }

    fn status_class(status: ProbeStatus) -> String {
        match status {
            ProbeStatus::Pass => "pass",
            ProbeStatus::Fail => "fail",
            ProbeStatus::Warning => "warning",
        }.to_string()
    }

    fn get_template() -> String {
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Vulnprobe Report</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #0d1117; color: #c9d1d9; line-height: 1.6; }
        .container { max-width: 1100px; margin: 0 auto; padding: 2rem; }
        h1 { color: #58a6ff; margin-bottom: 0.5rem; }
        .subtitle { color: #8b949e; margin-bottom: 2rem; }
        .summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
        .stat { background: #161b22; border: 1px solid #30363d; border-radius: 6px; padding: 1rem; text-align: center; }
        .stat-value { font-size: 2rem; font-weight: bold; }
        .stat-label { color: #8b949e; font-size: 0.875rem; }
        .pass .stat-value { color: #3fb950; }
        .fail .stat-value { color: #f85149; }
        .warning .stat-value { color: #d29922; }
        table { width: 100%; border-collapse: collapse; background: #161b22; border: 1px solid #30363d; border-radius: 6px; overflow: hidden; }
        th, td { padding: 0.75rem 1rem; text-align: left; border-bottom: 1px solid #30363d; }
        th { background: #21262d; color: #c9d1d9; font-weight: 600; }
        tr:hover { background: #21262d; }
        .badge { padding: 0.25rem 0.5rem; border-radius: 4px; font-size: 0.75rem; font-weight: 600; }
        .badge.critical { background: #f8514933; color: #f85149; }
        .badge.high { background: #f8514933; color: #f85149; }
        .badge.medium { background: #d2992233; color: #d29922; }
        .badge.low { background: #58a6ff33; color: #58a6ff; }
        .badge.pass { background: #3fb95033; color: #3fb950; }
        .badge.fail { background: #f8514933; color: #f85149; }
        .badge.warning { background: #d2992233; color: #d29922; }
        .details { font-size: 0.875rem; color: #8b949e; margin-top: 0.5rem; }
        .remediation { color: #f0883e; font-weight: 500; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Vulnprobe Report</h1>
        <p class="subtitle">Generated: {{ scan_time }}</p>

        <div class="summary">
            <div class="stat">
                <div class="stat-value">{{ total }}</div>
                <div class="stat-label">Checks</div>
            </div>
            <div class="stat pass">
                <div class="stat-value">{{ passed }}</div>
                <div class="stat-label">Passed</div>
            </div>
            <div class="stat fail">
                <div class="stat-value">{{ failed }}</div>
                <div class="stat-label">Failed</div>
            </div>
            <div class="stat warning">
                <div class="stat-value">{{ warnings }}</div>
                <div class="stat-label">Warnings</div>
            </div>
        </div>

        <table>
            <thead>
                <tr>
                    <th>Check</th>
                    <th>Severity</th>
                    <th>Status</th>
                </tr>
            </thead>
            <tbody>
                {% for row in rows %}
                <tr>
                    <td>
                        {{ row.check }}
                        <div class="details">
                            {{ row.details }}
                            {% if row.remediation %}
                            <div><span class="remediation">Fix:</span> {{ row.remediation }}</div>
                            {% endif %}
                        </div>
                    </td>
                    <td><span class="badge {{ row.severity_class }}">{{ row.severity }}</span></td>
                    <td><span class="badge {{ row.status_class }}">{{ row.status }}</span></td>
                </tr>
                {% endfor %}
            </tbody>
        </table>
    </div>
</body>
</html>"#.to_string()
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct ExportData {
    scan_time: String,
    findings: Vec<Finding>,
    summary: ProbeSummary,
}

#[derive(serde::Serialize)]
struct HtmlRow {
    check: String,
    severity: String,
    severity_class: String,
    status: String,
    status_class: String,
    details: String,
    remediation: String,
}
