use colored::Colorize;
use tabled::{Table, Tabled, settings::{Style, Modify, object::Rows, Alignment}};

use crate::models::{Finding, ProbeStatus, ProbeSummary, Severity};

pub struct ConsoleReporter;

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Check")]
    check: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_table(&self, findings: &[Finding]) {
        let rows: Vec<TableRow> = findings
            .iter()
            .map(|finding| {
                let severity = match finding.severity {
                    Severity::Critical => "CRITICAL".red().bold().to_string(),
                    Severity::High => "HIGH".red().to_string(),
                    Severity::Medium => "MEDIUM".yellow().to_string(),
                    Severity::Low => "LOW".blue().to_string(),
                };

                let status = match finding.status {
                    ProbeStatus::Pass => "PASS".green().to_string(),
                    ProbeStatus::Fail => "FAIL".red().bold().to_string(),
                    ProbeStatus::Warning => "WARN".yellow().to_string(),
                };

                TableRow {
                    check: finding.vulnerability.title().to_string(),
                    severity,
                    status,
                }
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        println!("\n{}", table);
    }

    pub fn print_summary(&self, findings: &[Finding]) {
        let summary = ProbeSummary::from_findings(findings);

        println!("\n{}", "Summary".bold().underline());
        println!("{} checks executed", summary.total);
        println!("  {}: {}", "PASS".green(), summary.passed);
        println!("  {}: {}", "FAIL".red(), summary.failed);
        if summary.warnings > 0 {
            println!(
                "  {}: {} (inconclusive, rerun or investigate manually)",
                "WARN".yellow(),
                summary.warnings
            );
        }
        println!();
    }

    pub fn print_details(&self, findings: &[Finding]) {
        let failed: Vec<_> = findings.iter().filter(|f| f.is_fail()).collect();

        if failed.is_empty() {
            return;
        }

        println!("\n{}", "Findings".bold().underline());

        for finding in failed {
            let severity_str = match finding.severity {
                Severity::Critical => "CRITICAL".red().bold().to_string(),
                Severity::High => "HIGH".red().to_string(),
                Severity::Medium => "MEDIUM".yellow().to_string(),
                Severity::Low => "LOW".blue().to_string(),
            };

            println!(
                "\n[{}] {}",
                severity_str,
                finding.vulnerability.title().white().bold()
            );
            println!("  → {}", finding.details);

            if let Some(remediation) = &finding.remediation {
                println!("    {}: {}", "Fix".cyan(), remediation);
            }
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
