use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::checks;
use crate::http::HttpClient;
use crate::models::{Finding, ProberConfig, VulnClass};

/// Runs the ten-check battery against one target. Checks execute strictly
/// in order: the logging check observes the side effects of its own
/// preceding login attempts.
pub struct Prober {
    client: HttpClient,
    config: ProberConfig,
}

impl Prober {
    pub fn new(config: ProberConfig) -> Result<Self> {
        let client = HttpClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Always returns exactly one finding per check; a check that cannot
    /// complete yields a WARNING instead of aborting the run.
    pub async fn run_all_checks(&self, verbose: bool) -> Vec<Finding> {
        let pb = self.create_progress_bar(VulnClass::ALL.len(), verbose);
        let mut findings = Vec::with_capacity(VulnClass::ALL.len());

        for class in VulnClass::ALL {
            pb.set_message(class.title());
            findings.push(self.run_check(class).await);
            pb.inc(1);
        }

        pb.finish_with_message("Probe complete");
        findings
    }

    /// Single-check entry point for callers that want to stop early.
    pub async fn run_check(&self, class: VulnClass) -> Finding {
        let result = match class {
            VulnClass::Injection => checks::injection::run(&self.client).await,
            VulnClass::BrokenAuthentication => checks::authentication::run(&self.client).await,
            VulnClass::SensitiveDataExposure => {
                checks::data_exposure::run(&self.client, &self.config).await
            }
            VulnClass::XmlExternalEntities => checks::xxe::run(&self.client).await,
            VulnClass::BrokenAccessControl => checks::access_control::run(&self.client).await,
            VulnClass::SecurityMisconfiguration => checks::misconfig::run(&self.client).await,
            VulnClass::CrossSiteScripting => checks::xss::run(&self.client).await,
            VulnClass::InsecureDeserialization => checks::deserialization::run(&self.client).await,
            VulnClass::VulnerableComponents => checks::components::run(),
            VulnClass::InsufficientLogging => checks::logging::run(&self.client).await,
        };

        match result {
            Ok(finding) => finding,
            Err(e) => Finding::warning(class, format!("Check did not complete: {}", e)),
        }
    }

    fn create_progress_bar(&self, total: usize, verbose: bool) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);

        if verbose {
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .expect("Invalid progress bar template")
                    .progress_chars("#>-"),
            );
        } else {
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")
                    .expect("Invalid progress bar template")
                    .progress_chars("#>-"),
            );
        }

        pb
    }
}
