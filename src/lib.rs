pub mod checks;
pub mod cli;
pub mod http;
pub mod models;
pub mod prober;
pub mod reporter;

pub use models::{
    ConfigError, Finding, ProbeStatus, ProbeSummary, ProberConfig, Severity, VulnClass,
};
pub use prober::Prober;
pub use reporter::{ConsoleReporter, HtmlExporter, JsonExporter, MarkdownReporter};
