use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vulnprobe")]
#[command(version, about = "OWASP Top-10 vulnerability prober for HTTP APIs")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full ten-check battery against a target
    Run {
        #[arg(short, long)]
        url: String,

        #[arg(long)]
        token: Option<String>,

        /// Per-request timeout in milliseconds
        #[arg(short, long, default_value = "10000")]
        timeout: u64,

        /// Write findings as JSON
        #[arg(short, long)]
        output: Option<String>,

        /// Write a Markdown report
        #[arg(long)]
        report: Option<String>,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Render a report from previously exported findings
    Report {
        #[arg(short, long)]
        input: String,

        #[arg(short, long, default_value = "markdown")]
        format: String,

        #[arg(short, long)]
        output: Option<String>,
    },
}
