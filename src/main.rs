use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;

use vulnprobe::cli::{Cli, Commands};
use vulnprobe::{
    ConsoleReporter, HtmlExporter, JsonExporter, MarkdownReporter, Prober, ProberConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            url,
            token,
            timeout,
            output,
            report,
            verbose,
        } => {
            let mut config = ProberConfig::new(url)?.with_timeout_ms(timeout);
            if let Some(token) = token {
                config = config.with_token(token);
            }

            println!("{} {}", "Probing".bold(), config.base_url.cyan());

            let prober = Prober::new(config)?;
            let findings = prober.run_all_checks(verbose).await;

            let reporter = ConsoleReporter::new();
            reporter.print_table(&findings);
            reporter.print_details(&findings);
            reporter.print_summary(&findings);

            if let Some(path) = output {
                JsonExporter::export(&findings, &path)?;
                println!("Findings written to {}", path.cyan());
            }
            if let Some(path) = report {
                MarkdownReporter::export(&findings, &path)?;
                println!("Report written to {}", path.cyan());
            }

            // Findings are data, not process errors: exit 0 either way.
            Ok(())
        }

        Commands::Report {
            input,
            format,
            output,
        } => {
            let findings = JsonExporter::load(&input)?;

            match format.as_str() {
                "markdown" | "md" => match output {
                    Some(path) => {
                        MarkdownReporter::export(&findings, &path)?;
                        println!("Report written to {}", path.cyan());
                    }
                    None => {
                        print!("{}", MarkdownReporter::render(&findings, chrono::Utc::now()));
                    }
                },
                "html" => {
                    let path = output.unwrap_or_else(|| "report.html".to_string());
                    HtmlExporter::export(&findings, &path)?;
                    println!("Report written to {}", path.cyan());
                }
                "console" => {
                    let reporter = ConsoleReporter::new();
                    reporter.print_table(&findings);
                    reporter.print_details(&findings);
                    reporter.print_summary(&findings);
                }
                other => bail!("unknown report format '{}'", other),
            }

            Ok(())
        }
    }
}
