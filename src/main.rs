mod fetch;
mod model;
mod parser;

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gfp_scraper", about = "Country military-strength profile scraper for globalfirepower.com")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one country's profile page and print it as JSON
    Search {
        /// Country slug, e.g. "united-states-of-america"
        country_id: String,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
        /// Site root to fetch from
        #[arg(long, env = "GFP_BASE_URL", default_value = fetch::BASE_URL)]
        base_url: String,
        /// Request timeout in seconds
        #[arg(short, long, default_value_t = fetch::DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },
    /// Extract a previously saved profile page
    Parse {
        /// Path to the saved HTML file
        file: String,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// List the panel headers found in a saved profile page
    Panels {
        /// Path to the saved HTML file
        file: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            country_id,
            pretty,
            base_url,
            timeout,
        } => {
            let config = fetch::FetchConfig {
                base_url,
                timeout: Duration::from_secs(timeout),
            };

            let pb = indicatif::ProgressBar::new_spinner();
            pb.set_style(indicatif::ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            pb.set_message(format!("Fetching {}...", country_id));
            pb.enable_steady_tick(Duration::from_millis(100));
            let report = fetch::search(&config, &country_id).await;
            pb.finish_and_clear();

            match report {
                Some(report) => print_json(&report, pretty),
                None => {
                    println!("[]");
                    Ok(())
                }
            }
        }
        Commands::Parse { file, pretty } => {
            let html = std::fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file))?;
            match parser::process_page(&html) {
                Ok(report) => print_json(&report, pretty),
                Err(e) => {
                    tracing::warn!("{}: {}", file, e);
                    println!("[]");
                    Ok(())
                }
            }
        }
        Commands::Panels { file } => {
            let html = std::fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file))?;
            let document = scraper::Html::parse_document(&html);
            let panels = parser::panels::discover_panels(&document);
            if panels.is_empty() {
                println!("No panels found.");
                return Ok(());
            }

            println!("{:>3} | {:<20} | {:<20} | {:<7}", "#", "Panel", "Output key", "Content");
            println!("{}", "-".repeat(60));
            for (i, p) in panels.iter().enumerate() {
                let output = p.kind.map(|k| k.output_key()).unwrap_or("(skipped)");
                let content = if p.content.is_some() { "yes" } else { "missing" };
                println!("{:>3} | {:<20} | {:<20} | {:<7}", i + 1, p.key, output, content);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn print_json(report: &model::Report, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{}", json);
    Ok(())
}
