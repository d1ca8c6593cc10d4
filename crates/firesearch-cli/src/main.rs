//! Firesearch CLI - one-shot web search
//!
//! Runs a single Firecrawl search and prints the normalized results.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use firesearch::{load_dotenv, FirecrawlSearchEngine, SearchItem, SearchRequest, WebSearchEngine};

#[derive(Parser)]
#[command(name = "firesearch")]
#[command(about = "Firesearch CLI - Firecrawl web search", long_about = None)]
#[command(version)]
struct Cli {
    /// Search query
    #[arg(default_value = "OpenAI GPT-4")]
    query: String,

    /// Max results
    #[arg(short = 'n', long, default_value = "5")]
    limit: u32,

    /// Only return results from this year
    #[arg(short, long)]
    year: Option<i32>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log configuration loading and request details
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    load_dotenv();

    let engine = FirecrawlSearchEngine::from_env();

    let mut request = SearchRequest::new(cli.query).with_result_count(cli.limit);
    if let Some(year) = cli.year {
        request = request.with_year_filter(year);
    }

    tracing::info!("🔍 Searching {} for '{}'", engine.name(), request.query);

    let start = Instant::now();
    let results = engine
        .perform_search(&request)
        .await
        .with_context(|| format!("Search failed for '{}'", request.query))?;
    let elapsed = start.elapsed();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }

    println!("{} seconds elapsed for search", elapsed.as_secs_f64());

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_results(results: &[SearchItem]) {
    if results.is_empty() {
        println!("{}", "No results.".dimmed());
        return;
    }

    for item in results {
        println!("{} {}", "Title:".bold(), item.title.cyan());
        println!("{} {}", "URL:".bold(), item.url);
        println!("{} {}", "Description:".bold(), item.description.dimmed());
        println!();
    }
}
