mod config;
mod decide;
mod fetch;
mod html;
mod notify;
mod parser;
mod state;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::warn;

use config::Config;
use decide::Outcome;

#[derive(Parser)]
#[command(name = "bilet_watch", about = "Biletinial PROFESYONEL date watcher")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch both pages, evaluate, e-mail on a new maximum date (default)
    Check,
    /// Fetch one page and print the dates found; no state, no e-mail
    Scan {
        /// Page to scan (default: TARGET_URL)
        #[arg(long)]
        url: Option<String>,
    },
    /// Print the effective configuration and the persisted marker
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let default_filter = if config.debug { "bilet_watch=debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => check(&config).await,
        Commands::Scan { url } => scan(&config, url).await,
        Commands::Status => status(&config),
    }
}

/// One full watcher run: show page (fatal on failure), venue page
/// (best-effort), merge, decide, notify, persist.
async fn check(config: &Config) -> Result<()> {
    let year = Local::now().year();
    let client = fetch::build_client()?;

    let show_html = fetch::fetch_html(&client, &config.target_url).await?;
    let show_dates = parser::scan_dates(&html::to_text(&show_html), &config.allowed_months, year);

    let venue_dates = match fetch::fetch_html(&client, &config.venue_url).await {
        Ok(venue_html) => parser::scan_venue_block(&html::to_text(&venue_html), year),
        Err(e) => {
            warn!("venue page fetch failed, continuing without it: {:#}", e);
            Vec::new()
        }
    };

    let dates = decide::merge(&show_dates, &venue_dates);
    if dates.is_empty() {
        println!("Found date(s): (none)");
    } else {
        println!("Found date(s): {}", join_iso(&dates));
    }

    let last_notified = state::load(&config.state_path);
    match decide::decide(&dates, config.cutoff, last_notified.as_deref()) {
        Outcome::NoRelevantDates => {
            println!("No dates at or after {}.", config.cutoff);
        }
        Outcome::Unchanged(max_date) => {
            println!("Maximum date {} already notified; nothing to do.", max_date);
        }
        Outcome::Notify(alert) => {
            println!(
                "New maximum date {} ({} relevant date(s)).",
                alert.max_date,
                alert.relevant.len()
            );
            let subject = notify::render_subject(alert.max_date);
            let body = notify::render_body(&alert.relevant, &config.target_url);
            match &config.smtp {
                Some(smtp) => {
                    notify::send(smtp, &subject, &body).await?;
                    state::save(&config.state_path, alert.max_date)?;
                }
                // Skipped sends leave the marker alone so the date fires
                // again once SMTP is configured.
                None => warn!("SMTP settings incomplete; e-mail skipped, marker unchanged"),
            }
        }
    }
    Ok(())
}

/// Debug aid: run both extractors over a single page and print the results.
async fn scan(config: &Config, url: Option<String>) -> Result<()> {
    let year = Local::now().year();
    let url = url.unwrap_or_else(|| config.target_url.clone());
    let client = fetch::build_client()?;

    let text = html::to_text(&fetch::fetch_html(&client, &url).await?);
    let free_text = parser::scan_dates(&text, &config.allowed_months, year);
    let venue_block = parser::scan_venue_block(&text, year);

    println!("Page:             {}", url);
    println!("Free-text dates:  {}", format_list(&free_text));
    println!("Venue block dates: {}", format_list(&venue_block));
    Ok(())
}

fn status(config: &Config) -> Result<()> {
    println!("Target URL:     {}", config.target_url);
    println!("Venue URL:      {}", config.venue_url);
    println!("Cutoff date:    {}", config.cutoff);
    println!("Allowed months: {}", config.allowed_months.join(", "));
    println!("State path:     {}", config.state_path.display());
    match &config.smtp {
        Some(smtp) => println!(
            "SMTP:           {}:{} ({} -> {})",
            smtp.host, smtp.port, smtp.from, smtp.to
        ),
        None => println!("SMTP:           not configured"),
    }
    match state::load(&config.state_path) {
        Some(marker) => println!("Last notified:  {}", marker),
        None => println!("Last notified:  (none)"),
    }
    Ok(())
}

fn format_list(dates: &[NaiveDate]) -> String {
    if dates.is_empty() {
        "(none)".to_string()
    } else {
        join_iso(dates)
    }
}

fn join_iso(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
