//! CLI administration tool for tinylink.
//!
//! Provides commands for viewing statistics, listing mappings and performing
//! database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # List the 20 newest mappings
//! cargo run --bin admin -- urls --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME`

use tinylink::config::{Config, mask_connection_string};
use tinylink::domain::repositories::UrlRepository;
use tinylink::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show total URLs and clicks
    Stats,

    /// List short links, newest first
    Urls {
        /// Maximum number of rows to print
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&config.database_url)
            )
        })?;

    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Stats => handle_stats(repo).await?,
        Commands::Urls { limit } => list_urls(repo, limit).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays total URLs and total clicks.
async fn handle_stats(repo: Arc<PgUrlRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let urls_count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count urls: {}", e))?;

    let clicks_count = repo
        .total_clicks()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to sum clicks: {}", e))?;

    println!(
        "  URLs:   {}",
        urls_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists mappings, newest first.
///
/// # Output Format
///
/// ```text
/// 🔗 Short links
///
///   Code        Clicks   Created              URL
///   ─────────────────────────────────────────────────────────────
///   aB3dE5fG    12       2025-01-15 10:30     https://example.com
/// ```
async fn list_urls(repo: Arc<PgUrlRepository>, limit: usize) -> Result<()> {
    println!("{}", "🔗 Short links".bright_blue().bold());
    println!();

    let mappings = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list urls: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No short links yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<11} {:<8} {:<20} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in mappings.iter().take(limit) {
        println!(
            "  {:<11} {:<8} {:<20} {}",
            mapping.short_code.cyan(),
            mapping.clicks.to_string().bright_green(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.original_url
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        mappings.len().min(limit).to_string().bright_white().bold(),
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
