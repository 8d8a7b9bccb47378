//! CLI administration tool for domain-attributes.
//!
//! Classifies names offline and inspects the attributes of registered
//! domains without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Classify names (no database needed)
//! cargo run --bin admin -- classify 202.crypto 0202.nft WEFff.x
//!
//! # Show attributes of a registered domain
//! cargo run --bin admin -- domain show 202.crypto
//!
//! # List registered domains with attributes
//! cargo run --bin admin -- domain list --limit 50
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for `domain` and `db`): PostgreSQL connection string

use domain_attributes::application::services::AttributeService;
use domain_attributes::domain::attributes::DomainAttributes;
use domain_attributes::infrastructure::persistence::PgDomainRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for domain-attributes.
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
    /// Classify names without looking them up
    Classify {
        /// Full domain names (e.g., "202.crypto")
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Inspect registered domains
    Domain {
        #[command(subcommand)]
        action: DomainAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Registered domain subcommands.
#[derive(Subcommand)]
enum DomainAction {
    /// Show attributes of one registered domain
    Show {
        /// Full domain name
        name: String,
    },

    /// List registered domains with attributes
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,

        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { names } => {
            let attributes: Vec<_> = names
                .iter()
                .map(|n| DomainAttributes::from_name(n))
                .collect();
            print_table(&attributes);
        }
        Commands::Domain { action } => {
            let pool = connect().await?;
            handle_domain_action(action, pool).await?;
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, pool).await?;
        }
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn attribute_service(pool: PgPool) -> AttributeService {
    let repo = Arc::new(PgDomainRepository::new(Arc::new(pool)));
    AttributeService::new(repo)
}

/// Dispatches registered domain commands.
async fn handle_domain_action(action: DomainAction, pool: PgPool) -> Result<()> {
    let service = attribute_service(pool);

    match action {
        DomainAction::Show { name } => {
            let attributes = service
                .metadata_for(&name)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            print_details(&attributes);
        }
        DomainAction::List { limit, offset } => {
            let attributes = service
                .list_attributes(limit, offset)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list domains: {}", e))?;

            if attributes.is_empty() {
                println!("{}", "  No domains found".yellow());
                return Ok(());
            }

            print_table(&attributes);
        }
    }

    Ok(())
}

/// Prints attributes as an aligned table.
///
/// ```text
///   Name                           Length  Character Set   Number Club
///   -------------------------------------------------------------------
///   202.crypto                     3       digit           999 Club
///   0202.nft                       4       digit           -
/// ```
fn print_table(attributes: &[DomainAttributes]) {
    println!(
        "  {:<30} {:<7} {:<15} {:<12}",
        "Name".bright_white().bold(),
        "Length".bright_white().bold(),
        "Character Set".bright_white().bold(),
        "Number Club".bright_white().bold()
    );
    println!("  {}", "─".repeat(67).bright_black());

    for a in attributes {
        let club = match a.number_club {
            Some(club) => club.as_str().green(),
            None => "-".bright_black(),
        };

        println!(
            "  {:<30} {:<7} {:<15} {}",
            a.name.cyan(),
            a.length,
            a.character_set.as_str(),
            club
        );
    }

    println!();
    println!(
        "  Total: {}",
        attributes.len().to_string().bright_white().bold()
    );
}

fn print_details(a: &DomainAttributes) {
    println!("{}", a.name.bright_blue().bold());
    println!();
    println!("  Label:         {}", a.label.cyan());
    println!("  Ending:        {}", a.suffix.as_deref().unwrap_or("-"));
    println!("  Length:        {}", a.length);
    println!("  Character set: {}", a.character_set);
    match a.number_club {
        Some(club) => println!("  Number club:   {}", club.as_str().green()),
        None => println!("  Number club:   {}", "-".bright_black()),
    }
}

/// Dispatches database operation commands.
async fn handle_db_action(action: DbAction, pool: PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let count = attribute_service(pool)
                .registered_count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count domains: {}", e))
                .context("Database check failed (have migrations run?)")?;

            println!("{}", "Database connection OK".green().bold());
            println!("  Registered domains: {}", count.to_string().cyan());
        }
    }

    Ok(())
}
