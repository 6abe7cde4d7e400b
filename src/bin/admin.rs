//! CLI administration tool for the referral service.
//!
//! Manages program members and inspects or purges referrals directly against
//! PostgreSQL, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a member
//! cargo run --bin admin -- user add --uid U6 --name "Ana Torres" --email ana@example.com
//!
//! # Show (and assign on first use) a member's referral code
//! cargo run --bin admin -- user code U1
//!
//! # Inspect referrals
//! cargo run --bin admin -- referrals list U1
//! cargo run --bin admin -- referrals stats U1
//!
//! # Delete every referral sent by a member
//! cargo run --bin admin -- referrals purge U1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use referral_service::application::services::{ReferralService, UserService};
use referral_service::domain::entities::NewUser;
use referral_service::infrastructure::persistence::{PgReferralRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the referral service.
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
    /// Manage program members
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect and purge referrals
    Referrals {
        #[command(subcommand)]
        action: ReferralAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a new member
    Add {
        #[arg(short, long)]
        uid: Option<String>,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all members
    List,

    /// Show a member's referral code, assigning it if needed
    Code { uid: String },
}

#[derive(Subcommand)]
enum ReferralAction {
    /// List referrals sent by a member
    List { uid: String },

    /// Show referral counts for a member
    Stats { uid: String },

    /// Delete every referral sent by a member
    Purge {
        uid: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Referrals { action } => handle_referral_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches member management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = UserService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))));

    match action {
        UserAction::Add {
            uid,
            name,
            email,
            yes,
        } => add_user(&service, uid, name, email, yes).await?,
        UserAction::List => list_users(&service).await?,
        UserAction::Code { uid } => show_code(&service, &uid).await?,
    }

    Ok(())
}

/// Prompts for any missing field, then registers the member.
async fn add_user(
    service: &UserService<PgUserRepository>,
    uid: Option<String>,
    name: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Register Member".bright_blue().bold());
    println!();

    let uid = match uid {
        Some(u) => u,
        None => Input::new().with_prompt("User id").interact_text()?,
    };
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    println!();
    println!("  Uid:   {}", uid.cyan());
    println!("  Name:  {}", name.cyan());
    println!("  Email: {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Register this member?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .register_user(NewUser { uid, name, email })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to register member: {}", e))?;

    println!(
        "{} {}",
        "✅ Registered".green().bold(),
        user.uid.bright_white()
    );

    Ok(())
}

/// Lists members and their referral codes.
///
/// # Output Format
///
/// ```text
///   Uid        Name                           Email                          Code
///   ─────────────────────────────────────────────────────────────────────────────────
///   U1         Maria Gomez                    maria.gomez@example.com        NAQXC0
///   U2         Carlos Rodriguez               carlos.rodriguez@example.com   -
/// ```
async fn list_users(service: &UserService<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Members".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list members: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No members found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<30} {:<30} {:<6}",
        "Uid".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Code".bright_white().bold()
    );
    println!("  {}", "─".repeat(81).bright_black());

    for user in &users {
        println!(
            "  {:<10} {:<30} {:<30} {}",
            user.uid.cyan(),
            user.name,
            user.email.bright_black(),
            user.referral_code().unwrap_or("-").bright_yellow()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_code(service: &UserService<PgUserRepository>, uid: &str) -> Result<()> {
    let code = service
        .get_or_create_referral_code(uid)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get referral code: {}", e))?;

    if code.is_empty() {
        anyhow::bail!("Member '{}' not found", uid);
    }

    println!("  {}: {}", uid.cyan(), code.bright_yellow().bold());

    Ok(())
}

/// Dispatches referral commands.
async fn handle_referral_action(action: ReferralAction, pool: &PgPool) -> Result<()> {
    let service =
        ReferralService::new(Arc::new(PgReferralRepository::new(Arc::new(pool.clone()))));

    match action {
        ReferralAction::List { uid } => list_referrals(&service, &uid).await?,
        ReferralAction::Stats { uid } => show_stats(&service, &uid).await?,
        ReferralAction::Purge { uid, yes } => purge_referrals(&service, &uid, yes).await?,
    }

    Ok(())
}

async fn list_referrals(service: &ReferralService<PgReferralRepository>, uid: &str) -> Result<()> {
    println!(
        "{} {}",
        "📨 Referrals sent by".bright_blue().bold(),
        uid.bright_white().bold()
    );
    println!();

    let referrals = service
        .list_by_user(uid)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list referrals: {}", e))?;

    if referrals.is_empty() {
        println!("{}", "  No referrals found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<24} {:<6} {:<10} {:<20}",
        "Id".bright_white().bold(),
        "Name".bright_white().bold(),
        "Via".bright_white().bold(),
        "Status".bright_white().bold(),
        "Updated".bright_white().bold()
    );
    println!("  {}", "─".repeat(74).bright_black());

    for referral in &referrals {
        let status = if referral.is_completed() {
            referral.status.as_str().green()
        } else {
            referral.status.as_str().yellow()
        };

        println!(
            "  {:<10} {:<24} {:<6} {:<10} {}",
            referral.id.bright_black(),
            referral.name.cyan(),
            referral.channel.as_str(),
            status,
            referral
                .updated_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();

    Ok(())
}

async fn show_stats(service: &ReferralService<PgReferralRepository>, uid: &str) -> Result<()> {
    println!(
        "{} {}",
        "📊 Statistics for".bright_blue().bold(),
        uid.bright_white().bold()
    );
    println!();

    let stats = service
        .statistics(uid)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute statistics: {}", e))?;

    println!(
        "  Sent:      {}",
        stats.total_sent.to_string().bright_green().bold()
    );
    println!(
        "  Completed: {}",
        stats.total_completed.to_string().bright_green().bold()
    );
    println!(
        "  Pending:   {}",
        stats.total_pending.to_string().bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Deletes a member's referrals after confirmation (default: No).
async fn purge_referrals(
    service: &ReferralService<PgReferralRepository>,
    uid: &str,
    skip_confirm: bool,
) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete every referral sent by {}?", uid))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if !service.delete_all_for_user(uid).await {
        anyhow::bail!("Purge failed part-way; some referrals may remain");
    }

    println!("{}", "✅ Referrals deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let users = UserService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))))
                .count_users()
                .await
                .map_err(|e| anyhow::anyhow!("Schema check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Members: {}", users.to_string().bright_white());
        }
    }

    Ok(())
}
