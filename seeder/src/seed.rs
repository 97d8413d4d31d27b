use colored::*;
use db::models::{role, tenant};
use sea_orm::DatabaseConnection;
use std::io::{self, Write};
use std::time::Instant;

use crate::error::SeedError;
use crate::password::{self, HashScheme};
use crate::seeds::master_users::{self, SeedSummary, UserBatch};

const STATUS_COLUMN: usize = 60;

/// Everything a run needs besides the database target.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedOptions {
    pub batch: UserBatch,
    pub default_password: String,
    pub hash_scheme: HashScheme,
    pub hash_cost: u32,
}

/// Runs one pre-flight step, printing a dotted status line with its timing.
pub async fn run_step<T, F>(name: &str, step: F) -> Result<T, SeedError>
where
    F: Future<Output = Result<T, SeedError>>,
{
    let base_msg = format!("{}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = step.await;
    match &result {
        Ok(_) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Err(_) => println!("{}", "failed".red()),
    }
    result
}

/// Connects to `database_url`, seeds, and closes the connection whatever the
/// outcome.
pub async fn run(database_url: &str, options: &SeedOptions) -> Result<SeedSummary, SeedError> {
    let db = run_step("Connecting to database", async {
        db::connect(database_url).await.map_err(SeedError::Connection)
    })
    .await?;
    log::info!("connected to {}", db::redact(database_url));

    let result = seed_database(&db, options).await;

    if let Err(e) = db.close().await {
        log::warn!("closing the database connection failed: {e}");
    }
    result
}

/// Pre-flight checks, one password hash, then the user loop.
///
/// Aborts with [`SeedError::NoTenants`] before roles are queried, and with
/// [`SeedError::NoRoles`] before anything is hashed or written.
pub async fn seed_database(db: &DatabaseConnection, options: &SeedOptions) -> Result<SeedSummary, SeedError> {
    let tenants = run_step("Loading tenants", load_tenants(db)).await?;
    log::info!("found {} tenants", tenants.len());

    let roles = run_step("Loading roles", load_roles(db)).await?;
    log::info!("found {} roles", roles.len());

    let password_hash = run_step("Hashing default password", async {
        password::hash_password(&options.default_password, options.hash_scheme, options.hash_cost)
    })
    .await?;
    log::info!(
        "hashed default password with {} (cost {})",
        options.hash_scheme,
        options.hash_cost
    );

    let summary = master_users::seed_users(db, &tenants, &roles, &password_hash, &options.batch).await;
    log::info!(
        "seeding finished: {} created, {} planned, {} skipped, {} failed",
        summary.created,
        summary.planned,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

async fn load_tenants(db: &DatabaseConnection) -> Result<Vec<tenant::Model>, SeedError> {
    let tenants = tenant::Model::all_ordered(db).await?;
    if tenants.is_empty() {
        return Err(SeedError::NoTenants);
    }
    Ok(tenants)
}

async fn load_roles(db: &DatabaseConnection) -> Result<Vec<role::Model>, SeedError> {
    let roles = role::Model::all_ordered(db).await?;
    if roles.is_empty() {
        return Err(SeedError::NoRoles);
    }
    Ok(roles)
}
