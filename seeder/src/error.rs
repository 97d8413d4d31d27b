use sea_orm::DbErr;
use thiserror::Error;

/// Errors that abort a seeding run before or outside the per-user loop.
///
/// Failures of a single user are not errors at this level; they are captured
/// as [`SeedOutcome::Failed`](crate::seeds::master_users::SeedOutcome::Failed).
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("could not connect to the database: {0}")]
    Connection(#[source] DbErr),
    #[error("no tenants found; add tenants before seeding users")]
    NoTenants,
    #[error("no roles found; create the roles table contents before seeding users")]
    NoRoles,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl SeedError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SeedError::Config(_) => 2,
            _ => 1,
        }
    }
}
