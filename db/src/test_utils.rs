use crate::models::{role, tenant};
use migration::Migrator;
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// In-memory SQLite with the full schema applied.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Inserts `count` tenants coded `T1..Tn`.
pub async fn insert_tenants(db: &DatabaseConnection, count: usize) -> Result<Vec<tenant::Model>, DbErr> {
    let mut tenants = Vec::with_capacity(count);
    for n in 1..=count {
        tenants.push(tenant::Model::create(db, &format!("T{n}"), &format!("Hotel {n}")).await?);
    }
    Ok(tenants)
}

/// Inserts `count` roles coded `R1..Rn`.
pub async fn insert_roles(db: &DatabaseConnection, count: usize) -> Result<Vec<role::Model>, DbErr> {
    let mut roles = Vec::with_capacity(count);
    for n in 1..=count {
        roles.push(role::Model::create(db, &format!("R{n}"), &format!("Role {n}")).await?);
    }
    Ok(roles)
}
