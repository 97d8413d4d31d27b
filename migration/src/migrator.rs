use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202510180001_create_tenants::Migration),
            Box::new(migrations::m202510180002_create_roles::Migration),
            Box::new(migrations::m202510180003_create_master_users::Migration),
            Box::new(migrations::m202510180004_create_user_roles::Migration),
        ]
    }
}
