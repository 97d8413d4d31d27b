use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510180003_create_master_users"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("master_users"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("username")).string_len(100).not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("password_hash")).string_len(500).not_null())
                    .col(ColumnDef::new(Alias::new("tenant_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("is_active")).boolean().not_null().default(true))
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp())
                    .col(ColumnDef::new(Alias::new("phone_number")).string())
                    .col(ColumnDef::new(Alias::new("email")).string())
                    .col(ColumnDef::new(Alias::new("employee_number")).string())
                    .col(ColumnDef::new(Alias::new("full_name")).string())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("master_users"), Alias::new("tenant_id"))
                            .to(Alias::new("tenants"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("master_users")).to_owned())
            .await
    }
}
