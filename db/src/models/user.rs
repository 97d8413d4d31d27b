use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, Set};
use serde::Serialize;

/// Represents a user in the `master_users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "master_users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// BCrypt or Argon2 PHC string.
    pub password_hash: String,
    /// Tenant the user belongs to.
    pub tenant_id: i32,
    pub is_active: bool,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub employee_number: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Tenant,
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRoles,
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts an active user stamped with the current UTC time and returns
    /// the stored row, including its assigned id.
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        username: &str,
        password_hash: &str,
        tenant_id: i32,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            tenant_id: Set(tenant_id),
            is_active: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn username_exists<C: ConnectionTrait>(db: &C, username: &str) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Username.eq(username))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn find_by_username<C: ConnectionTrait>(
        db: &C,
        username: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }

    /// All users in insertion order.
    pub async fn all_ordered<C: ConnectionTrait>(db: &C) -> Result<Vec<Self>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }
}
