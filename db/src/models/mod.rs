pub mod role;
pub mod tenant;
pub mod user;
pub mod user_role;

pub use role::Entity as Role;
pub use tenant::Entity as Tenant;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;
