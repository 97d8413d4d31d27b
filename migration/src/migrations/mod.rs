pub mod m202510180001_create_tenants;
pub mod m202510180002_create_roles;
pub mod m202510180003_create_master_users;
pub mod m202510180004_create_user_roles;
