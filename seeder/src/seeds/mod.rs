pub mod master_users;
