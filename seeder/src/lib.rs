pub mod cli;
pub mod error;
pub mod password;
pub mod report;
pub mod seed;
pub mod seeds;
