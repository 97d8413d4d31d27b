use clap::Parser;
use common::config::Config;
use std::str::FromStr;

use crate::error::SeedError;
use crate::password::HashScheme;
use crate::seed::SeedOptions;
use crate::seeds::master_users::UserBatch;

/// Command-line flags. Each one overrides the matching environment setting.
#[derive(Parser, Debug)]
#[command(name = "seeder")]
#[command(about = "Seed master users round-robin across existing tenants and roles")]
pub struct Cli {
    /// SQLite path or database URL (overrides `DATABASE_URL`).
    #[arg(long)]
    pub database_url: Option<String>,

    /// Password given to every seeded user (overrides `SEED_DEFAULT_PASSWORD`).
    #[arg(long)]
    pub default_password: Option<String>,

    /// `bcrypt` or `argon2` (overrides `SEED_HASH_SCHEME`).
    #[arg(long)]
    pub hash_scheme: Option<HashScheme>,

    /// bcrypt work factor or argon2 time cost (overrides `SEED_HASH_COST`).
    #[arg(long)]
    pub hash_cost: Option<u32>,

    /// Number of users to create (overrides `SEED_USER_COUNT`).
    #[arg(long)]
    pub count: Option<u32>,

    /// Username prefix; users are named `<prefix>1..<prefix>N`.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Report what would be created without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Dotenv file loaded before reading the environment.
    #[arg(long, default_value = ".env")]
    pub env_file: String,
}

impl Cli {
    /// Merges the flags over `config`, returning the database target and the
    /// run options.
    pub fn resolve(self, config: &Config) -> Result<(String, SeedOptions), SeedError> {
        let database_url = self
            .database_url
            .or_else(|| config.database_url.clone())
            .ok_or_else(|| SeedError::Config("DATABASE_URL or --database-url is required".into()))?;

        let hash_scheme = match self.hash_scheme {
            Some(scheme) => scheme,
            None => HashScheme::from_str(&config.hash_scheme).map_err(|_| {
                SeedError::Config(format!("unknown hash scheme: {:?}", config.hash_scheme))
            })?,
        };

        let default_password = self
            .default_password
            .unwrap_or_else(|| config.default_password.clone());
        if default_password.is_empty() {
            return Err(SeedError::Config("default password cannot be empty".into()));
        }

        let options = SeedOptions {
            batch: UserBatch {
                count: self.count.unwrap_or(config.user_count),
                username_prefix: self.prefix.unwrap_or_else(|| config.username_prefix.clone()),
                dry_run: self.dry_run,
            },
            default_password,
            hash_scheme,
            hash_cost: self.hash_cost.unwrap_or(config.hash_cost),
        };

        Ok((database_url, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_db() -> Config {
        Config {
            database_url: Some("sqlite://data/master.db".into()),
            ..Config::default()
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let cli = Cli::try_parse_from(["seeder"]).unwrap();
        let (url, options) = cli.resolve(&config_with_db()).unwrap();

        assert_eq!(url, "sqlite://data/master.db");
        assert_eq!(options.batch.count, 70);
        assert_eq!(options.batch.username_prefix, "user");
        assert!(!options.batch.dry_run);
        assert_eq!(options.default_password, "123");
        assert_eq!(options.hash_scheme, HashScheme::Bcrypt);
        assert_eq!(options.hash_cost, 12);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "seeder",
            "--database-url",
            "sqlite::memory:",
            "--hash-scheme",
            "Argon2",
            "--hash-cost",
            "3",
            "--count",
            "5",
            "--prefix",
            "staff",
            "--default-password",
            "s3cret",
            "--dry-run",
        ])
        .unwrap();
        let (url, options) = cli.resolve(&config_with_db()).unwrap();

        assert_eq!(url, "sqlite::memory:");
        assert_eq!(options.hash_scheme, HashScheme::Argon2);
        assert_eq!(options.hash_cost, 3);
        assert_eq!(options.batch.count, 5);
        assert_eq!(options.batch.username(5), "staff5");
        assert_eq!(options.default_password, "s3cret");
        assert!(options.batch.dry_run);
    }

    #[test]
    fn missing_database_url_is_a_config_error() {
        let cli = Cli::try_parse_from(["seeder"]).unwrap();
        let err = cli.resolve(&Config::default()).unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_scheme_in_environment_is_a_config_error() {
        let config = Config {
            hash_scheme: "md5".into(),
            ..config_with_db()
        };
        let cli = Cli::try_parse_from(["seeder"]).unwrap();
        assert!(matches!(cli.resolve(&config), Err(SeedError::Config(_))));
    }

    #[test]
    fn unknown_scheme_flag_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["seeder", "--hash-scheme", "md5"]).is_err());
    }
}
