use clap::Parser;
use common::{config::Config, logger};
use seeder::{cli::Cli, error::SeedError, report, seed};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(&cli.env_file) {
        Ok(config) => config,
        Err(e) => return fail(SeedError::Config(e.to_string())),
    };

    if let Err(e) = logger::init_logger(&config.log_level, &config.log_file, config.log_to_stdout) {
        eprintln!("logging disabled: {e}");
    }

    let (database_url, options) = match cli.resolve(&config) {
        Ok(resolved) => resolved,
        Err(e) => return fail(e),
    };

    report::banner(&config.project_name, &options);
    match seed::run(&database_url, &options).await {
        Ok(summary) => {
            report::summary(&summary, &options);
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn fail(error: SeedError) -> ExitCode {
    report::fatal(&error);
    ExitCode::from(error.exit_code())
}
