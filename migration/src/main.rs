use std::{env, fs, path::Path, process::ExitCode};

mod runner;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let Ok(target) = env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL must be set");
        return ExitCode::FAILURE;
    };
    let sqlite_file = sqlite_file(&target);
    let url = match sqlite_file {
        Some(path) => format!("sqlite://{}?mode=rwc", path.display()),
        None => target.clone(),
    };
    let args: Vec<String> = env::args().collect();

    let result = match args.get(1).map(|s| s.as_str()) {
        Some("clean") => remove_db_file(sqlite_file),
        Some("fresh") => match remove_db_file(sqlite_file) {
            Ok(()) => migrate(sqlite_file, &url).await,
            Err(e) => Err(e),
        },
        Some("up") | None => migrate(sqlite_file, &url).await,
        Some(other) => Err(format!("unknown command: {other} (expected up, fresh or clean)")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns the file path when `target` is a plain SQLite path rather than a DSN.
fn sqlite_file(target: &str) -> Option<&Path> {
    if target.starts_with("sqlite:") || target.starts_with("postgres://") || target.starts_with("mysql://") {
        None
    } else {
        Some(Path::new(target))
    }
}

async fn migrate(sqlite_file: Option<&Path>, url: &str) -> Result<(), String> {
    if let Some(parent) = sqlite_file.and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| format!("Failed to create DB directory: {e}"))?;
        }
    }
    runner::run_all_migrations(url).await.map_err(|e| e.to_string())
}

fn remove_db_file(path: Option<&Path>) -> Result<(), String> {
    let Some(db_path) = path else {
        return Err("clean/fresh only apply to a SQLite file path".into());
    };
    if db_path.exists() {
        fs::remove_file(db_path).map_err(|e| format!("Failed to delete DB file: {e}"))?;
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
    Ok(())
}
