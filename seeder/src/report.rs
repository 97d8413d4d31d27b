//! Console output for operators. Per-user lines are also logged.

use colored::*;

use crate::error::SeedError;
use crate::seed::SeedOptions;
use crate::seeds::master_users::{SeedOutcome, SeedSummary};

const RULE_WIDTH: usize = 50;

pub fn banner(project_name: &str, options: &SeedOptions) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{rule}");
    println!("{}", banner_title(project_name, options).bold());
    println!("{rule}");
}

pub fn banner_title(project_name: &str, options: &SeedOptions) -> String {
    let mode = if options.batch.dry_run { " (dry run)" } else { "" };
    format!(
        "{project_name}: seeding {} master users{mode}",
        options.batch.count
    )
}

pub fn outcome(slot: u32, outcome: &SeedOutcome) {
    match outcome {
        SeedOutcome::Created {
            username,
            tenant_code,
            role_code,
            ..
        } => {
            println!(
                "{:>3} {} {username} (tenant: {tenant_code}, role: {role_code})",
                slot,
                "created".green()
            );
            log::info!("created {username} (tenant {tenant_code}, role {role_code})");
        }
        SeedOutcome::Planned {
            username,
            tenant_code,
            role_code,
        } => {
            println!(
                "{:>3} {} {username} (tenant: {tenant_code}, role: {role_code})",
                slot,
                "would create".cyan()
            );
            log::info!("dry run: would create {username} (tenant {tenant_code}, role {role_code})");
        }
        SeedOutcome::Skipped { username } => {
            println!(
                "{:>3} {} {username} already exists",
                slot,
                "skipped".yellow()
            );
            log::warn!("{username} already exists, skipped");
        }
        SeedOutcome::Failed { username, reason } => {
            println!("{:>3} {} {username}: {reason}", slot, "failed".red());
            log::error!("failed to add {username}: {reason}");
        }
    }
}

pub fn summary(summary: &SeedSummary, options: &SeedOptions) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{rule}");
    println!("Finished!");
    if options.batch.dry_run {
        println!("{} {}", "Planned:".cyan(), summary.planned);
    } else {
        println!("{} {}", "Succeeded:".green(), summary.success_count());
    }
    println!("{} {}", "Errors:".red(), summary.error_count());
    println!("{rule}");

    println!();
    println!("Default password for all new users: {}", options.default_password.bold());
    println!(
        "{}",
        "All seeded accounts share one password hash; change passwords after first login."
            .yellow()
    );
}

pub fn fatal(error: &SeedError) {
    eprintln!("{} {error}", "error:".red().bold());
    log::error!("seeding aborted: {error}");
}
