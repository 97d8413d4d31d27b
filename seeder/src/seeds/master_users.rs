//! Batch creation of master users spread round-robin over tenants and roles.

use db::models::{role, tenant, user, user_role};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::report;

/// Cyclic cursor over a non-empty slice.
#[derive(Debug)]
pub struct RoundRobin<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> RoundRobin<'a, T> {
    /// Returns `None` for an empty slice.
    pub fn new(items: &'a [T]) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items, index: 0 })
        }
    }

    pub fn current(&self) -> &'a T {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }
}

/// What happened to one user slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Created {
        username: String,
        user_id: i32,
        tenant_code: String,
        role_code: String,
    },
    /// Dry run only: the user would have been created.
    Planned {
        username: String,
        tenant_code: String,
        role_code: String,
    },
    /// The username already exists.
    Skipped { username: String },
    Failed { username: String, reason: String },
}

impl SeedOutcome {
    pub fn username(&self) -> &str {
        match self {
            SeedOutcome::Created { username, .. }
            | SeedOutcome::Planned { username, .. }
            | SeedOutcome::Skipped { username }
            | SeedOutcome::Failed { username, .. } => username,
        }
    }

    /// Created and planned slots advance the round-robin cursors.
    pub fn is_success(&self) -> bool {
        matches!(self, SeedOutcome::Created { .. } | SeedOutcome::Planned { .. })
    }
}

/// Tallies for one run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedSummary {
    pub created: u32,
    pub planned: u32,
    pub skipped: u32,
    pub failed: u32,
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedSummary {
    fn record(&mut self, outcome: SeedOutcome) {
        match &outcome {
            SeedOutcome::Created { .. } => self.created += 1,
            SeedOutcome::Planned { .. } => self.planned += 1,
            SeedOutcome::Skipped { .. } => self.skipped += 1,
            SeedOutcome::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn success_count(&self) -> u32 {
        self.created
    }

    /// Skipped duplicates count as errors, like insert failures.
    pub fn error_count(&self) -> u32 {
        self.skipped + self.failed
    }
}

/// Parameters of the batch that do not depend on the store.
#[derive(Debug, Clone, PartialEq)]
pub struct UserBatch {
    pub count: u32,
    pub username_prefix: String,
    pub dry_run: bool,
}

impl UserBatch {
    pub fn username(&self, slot: u32) -> String {
        format!("{}{}", self.username_prefix, slot)
    }
}

/// Creates users `1..=batch.count` in sequence.
///
/// Each user and its role assignment are written in one transaction. The
/// tenant and role cursors advance only after a success, so a skipped or
/// failed slot hands the same pair to the next slot.
pub async fn seed_users(
    db: &DatabaseConnection,
    tenants: &[tenant::Model],
    roles: &[role::Model],
    password_hash: &str,
    batch: &UserBatch,
) -> SeedSummary {
    let mut summary = SeedSummary::default();
    let (Some(mut tenant_cursor), Some(mut role_cursor)) =
        (RoundRobin::new(tenants), RoundRobin::new(roles))
    else {
        return summary;
    };

    for slot in 1..=batch.count {
        let tenant = tenant_cursor.current();
        let role = role_cursor.current();
        let username = batch.username(slot);

        let outcome = seed_slot(db, &username, tenant, role, password_hash, batch.dry_run).await;
        report::outcome(slot, &outcome);

        if outcome.is_success() {
            tenant_cursor.advance();
            role_cursor.advance();
        }
        summary.record(outcome);
    }

    summary
}

async fn seed_slot(
    db: &DatabaseConnection,
    username: &str,
    tenant: &tenant::Model,
    role: &role::Model,
    password_hash: &str,
    dry_run: bool,
) -> SeedOutcome {
    match user::Model::username_exists(db, username).await {
        Ok(true) => {
            return SeedOutcome::Skipped {
                username: username.to_string(),
            };
        }
        Ok(false) => {}
        Err(e) => {
            return SeedOutcome::Failed {
                username: username.to_string(),
                reason: e.to_string(),
            };
        }
    }

    if dry_run {
        return SeedOutcome::Planned {
            username: username.to_string(),
            tenant_code: tenant.code.clone(),
            role_code: role.code.clone(),
        };
    }

    match create_with_role(db, username, password_hash, tenant.id, role.id).await {
        Ok(user_id) => SeedOutcome::Created {
            username: username.to_string(),
            user_id,
            tenant_code: tenant.code.clone(),
            role_code: role.code.clone(),
        },
        Err(e) => SeedOutcome::Failed {
            username: username.to_string(),
            reason: e.to_string(),
        },
    }
}

/// Inserts the user and its role assignment atomically; returns the new user id.
async fn create_with_role(
    db: &DatabaseConnection,
    username: &str,
    password_hash: &str,
    tenant_id: i32,
    role_id: i32,
) -> Result<i32, DbErr> {
    let txn = db.begin().await?;

    let written = async {
        let created = user::Model::create(&txn, username, password_hash, tenant_id).await?;
        user_role::Model::create(&txn, created.id, role_id).await?;
        Ok::<_, DbErr>(created.id)
    }
    .await;

    match written {
        Ok(user_id) => {
            txn.commit().await?;
            Ok(user_id)
        }
        Err(e) => {
            if let Err(rollback) = txn.rollback().await {
                log::warn!("rollback for {username} failed: {rollback}");
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_robin_wraps_around() {
        let items = ["a", "b", "c"];
        let mut rr = RoundRobin::new(&items).unwrap();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(*rr.current());
            rr.advance();
        }
        assert_eq!(seen, ["a", "b", "c", "a", "b", "c", "a"]);
        assert_eq!(rr.index(), 1);
    }

    #[test]
    fn round_robin_over_single_item_stays_put() {
        let items = [42];
        let mut rr = RoundRobin::new(&items).unwrap();
        rr.advance();
        rr.advance();
        assert_eq!(*rr.current(), 42);
        assert_eq!(rr.index(), 0);
    }

    #[test]
    fn round_robin_rejects_empty_slice() {
        let items: [u8; 0] = [];
        assert!(RoundRobin::new(&items).is_none());
    }

    #[test]
    fn usernames_are_prefix_plus_slot() {
        let batch = UserBatch {
            count: 70,
            username_prefix: "user".into(),
            dry_run: false,
        };
        assert_eq!(batch.username(1), "user1");
        assert_eq!(batch.username(70), "user70");
    }

    #[test]
    fn summary_counts_skips_as_errors() {
        let mut summary = SeedSummary::default();
        summary.record(SeedOutcome::Created {
            username: "user1".into(),
            user_id: 1,
            tenant_code: "T1".into(),
            role_code: "R1".into(),
        });
        summary.record(SeedOutcome::Skipped {
            username: "user2".into(),
        });
        summary.record(SeedOutcome::Failed {
            username: "user3".into(),
            reason: "boom".into(),
        });

        assert_eq!(summary.success_count(), 1);
        assert_eq!(summary.error_count(), 2);
        assert_eq!(summary.outcomes[1].username(), "user2");
        assert!(!summary.outcomes[1].is_success());
    }
}
