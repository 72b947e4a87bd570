// In-memory relational store for the laboratory entity graph.
//
// One `Table` per entity type, all guarded by a single `RwLock`. Every
// CRUD and aggregate call takes the lock exactly once, so multi-step
// operations (account + role detail, sample + type detail, cascade
// deletes) are atomic with respect to concurrent callers.

mod cascade;
mod locations;
mod reagents;
mod reports;
mod samples;
mod sops;
mod testing;
mod users;
mod warehouses;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::*;

/// Errors surfaced by store operations.
///
/// The taxonomy mirrors what the HTTP edge reports: validation failures
/// reject malformed field values, not-found covers both primary targets
/// and dangling foreign-key references, and conflict covers uniqueness
/// violations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered rows plus a monotonically increasing id counter.
///
/// `BTreeMap` keeps iteration in id order, which makes unfiltered list
/// results deterministic across repeated calls.
pub(crate) struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self { rows: BTreeMap::new(), next_id: 1 }
    }

    /// Assigns the next id and inserts the row built from it.
    fn insert(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    fn require(&self, id: i64, entity: &'static str) -> StoreResult<T> {
        self.rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { entity, id })
    }

    /// Checks a foreign-key reference without cloning the row.
    fn ensure(&self, id: i64, entity: &'static str) -> StoreResult<()> {
        if self.rows.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::NotFound { entity, id })
        }
    }

    fn put(&mut self, id: i64, row: T) {
        self.rows.insert(id, row);
    }

    fn remove(&mut self, id: i64) -> Option<T> {
        self.rows.remove(&id)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    fn ids_where(&self, f: impl Fn(&T) -> bool) -> Vec<i64> {
        self.rows
            .iter()
            .filter(|(_, row)| f(row))
            .map(|(id, _)| *id)
            .collect()
    }

    fn retain(&mut self, f: impl Fn(&T) -> bool) {
        self.rows.retain(|_, row| f(row));
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All tables of the entity graph. Mutated only under the store's
/// write lock.
#[derive(Default)]
pub(crate) struct StoreInner {
    pub(crate) users: Table<UserAccount>,
    pub(crate) sops: Table<Sop>,
    pub(crate) version_changes: Table<VersionChange>,
    pub(crate) sop_actions: Table<UserSopAction>,
    pub(crate) clients: Table<Client>,
    pub(crate) warehouses: Table<Warehouse>,
    pub(crate) warehouse_client_links: Table<WarehouseClientLink>,
    pub(crate) locations: Table<Location>,
    pub(crate) equipment: Table<Equipment>,
    pub(crate) maintenance_logs: Table<MaintenanceLog>,
    pub(crate) samples: Table<Sample>,
    pub(crate) user_sample_actions: Table<UserSampleAction>,
    pub(crate) tests: Table<LabTest>,
    pub(crate) sample_test_links: Table<SampleTestLink>,
    pub(crate) test_equipment_links: Table<TestEquipmentLink>,
    pub(crate) reagents: Table<Reagent>,
    pub(crate) user_reagent_actions: Table<UserReagentAction>,
    pub(crate) test_reagent_links: Table<TestReagentLink>,
}

/// The domain/storage layer: typed CRUD per entity plus the two
/// dashboard aggregates.
pub struct LimsStore {
    inner: RwLock<StoreInner>,
}

impl LimsStore {
    pub fn new() -> Self {
        Self { inner: RwLock::new(StoreInner::default()) }
    }

    /// Total number of records across all tables, for liveness checks.
    pub async fn record_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.users.len()
            + inner.sops.len()
            + inner.version_changes.len()
            + inner.sop_actions.len()
            + inner.clients.len()
            + inner.warehouses.len()
            + inner.warehouse_client_links.len()
            + inner.locations.len()
            + inner.equipment.len()
            + inner.maintenance_logs.len()
            + inner.samples.len()
            + inner.user_sample_actions.len()
            + inner.tests.len()
            + inner.sample_test_links.len()
            + inner.test_equipment_links.len()
            + inner.reagents.len()
            + inner.user_reagent_actions.len()
            + inner.test_reagent_links.len()
    }
}

impl Default for LimsStore {
    fn default() -> Self {
        Self::new()
    }
}

/// SOP version numbers carry at most one fractional digit.
fn check_version_scale(field: &str, value: Decimal) -> StoreResult<()> {
    if value.normalize().scale() > 1 {
        return Err(StoreError::Validation(format!(
            "{field} must have at most one fractional digit, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn table_ids_are_monotonic_and_never_reused() {
        let mut table: Table<i64> = Table::new();
        let a = table.insert(|id| id);
        let b = table.insert(|id| id);
        table.remove(b);
        let c = table.insert(|id| id);
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn version_scale_accepts_one_fractional_digit() {
        assert!(check_version_scale("version_number", dec!(1.5)).is_ok());
        assert!(check_version_scale("version_number", dec!(1.50)).is_ok());
        assert!(check_version_scale("version_number", dec!(1.51)).is_err());
    }
}
