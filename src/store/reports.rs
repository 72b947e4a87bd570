//! Read-only dashboard aggregates, computed in memory over the tables.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::LimsStore;
use crate::models::{SopVersionCadence, WarehouseClientCount};

impl LimsStore {
    /// Distinct clients shipped to per warehouse facility, busiest
    /// facility first. Facilities without shipment links are omitted.
    pub async fn warehouse_client_report(&self) -> Vec<WarehouseClientCount> {
        let inner = self.inner.read().await;
        let mut clients_by_facility: HashMap<String, HashSet<i64>> = HashMap::new();
        for link in inner.warehouse_client_links.iter() {
            // Links always reference a live warehouse; the cascade removes
            // them together.
            if let Some(warehouse) = inner.warehouses.get(link.warehouse_id) {
                clients_by_facility
                    .entry(warehouse.warehouse_facility.clone())
                    .or_default()
                    .insert(link.client_id);
            }
        }
        let mut report: Vec<WarehouseClientCount> = clients_by_facility
            .into_iter()
            .map(|(warehouse_facility, clients)| WarehouseClientCount {
                warehouse_facility,
                total_clients: clients.len() as u64,
            })
            .collect();
        // Ties sort by facility name to keep repeated reads stable.
        report.sort_by(|a, b| {
            b.total_clients
                .cmp(&a.total_clients)
                .then_with(|| a.warehouse_facility.cmp(&b.warehouse_facility))
        });
        report
    }

    /// Mean days between old and new effective dates per SOP, sorted by
    /// SOP name. SOPs with no version changes are omitted.
    pub async fn version_change_report(&self) -> Vec<SopVersionCadence> {
        let inner = self.inner.read().await;
        let mut deltas_by_sop: BTreeMap<String, Vec<i64>> = BTreeMap::new();
        for change in inner.version_changes.iter() {
            if let Some(sop) = inner.sops.get(change.sop_id) {
                let days = (change.new_effective_date - change.old_effective_date).num_days();
                deltas_by_sop.entry(sop.sop_name.clone()).or_default().push(days);
            }
        }
        deltas_by_sop
            .into_iter()
            .map(|(sop_name, deltas)| {
                let sum: i64 = deltas.iter().sum();
                SopVersionCadence {
                    sop_name,
                    average_days_between_effective_dates: sum as f64 / deltas.len() as f64,
                }
            })
            .collect()
    }
}
