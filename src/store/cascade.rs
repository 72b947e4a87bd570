//! Explicit cascade-deletion routines.
//!
//! Instead of leaning on a database engine's cascade triggers, each
//! `purge_*` walks the foreign-key graph in dependency order (link rows
//! first, then dependent entities, then the entity itself). All of this
//! runs under the store's write lock, so a cascade is atomic.

use super::StoreInner;

impl StoreInner {
    pub(crate) fn purge_user(&mut self, id: i64) {
        self.sop_actions.retain(|row| row.user_account_id != id);
        self.user_sample_actions.retain(|row| row.user_account_id != id);
        self.user_reagent_actions.retain(|row| row.user_account_id != id);
        for test_id in self.tests.ids_where(|row| row.user_account_id == id) {
            self.purge_test(test_id);
        }
        self.users.remove(id);
    }

    pub(crate) fn purge_sop(&mut self, id: i64) {
        self.version_changes.retain(|row| row.sop_id != id);
        self.sop_actions.retain(|row| row.sop_id != id);
        for warehouse_id in self.warehouses.ids_where(|row| row.sop_id == id) {
            self.purge_warehouse(warehouse_id);
        }
        for equipment_id in self.equipment.ids_where(|row| row.sop_id == id) {
            self.purge_equipment(equipment_id);
        }
        // Logs governed by this SOP but attached to surviving equipment.
        self.maintenance_logs.retain(|row| row.sop_id != id);
        for sample_id in self.samples.ids_where(|row| row.sop_id == id) {
            self.purge_sample(sample_id);
        }
        for test_id in self.tests.ids_where(|row| row.sop_id == id) {
            self.purge_test(test_id);
        }
        for reagent_id in self.reagents.ids_where(|row| row.sop_id == id) {
            self.purge_reagent(reagent_id);
        }
        self.sops.remove(id);
    }

    pub(crate) fn purge_client(&mut self, id: i64) {
        self.warehouse_client_links.retain(|row| row.client_id != id);
        self.clients.remove(id);
    }

    pub(crate) fn purge_warehouse(&mut self, id: i64) {
        self.warehouse_client_links.retain(|row| row.warehouse_id != id);
        for sample_id in self.samples.ids_where(|row| row.warehouse_id == id) {
            self.purge_sample(sample_id);
        }
        self.warehouses.remove(id);
    }

    pub(crate) fn purge_location(&mut self, id: i64) {
        for equipment_id in self.equipment.ids_where(|row| row.location_id == id) {
            self.purge_equipment(equipment_id);
        }
        for sample_id in self.samples.ids_where(|row| row.location_id == id) {
            self.purge_sample(sample_id);
        }
        self.locations.remove(id);
    }

    pub(crate) fn purge_equipment(&mut self, id: i64) {
        self.maintenance_logs.retain(|row| row.equipment_id != id);
        self.test_equipment_links.retain(|row| row.equipment_id != id);
        self.equipment.remove(id);
    }

    pub(crate) fn purge_sample(&mut self, id: i64) {
        self.user_sample_actions.retain(|row| row.sample_id != id);
        self.sample_test_links.retain(|row| row.sample_id != id);
        self.samples.remove(id);
    }

    pub(crate) fn purge_test(&mut self, id: i64) {
        self.sample_test_links.retain(|row| row.test_id != id);
        self.test_equipment_links.retain(|row| row.test_id != id);
        self.test_reagent_links.retain(|row| row.test_id != id);
        self.tests.remove(id);
    }

    pub(crate) fn purge_reagent(&mut self, id: i64) {
        self.user_reagent_actions.retain(|row| row.reagent_id != id);
        self.test_reagent_links.retain(|row| row.reagent_id != id);
        self.reagents.remove(id);
    }
}
