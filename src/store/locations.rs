use super::{LimsStore, StoreError, StoreInner, StoreResult};
use crate::models::{
    Equipment, EquipmentPayload, Location, LocationPayload, MaintenanceLog, MaintenanceLogPayload,
};

fn check_location(
    inner: &StoreInner,
    payload: &LocationPayload,
    exclude_id: i64,
) -> StoreResult<()> {
    let taken = inner.locations.iter().any(|l| {
        l.location_type == payload.location_type
            && l.room_number == payload.room_number
            && l.id != exclude_id
    });
    if taken {
        return Err(StoreError::Conflict(format!(
            "location ('{}', {}) already exists",
            payload.location_type, payload.room_number
        )));
    }
    Ok(())
}

impl LimsStore {
    pub async fn create_location(&self, payload: LocationPayload) -> StoreResult<Location> {
        let mut inner = self.inner.write().await;
        check_location(&inner, &payload, 0)?;
        Ok(inner.locations.insert(|id| Location {
            id,
            location_type: payload.location_type.clone(),
            room_number: payload.room_number,
        }))
    }

    pub async fn list_locations(&self) -> Vec<Location> {
        let inner = self.inner.read().await;
        inner.locations.iter().cloned().collect()
    }

    pub async fn get_location(&self, id: i64) -> StoreResult<Location> {
        let inner = self.inner.read().await;
        inner.locations.require(id, "location")
    }

    pub async fn update_location(&self, id: i64, payload: LocationPayload) -> StoreResult<Location> {
        let mut inner = self.inner.write().await;
        inner.locations.ensure(id, "location")?;
        check_location(&inner, &payload, id)?;
        let location = Location {
            id,
            location_type: payload.location_type,
            room_number: payload.room_number,
        };
        inner.locations.put(id, location.clone());
        Ok(location)
    }

    pub async fn delete_location(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.locations.ensure(id, "location")?;
        inner.purge_location(id);
        Ok(())
    }

    pub async fn create_equipment(&self, payload: EquipmentPayload) -> StoreResult<Equipment> {
        let mut inner = self.inner.write().await;
        inner.locations.ensure(payload.location_id, "location")?;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        Ok(inner.equipment.insert(|id| Equipment {
            id,
            location_id: payload.location_id,
            sop_id: payload.sop_id,
            equipment_name: payload.equipment_name.clone(),
            min_use_range: payload.min_use_range,
            max_use_range: payload.max_use_range,
            in_use: payload.in_use,
        }))
    }

    pub async fn list_equipment(&self) -> Vec<Equipment> {
        let inner = self.inner.read().await;
        inner.equipment.iter().cloned().collect()
    }

    pub async fn get_equipment(&self, id: i64) -> StoreResult<Equipment> {
        let inner = self.inner.read().await;
        inner.equipment.require(id, "equipment")
    }

    pub async fn update_equipment(
        &self,
        id: i64,
        payload: EquipmentPayload,
    ) -> StoreResult<Equipment> {
        let mut inner = self.inner.write().await;
        inner.equipment.ensure(id, "equipment")?;
        inner.locations.ensure(payload.location_id, "location")?;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        let equipment = Equipment {
            id,
            location_id: payload.location_id,
            sop_id: payload.sop_id,
            equipment_name: payload.equipment_name,
            min_use_range: payload.min_use_range,
            max_use_range: payload.max_use_range,
            in_use: payload.in_use,
        };
        inner.equipment.put(id, equipment.clone());
        Ok(equipment)
    }

    pub async fn delete_equipment(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.equipment.ensure(id, "equipment")?;
        inner.purge_equipment(id);
        Ok(())
    }

    pub async fn create_maintenance_log(
        &self,
        payload: MaintenanceLogPayload,
    ) -> StoreResult<MaintenanceLog> {
        let mut inner = self.inner.write().await;
        inner.equipment.ensure(payload.equipment_id, "equipment")?;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        Ok(inner.maintenance_logs.insert(|id| MaintenanceLog {
            id,
            equipment_id: payload.equipment_id,
            sop_id: payload.sop_id,
            service_date: payload.service_date,
            service_description: payload.service_description.clone(),
            service_interval: payload.service_interval.clone(),
            next_service_date: payload.next_service_date,
        }))
    }

    pub async fn list_maintenance_logs(&self) -> Vec<MaintenanceLog> {
        let inner = self.inner.read().await;
        inner.maintenance_logs.iter().cloned().collect()
    }

    pub async fn get_maintenance_log(&self, id: i64) -> StoreResult<MaintenanceLog> {
        let inner = self.inner.read().await;
        inner.maintenance_logs.require(id, "maintenance log")
    }

    pub async fn update_maintenance_log(
        &self,
        id: i64,
        payload: MaintenanceLogPayload,
    ) -> StoreResult<MaintenanceLog> {
        let mut inner = self.inner.write().await;
        inner.maintenance_logs.ensure(id, "maintenance log")?;
        inner.equipment.ensure(payload.equipment_id, "equipment")?;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        let log = MaintenanceLog {
            id,
            equipment_id: payload.equipment_id,
            sop_id: payload.sop_id,
            service_date: payload.service_date,
            service_description: payload.service_description,
            service_interval: payload.service_interval,
            next_service_date: payload.next_service_date,
        };
        inner.maintenance_logs.put(id, log.clone());
        Ok(log)
    }

    pub async fn delete_maintenance_log(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .maintenance_logs
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "maintenance log", id })
    }
}
