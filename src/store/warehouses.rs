use tracing::info;

use super::{LimsStore, StoreError, StoreInner, StoreResult};
use crate::models::{
    Client, ClientPayload, Warehouse, WarehouseClientLink, WarehouseClientLinkPayload,
    WarehousePayload,
};

fn check_warehouse(
    inner: &StoreInner,
    payload: &WarehousePayload,
    exclude_id: i64,
) -> StoreResult<()> {
    inner.sops.ensure(payload.sop_id, "SOP")?;
    let taken = inner.warehouses.iter().any(|w| {
        w.warehouse_facility == payload.warehouse_facility
            && w.warehouse_company == payload.warehouse_company
            && w.id != exclude_id
    });
    if taken {
        return Err(StoreError::Conflict(format!(
            "warehouse ('{}', '{}') already exists",
            payload.warehouse_facility, payload.warehouse_company
        )));
    }
    Ok(())
}

impl LimsStore {
    pub async fn create_client(&self, payload: ClientPayload) -> StoreResult<Client> {
        let mut inner = self.inner.write().await;
        Ok(inner.clients.insert(|id| Client {
            id,
            client_name: payload.client_name.clone(),
        }))
    }

    pub async fn list_clients(&self) -> Vec<Client> {
        let inner = self.inner.read().await;
        inner.clients.iter().cloned().collect()
    }

    pub async fn get_client(&self, id: i64) -> StoreResult<Client> {
        let inner = self.inner.read().await;
        inner.clients.require(id, "client")
    }

    pub async fn update_client(&self, id: i64, payload: ClientPayload) -> StoreResult<Client> {
        let mut inner = self.inner.write().await;
        inner.clients.ensure(id, "client")?;
        let client = Client { id, client_name: payload.client_name };
        inner.clients.put(id, client.clone());
        Ok(client)
    }

    pub async fn delete_client(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.clients.ensure(id, "client")?;
        inner.purge_client(id);
        Ok(())
    }

    pub async fn create_warehouse(&self, payload: WarehousePayload) -> StoreResult<Warehouse> {
        let mut inner = self.inner.write().await;
        check_warehouse(&inner, &payload, 0)?;
        let warehouse = inner.warehouses.insert(|id| Warehouse {
            id,
            sop_id: payload.sop_id,
            warehouse_technician: payload.warehouse_technician.clone(),
            warehouse_facility: payload.warehouse_facility.clone(),
            warehouse_company: payload.warehouse_company.clone(),
        });
        info!(id = warehouse.id, facility = %warehouse.warehouse_facility, "created warehouse");
        Ok(warehouse)
    }

    pub async fn list_warehouses(&self) -> Vec<Warehouse> {
        let inner = self.inner.read().await;
        inner.warehouses.iter().cloned().collect()
    }

    pub async fn get_warehouse(&self, id: i64) -> StoreResult<Warehouse> {
        let inner = self.inner.read().await;
        inner.warehouses.require(id, "warehouse")
    }

    pub async fn update_warehouse(
        &self,
        id: i64,
        payload: WarehousePayload,
    ) -> StoreResult<Warehouse> {
        let mut inner = self.inner.write().await;
        inner.warehouses.ensure(id, "warehouse")?;
        check_warehouse(&inner, &payload, id)?;
        let warehouse = Warehouse {
            id,
            sop_id: payload.sop_id,
            warehouse_technician: payload.warehouse_technician,
            warehouse_facility: payload.warehouse_facility,
            warehouse_company: payload.warehouse_company,
        };
        inner.warehouses.put(id, warehouse.clone());
        Ok(warehouse)
    }

    pub async fn delete_warehouse(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.warehouses.ensure(id, "warehouse")?;
        inner.purge_warehouse(id);
        info!(id, "deleted warehouse and dependents");
        Ok(())
    }

    pub async fn create_warehouse_client_link(
        &self,
        payload: WarehouseClientLinkPayload,
    ) -> StoreResult<WarehouseClientLink> {
        let mut inner = self.inner.write().await;
        inner.warehouses.ensure(payload.warehouse_id, "warehouse")?;
        inner.clients.ensure(payload.client_id, "client")?;
        Ok(inner.warehouse_client_links.insert(|id| WarehouseClientLink {
            id,
            warehouse_id: payload.warehouse_id,
            client_id: payload.client_id,
            quantity_shipped: payload.quantity_shipped,
            delivery_service: payload.delivery_service.clone(),
            shipping_time: payload.shipping_time,
            delivery_time: payload.delivery_time,
            acceptable_delivery: payload.acceptable_delivery,
        }))
    }

    pub async fn list_warehouse_client_links(&self) -> Vec<WarehouseClientLink> {
        let inner = self.inner.read().await;
        inner.warehouse_client_links.iter().cloned().collect()
    }

    pub async fn get_warehouse_client_link(&self, id: i64) -> StoreResult<WarehouseClientLink> {
        let inner = self.inner.read().await;
        inner.warehouse_client_links.require(id, "warehouse-client link")
    }

    pub async fn update_warehouse_client_link(
        &self,
        id: i64,
        payload: WarehouseClientLinkPayload,
    ) -> StoreResult<WarehouseClientLink> {
        let mut inner = self.inner.write().await;
        inner.warehouse_client_links.ensure(id, "warehouse-client link")?;
        inner.warehouses.ensure(payload.warehouse_id, "warehouse")?;
        inner.clients.ensure(payload.client_id, "client")?;
        let link = WarehouseClientLink {
            id,
            warehouse_id: payload.warehouse_id,
            client_id: payload.client_id,
            quantity_shipped: payload.quantity_shipped,
            delivery_service: payload.delivery_service,
            shipping_time: payload.shipping_time,
            delivery_time: payload.delivery_time,
            acceptable_delivery: payload.acceptable_delivery,
        };
        inner.warehouse_client_links.put(id, link.clone());
        Ok(link)
    }

    pub async fn delete_warehouse_client_link(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .warehouse_client_links
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "warehouse-client link", id })
    }
}
