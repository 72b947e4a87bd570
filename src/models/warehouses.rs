use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An external customer or business partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub client_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientPayload {
    pub client_name: String,
}

/// A storage facility. (facility, company) pairs are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub sop_id: i64,
    pub warehouse_technician: String,
    pub warehouse_facility: String,
    pub warehouse_company: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WarehousePayload {
    pub sop_id: i64,
    pub warehouse_technician: String,
    pub warehouse_facility: String,
    pub warehouse_company: String,
}

/// Shipment record between a warehouse and a client.
///
/// Resolves the many-to-many relationship but carries its own shipment
/// attributes, so it is a full entity rather than a bare join row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseClientLink {
    pub id: i64,
    pub warehouse_id: i64,
    pub client_id: i64,
    pub quantity_shipped: Decimal,
    pub delivery_service: String,
    pub shipping_time: DateTime<Utc>,
    pub delivery_time: DateTime<Utc>,
    pub acceptable_delivery: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WarehouseClientLinkPayload {
    pub warehouse_id: i64,
    pub client_id: i64,
    pub quantity_shipped: Decimal,
    pub delivery_service: String,
    pub shipping_time: DateTime<Utc>,
    pub delivery_time: DateTime<Utc>,
    pub acceptable_delivery: bool,
}
