use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A physical location. (location_type, room_number) pairs are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub location_type: String,
    pub room_number: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationPayload {
    pub location_type: String,
    pub room_number: i32,
}

/// Equipment used for testing and sample manipulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub location_id: i64,
    pub sop_id: i64,
    pub equipment_name: String,
    pub min_use_range: Decimal,
    pub max_use_range: Decimal,
    pub in_use: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentPayload {
    pub location_id: i64,
    pub sop_id: i64,
    pub equipment_name: String,
    pub min_use_range: Decimal,
    pub max_use_range: Decimal,
    pub in_use: bool,
}

/// Service event for one piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceLog {
    pub id: i64,
    pub equipment_id: i64,
    pub sop_id: i64,
    pub service_date: NaiveDate,
    pub service_description: String,
    pub service_interval: String,
    pub next_service_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceLogPayload {
    pub equipment_id: i64,
    pub sop_id: i64,
    pub service_date: NaiveDate,
    pub service_description: String,
    pub service_interval: String,
    pub next_service_date: NaiveDate,
}
