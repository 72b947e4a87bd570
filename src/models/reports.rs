use serde::{Deserialize, Serialize};

/// One row of the warehouse-to-client fanout dashboard: how many
/// distinct clients a warehouse facility has shipped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseClientCount {
    pub warehouse_facility: String,
    pub total_clients: u64,
}

/// One row of the SOP version-cadence dashboard: the mean number of
/// whole days between old and new effective dates across an SOP's
/// version changes.
///
/// Day deltas are exact integers; only the mean is floating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SopVersionCadence {
    pub sop_name: String,
    pub average_days_between_effective_dates: f64,
}
