use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A chemical reagent used within tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reagent {
    pub id: i64,
    pub sop_id: i64,
    pub reagent_name: String,
    pub cas_number: String,
    pub lot_number: String,
    pub vendor: String,
    pub manufacturing_date: NaiveDate,
    pub expiration_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReagentPayload {
    pub sop_id: i64,
    pub reagent_name: String,
    pub cas_number: String,
    pub lot_number: String,
    pub vendor: String,
    pub manufacturing_date: NaiveDate,
    pub expiration_date: NaiveDate,
}

/// Who manages a given reagent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReagentAction {
    pub id: i64,
    pub user_account_id: i64,
    pub reagent_id: i64,
    pub reagent_manager: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserReagentActionPayload {
    pub user_account_id: i64,
    pub reagent_id: i64,
    pub reagent_manager: String,
}
