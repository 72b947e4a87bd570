use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard Operating Procedure metadata.
///
/// Warehouses, equipment, tests, reagents, maintenance logs and samples
/// all reference exactly one SOP, so deleting an SOP tears down a large
/// dependent subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sop {
    pub id: i64,
    pub sop_name: String,
    pub version_number: Decimal,
    pub effective_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SopPayload {
    pub sop_name: String,
    pub version_number: Decimal,
    pub effective_date: NaiveDate,
}

/// Immutable history record of an SOP version bump. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionChange {
    pub id: i64,
    pub sop_id: i64,
    pub old_version_number: Decimal,
    pub new_version_number: Decimal,
    pub old_effective_date: NaiveDate,
    pub new_effective_date: NaiveDate,
    pub change_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionChangePayload {
    pub sop_id: i64,
    pub old_version_number: Decimal,
    pub new_version_number: Decimal,
    pub old_effective_date: NaiveDate,
    pub new_effective_date: NaiveDate,
    pub change_date: NaiveDate,
}

/// QA workflow record for one SOP revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSopAction {
    pub id: i64,
    pub user_account_id: i64,
    pub sop_id: i64,
    pub qa_author: String,
    pub qa_reviewer: String,
    pub qa_approver: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSopActionPayload {
    pub user_account_id: i64,
    pub sop_id: i64,
    pub qa_author: String,
    pub qa_reviewer: String,
    pub qa_approver: String,
}
