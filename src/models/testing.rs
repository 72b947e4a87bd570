use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A laboratory test performed under an SOP by a user account.
///
/// The acceptable-result range is optional; when both bounds are absent
/// no numeric bound applies to results of this test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
    pub id: i64,
    pub user_account_id: i64,
    pub sop_id: i64,
    pub min_acceptable_result: Option<Decimal>,
    pub max_acceptable_result: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabTestPayload {
    pub user_account_id: i64,
    pub sop_id: i64,
    #[serde(default)]
    pub min_acceptable_result: Option<Decimal>,
    #[serde(default)]
    pub max_acceptable_result: Option<Decimal>,
}

/// Result of running one test against one sample.
///
/// `pass_or_fail` is recorded as submitted; this layer never derives it
/// from the test's acceptable range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleTestLink {
    pub id: i64,
    pub sample_id: i64,
    pub test_id: i64,
    pub testing_analyst: String,
    pub reviewing_analyst: String,
    pub test_result: Decimal,
    pub deadline: DateTime<Utc>,
    pub pass_or_fail: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleTestLinkPayload {
    pub sample_id: i64,
    pub test_id: i64,
    pub testing_analyst: String,
    pub reviewing_analyst: String,
    pub test_result: Decimal,
    pub deadline: DateTime<Utc>,
    pub pass_or_fail: bool,
}

/// Join row recording which equipment a test used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestEquipmentLink {
    pub id: i64,
    pub test_id: i64,
    pub equipment_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestEquipmentLinkPayload {
    pub test_id: i64,
    pub equipment_id: i64,
}

/// Join row recording which reagent a test used, and how much of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestReagentLink {
    pub id: i64,
    pub test_id: i64,
    pub reagent_id: i64,
    pub volume_used: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestReagentLinkPayload {
    pub test_id: i64,
    pub reagent_id: i64,
    pub volume_used: Decimal,
}
