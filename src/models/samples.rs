use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One-character sample type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleType {
    #[serde(rename = "I")]
    InProcess,
    #[serde(rename = "S")]
    Stability,
    #[serde(rename = "F")]
    FinishedProduct,
}

impl SampleType {
    /// Parses the wire discriminator. Anything outside {I, S, F} is
    /// rejected by the store as a validation failure.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "I" => Some(SampleType::InProcess),
            "S" => Some(SampleType::Stability),
            "F" => Some(SampleType::FinishedProduct),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SampleType::InProcess => "I",
            SampleType::Stability => "S",
            SampleType::FinishedProduct => "F",
        }
    }
}

/// Type-specific detail owned by a [`Sample`].
///
/// A sample always has exactly one detail record and its variant must
/// agree with `sample_type`; the store checks the pairing on every
/// create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SampleDetail {
    InProcess { time_sampled: DateTime<Utc> },
    Stability { stability_conditions: String },
    FinishedProduct { product_lot_number: i64 },
}

impl SampleDetail {
    pub fn sample_type(&self) -> SampleType {
        match self {
            SampleDetail::InProcess { .. } => SampleType::InProcess,
            SampleDetail::Stability { .. } => SampleType::Stability,
            SampleDetail::FinishedProduct { .. } => SampleType::FinishedProduct,
        }
    }
}

/// A tracked sample, stored in a warehouse at a location and governed
/// by an SOP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: i64,
    pub location_id: i64,
    pub warehouse_id: i64,
    pub sop_id: i64,
    pub product_name: String,
    pub product_stage: String,
    pub quantity: Decimal,
    pub time_received: DateTime<Utc>,
    pub sample_type: SampleType,
    pub storage_conditions: String,
    pub detail: SampleDetail,
}

/// Payload for creating or replacing a sample.
///
/// `sample_type` is accepted as the raw one-character code so that an
/// out-of-domain value surfaces as a domain validation error rather than
/// a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SamplePayload {
    pub location_id: i64,
    pub warehouse_id: i64,
    pub sop_id: i64,
    pub product_name: String,
    pub product_stage: String,
    pub quantity: Decimal,
    pub time_received: DateTime<Utc>,
    pub sample_type: String,
    pub storage_conditions: String,
    pub detail: SampleDetail,
}

/// Who received and (optionally) aliquoted a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSampleAction {
    pub id: i64,
    pub user_account_id: i64,
    pub sample_id: i64,
    pub receiving_analyst: String,
    /// Absent while the sample has not yet been aliquoted.
    pub aliquoting_analyst: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSampleActionPayload {
    pub user_account_id: i64,
    pub sample_id: i64,
    pub receiving_analyst: String,
    #[serde(default)]
    pub aliquoting_analyst: Option<String>,
}
