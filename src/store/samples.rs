use tracing::info;

use super::{LimsStore, StoreError, StoreInner, StoreResult};
use crate::models::{
    Sample, SamplePayload, SampleType, UserSampleAction, UserSampleActionPayload,
};

/// Resolves the one-character discriminator and checks that the supplied
/// detail variant agrees with it. The store owns this pairing because no
/// schema-level constraint can express it.
fn check_sample(inner: &StoreInner, payload: &SamplePayload) -> StoreResult<SampleType> {
    inner.locations.ensure(payload.location_id, "location")?;
    inner.warehouses.ensure(payload.warehouse_id, "warehouse")?;
    inner.sops.ensure(payload.sop_id, "SOP")?;
    let sample_type = SampleType::parse(&payload.sample_type).ok_or_else(|| {
        StoreError::Validation(format!(
            "sample_type must be one of I, S, F; got '{}'",
            payload.sample_type
        ))
    })?;
    if payload.detail.sample_type() != sample_type {
        return Err(StoreError::Validation(format!(
            "sample detail does not match sample_type '{}'",
            sample_type.code()
        )));
    }
    Ok(sample_type)
}

impl LimsStore {
    pub async fn create_sample(&self, payload: SamplePayload) -> StoreResult<Sample> {
        let mut inner = self.inner.write().await;
        let sample_type = check_sample(&inner, &payload)?;
        let sample = inner.samples.insert(|id| Sample {
            id,
            location_id: payload.location_id,
            warehouse_id: payload.warehouse_id,
            sop_id: payload.sop_id,
            product_name: payload.product_name.clone(),
            product_stage: payload.product_stage.clone(),
            quantity: payload.quantity,
            time_received: payload.time_received,
            sample_type,
            storage_conditions: payload.storage_conditions.clone(),
            detail: payload.detail.clone(),
        });
        info!(id = sample.id, kind = sample_type.code(), "created sample");
        Ok(sample)
    }

    /// Lists samples, optionally narrowed to one warehouse.
    pub async fn list_samples(&self, warehouse_id: Option<i64>) -> Vec<Sample> {
        let inner = self.inner.read().await;
        inner
            .samples
            .iter()
            .filter(|s| warehouse_id.is_none() || warehouse_id == Some(s.warehouse_id))
            .cloned()
            .collect()
    }

    pub async fn get_sample(&self, id: i64) -> StoreResult<Sample> {
        let inner = self.inner.read().await;
        inner.samples.require(id, "sample")
    }

    pub async fn update_sample(&self, id: i64, payload: SamplePayload) -> StoreResult<Sample> {
        let mut inner = self.inner.write().await;
        inner.samples.ensure(id, "sample")?;
        let sample_type = check_sample(&inner, &payload)?;
        let sample = Sample {
            id,
            location_id: payload.location_id,
            warehouse_id: payload.warehouse_id,
            sop_id: payload.sop_id,
            product_name: payload.product_name,
            product_stage: payload.product_stage,
            quantity: payload.quantity,
            time_received: payload.time_received,
            sample_type,
            storage_conditions: payload.storage_conditions,
            detail: payload.detail,
        };
        inner.samples.put(id, sample.clone());
        Ok(sample)
    }

    pub async fn delete_sample(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.samples.ensure(id, "sample")?;
        inner.purge_sample(id);
        Ok(())
    }

    pub async fn create_sample_action(
        &self,
        payload: UserSampleActionPayload,
    ) -> StoreResult<UserSampleAction> {
        let mut inner = self.inner.write().await;
        inner.users.ensure(payload.user_account_id, "user account")?;
        inner.samples.ensure(payload.sample_id, "sample")?;
        if payload.receiving_analyst.trim().is_empty() {
            return Err(StoreError::Validation("receiving_analyst must not be empty".into()));
        }
        Ok(inner.user_sample_actions.insert(|id| UserSampleAction {
            id,
            user_account_id: payload.user_account_id,
            sample_id: payload.sample_id,
            receiving_analyst: payload.receiving_analyst.clone(),
            aliquoting_analyst: payload.aliquoting_analyst.clone(),
        }))
    }

    pub async fn list_sample_actions(&self) -> Vec<UserSampleAction> {
        let inner = self.inner.read().await;
        inner.user_sample_actions.iter().cloned().collect()
    }

    pub async fn get_sample_action(&self, id: i64) -> StoreResult<UserSampleAction> {
        let inner = self.inner.read().await;
        inner.user_sample_actions.require(id, "sample action")
    }

    pub async fn update_sample_action(
        &self,
        id: i64,
        payload: UserSampleActionPayload,
    ) -> StoreResult<UserSampleAction> {
        let mut inner = self.inner.write().await;
        inner.user_sample_actions.ensure(id, "sample action")?;
        inner.users.ensure(payload.user_account_id, "user account")?;
        inner.samples.ensure(payload.sample_id, "sample")?;
        let action = UserSampleAction {
            id,
            user_account_id: payload.user_account_id,
            sample_id: payload.sample_id,
            receiving_analyst: payload.receiving_analyst,
            aliquoting_analyst: payload.aliquoting_analyst,
        };
        inner.user_sample_actions.put(id, action.clone());
        Ok(action)
    }

    pub async fn delete_sample_action(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .user_sample_actions
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "sample action", id })
    }
}
