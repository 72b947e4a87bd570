use tracing::info;

use super::{check_version_scale, LimsStore, StoreError, StoreInner, StoreResult};
use crate::models::{
    Sop, SopPayload, UserSopAction, UserSopActionPayload, VersionChange, VersionChangePayload,
};

fn check_sop(inner: &StoreInner, payload: &SopPayload, exclude_id: i64) -> StoreResult<()> {
    if payload.sop_name.trim().is_empty() {
        return Err(StoreError::Validation("sop_name must not be empty".into()));
    }
    check_version_scale("version_number", payload.version_number)?;
    let taken = inner
        .sops
        .iter()
        .any(|s| s.sop_name == payload.sop_name && s.id != exclude_id);
    if taken {
        return Err(StoreError::Conflict(format!(
            "SOP name '{}' is already in use",
            payload.sop_name
        )));
    }
    Ok(())
}

impl LimsStore {
    pub async fn create_sop(&self, payload: SopPayload) -> StoreResult<Sop> {
        let mut inner = self.inner.write().await;
        check_sop(&inner, &payload, 0)?;
        let sop = inner.sops.insert(|id| Sop {
            id,
            sop_name: payload.sop_name.clone(),
            version_number: payload.version_number,
            effective_date: payload.effective_date,
        });
        info!(id = sop.id, name = %sop.sop_name, "created SOP");
        Ok(sop)
    }

    pub async fn list_sops(&self) -> Vec<Sop> {
        let inner = self.inner.read().await;
        inner.sops.iter().cloned().collect()
    }

    pub async fn get_sop(&self, id: i64) -> StoreResult<Sop> {
        let inner = self.inner.read().await;
        inner.sops.require(id, "SOP")
    }

    pub async fn update_sop(&self, id: i64, payload: SopPayload) -> StoreResult<Sop> {
        let mut inner = self.inner.write().await;
        inner.sops.ensure(id, "SOP")?;
        check_sop(&inner, &payload, id)?;
        let sop = Sop {
            id,
            sop_name: payload.sop_name,
            version_number: payload.version_number,
            effective_date: payload.effective_date,
        };
        inner.sops.put(id, sop.clone());
        Ok(sop)
    }

    pub async fn delete_sop(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.sops.ensure(id, "SOP")?;
        inner.purge_sop(id);
        info!(id, "deleted SOP and dependents");
        Ok(())
    }

    // Version changes are append-only history: create, read and cascade
    // away with their SOP, but never update.

    pub async fn create_version_change(
        &self,
        payload: VersionChangePayload,
    ) -> StoreResult<VersionChange> {
        let mut inner = self.inner.write().await;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        check_version_scale("old_version_number", payload.old_version_number)?;
        check_version_scale("new_version_number", payload.new_version_number)?;
        Ok(inner.version_changes.insert(|id| VersionChange {
            id,
            sop_id: payload.sop_id,
            old_version_number: payload.old_version_number,
            new_version_number: payload.new_version_number,
            old_effective_date: payload.old_effective_date,
            new_effective_date: payload.new_effective_date,
            change_date: payload.change_date,
        }))
    }

    pub async fn list_version_changes(&self) -> Vec<VersionChange> {
        let inner = self.inner.read().await;
        inner.version_changes.iter().cloned().collect()
    }

    pub async fn get_version_change(&self, id: i64) -> StoreResult<VersionChange> {
        let inner = self.inner.read().await;
        inner.version_changes.require(id, "version change")
    }

    pub async fn delete_version_change(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .version_changes
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "version change", id })
    }

    pub async fn create_sop_action(
        &self,
        payload: UserSopActionPayload,
    ) -> StoreResult<UserSopAction> {
        let mut inner = self.inner.write().await;
        inner.users.ensure(payload.user_account_id, "user account")?;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        Ok(inner.sop_actions.insert(|id| UserSopAction {
            id,
            user_account_id: payload.user_account_id,
            sop_id: payload.sop_id,
            qa_author: payload.qa_author.clone(),
            qa_reviewer: payload.qa_reviewer.clone(),
            qa_approver: payload.qa_approver.clone(),
        }))
    }

    pub async fn list_sop_actions(&self) -> Vec<UserSopAction> {
        let inner = self.inner.read().await;
        inner.sop_actions.iter().cloned().collect()
    }

    pub async fn get_sop_action(&self, id: i64) -> StoreResult<UserSopAction> {
        let inner = self.inner.read().await;
        inner.sop_actions.require(id, "SOP action")
    }

    pub async fn update_sop_action(
        &self,
        id: i64,
        payload: UserSopActionPayload,
    ) -> StoreResult<UserSopAction> {
        let mut inner = self.inner.write().await;
        inner.sop_actions.ensure(id, "SOP action")?;
        inner.users.ensure(payload.user_account_id, "user account")?;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        let action = UserSopAction {
            id,
            user_account_id: payload.user_account_id,
            sop_id: payload.sop_id,
            qa_author: payload.qa_author,
            qa_reviewer: payload.qa_reviewer,
            qa_approver: payload.qa_approver,
        };
        inner.sop_actions.put(id, action.clone());
        Ok(action)
    }

    pub async fn delete_sop_action(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .sop_actions
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "SOP action", id })
    }
}
