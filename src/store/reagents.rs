use super::{LimsStore, StoreError, StoreResult};
use crate::models::{Reagent, ReagentPayload, UserReagentAction, UserReagentActionPayload};

impl LimsStore {
    pub async fn create_reagent(&self, payload: ReagentPayload) -> StoreResult<Reagent> {
        let mut inner = self.inner.write().await;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        Ok(inner.reagents.insert(|id| Reagent {
            id,
            sop_id: payload.sop_id,
            reagent_name: payload.reagent_name.clone(),
            cas_number: payload.cas_number.clone(),
            lot_number: payload.lot_number.clone(),
            vendor: payload.vendor.clone(),
            manufacturing_date: payload.manufacturing_date,
            expiration_date: payload.expiration_date,
        }))
    }

    pub async fn list_reagents(&self) -> Vec<Reagent> {
        let inner = self.inner.read().await;
        inner.reagents.iter().cloned().collect()
    }

    pub async fn get_reagent(&self, id: i64) -> StoreResult<Reagent> {
        let inner = self.inner.read().await;
        inner.reagents.require(id, "reagent")
    }

    pub async fn update_reagent(&self, id: i64, payload: ReagentPayload) -> StoreResult<Reagent> {
        let mut inner = self.inner.write().await;
        inner.reagents.ensure(id, "reagent")?;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        let reagent = Reagent {
            id,
            sop_id: payload.sop_id,
            reagent_name: payload.reagent_name,
            cas_number: payload.cas_number,
            lot_number: payload.lot_number,
            vendor: payload.vendor,
            manufacturing_date: payload.manufacturing_date,
            expiration_date: payload.expiration_date,
        };
        inner.reagents.put(id, reagent.clone());
        Ok(reagent)
    }

    pub async fn delete_reagent(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.reagents.ensure(id, "reagent")?;
        inner.purge_reagent(id);
        Ok(())
    }

    pub async fn create_reagent_action(
        &self,
        payload: UserReagentActionPayload,
    ) -> StoreResult<UserReagentAction> {
        let mut inner = self.inner.write().await;
        inner.users.ensure(payload.user_account_id, "user account")?;
        inner.reagents.ensure(payload.reagent_id, "reagent")?;
        Ok(inner.user_reagent_actions.insert(|id| UserReagentAction {
            id,
            user_account_id: payload.user_account_id,
            reagent_id: payload.reagent_id,
            reagent_manager: payload.reagent_manager.clone(),
        }))
    }

    pub async fn list_reagent_actions(&self) -> Vec<UserReagentAction> {
        let inner = self.inner.read().await;
        inner.user_reagent_actions.iter().cloned().collect()
    }

    pub async fn get_reagent_action(&self, id: i64) -> StoreResult<UserReagentAction> {
        let inner = self.inner.read().await;
        inner.user_reagent_actions.require(id, "reagent action")
    }

    pub async fn update_reagent_action(
        &self,
        id: i64,
        payload: UserReagentActionPayload,
    ) -> StoreResult<UserReagentAction> {
        let mut inner = self.inner.write().await;
        inner.user_reagent_actions.ensure(id, "reagent action")?;
        inner.users.ensure(payload.user_account_id, "user account")?;
        inner.reagents.ensure(payload.reagent_id, "reagent")?;
        let action = UserReagentAction {
            id,
            user_account_id: payload.user_account_id,
            reagent_id: payload.reagent_id,
            reagent_manager: payload.reagent_manager,
        };
        inner.user_reagent_actions.put(id, action.clone());
        Ok(action)
    }

    pub async fn delete_reagent_action(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .user_reagent_actions
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "reagent action", id })
    }
}
