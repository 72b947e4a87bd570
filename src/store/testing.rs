use super::{LimsStore, StoreError, StoreResult};
use crate::models::{
    LabTest, LabTestPayload, SampleTestLink, SampleTestLinkPayload, TestEquipmentLink,
    TestEquipmentLinkPayload, TestReagentLink, TestReagentLinkPayload,
};

impl LimsStore {
    pub async fn create_test(&self, payload: LabTestPayload) -> StoreResult<LabTest> {
        let mut inner = self.inner.write().await;
        inner.users.ensure(payload.user_account_id, "user account")?;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        Ok(inner.tests.insert(|id| LabTest {
            id,
            user_account_id: payload.user_account_id,
            sop_id: payload.sop_id,
            min_acceptable_result: payload.min_acceptable_result,
            max_acceptable_result: payload.max_acceptable_result,
        }))
    }

    /// Lists tests, optionally narrowed to one performing analyst's
    /// user account.
    pub async fn list_tests(&self, analyst_id: Option<i64>) -> Vec<LabTest> {
        let inner = self.inner.read().await;
        inner
            .tests
            .iter()
            .filter(|t| analyst_id.is_none() || analyst_id == Some(t.user_account_id))
            .cloned()
            .collect()
    }

    pub async fn get_test(&self, id: i64) -> StoreResult<LabTest> {
        let inner = self.inner.read().await;
        inner.tests.require(id, "test")
    }

    pub async fn update_test(&self, id: i64, payload: LabTestPayload) -> StoreResult<LabTest> {
        let mut inner = self.inner.write().await;
        inner.tests.ensure(id, "test")?;
        inner.users.ensure(payload.user_account_id, "user account")?;
        inner.sops.ensure(payload.sop_id, "SOP")?;
        let test = LabTest {
            id,
            user_account_id: payload.user_account_id,
            sop_id: payload.sop_id,
            min_acceptable_result: payload.min_acceptable_result,
            max_acceptable_result: payload.max_acceptable_result,
        };
        inner.tests.put(id, test.clone());
        Ok(test)
    }

    pub async fn delete_test(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.tests.ensure(id, "test")?;
        inner.purge_test(id);
        Ok(())
    }

    pub async fn create_sample_test_link(
        &self,
        payload: SampleTestLinkPayload,
    ) -> StoreResult<SampleTestLink> {
        let mut inner = self.inner.write().await;
        inner.samples.ensure(payload.sample_id, "sample")?;
        inner.tests.ensure(payload.test_id, "test")?;
        Ok(inner.sample_test_links.insert(|id| SampleTestLink {
            id,
            sample_id: payload.sample_id,
            test_id: payload.test_id,
            testing_analyst: payload.testing_analyst.clone(),
            reviewing_analyst: payload.reviewing_analyst.clone(),
            test_result: payload.test_result,
            deadline: payload.deadline,
            pass_or_fail: payload.pass_or_fail,
        }))
    }

    pub async fn list_sample_test_links(&self) -> Vec<SampleTestLink> {
        let inner = self.inner.read().await;
        inner.sample_test_links.iter().cloned().collect()
    }

    pub async fn get_sample_test_link(&self, id: i64) -> StoreResult<SampleTestLink> {
        let inner = self.inner.read().await;
        inner.sample_test_links.require(id, "sample-test link")
    }

    pub async fn update_sample_test_link(
        &self,
        id: i64,
        payload: SampleTestLinkPayload,
    ) -> StoreResult<SampleTestLink> {
        let mut inner = self.inner.write().await;
        inner.sample_test_links.ensure(id, "sample-test link")?;
        inner.samples.ensure(payload.sample_id, "sample")?;
        inner.tests.ensure(payload.test_id, "test")?;
        let link = SampleTestLink {
            id,
            sample_id: payload.sample_id,
            test_id: payload.test_id,
            testing_analyst: payload.testing_analyst,
            reviewing_analyst: payload.reviewing_analyst,
            test_result: payload.test_result,
            deadline: payload.deadline,
            pass_or_fail: payload.pass_or_fail,
        };
        inner.sample_test_links.put(id, link.clone());
        Ok(link)
    }

    pub async fn delete_sample_test_link(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .sample_test_links
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "sample-test link", id })
    }

    pub async fn create_test_equipment_link(
        &self,
        payload: TestEquipmentLinkPayload,
    ) -> StoreResult<TestEquipmentLink> {
        let mut inner = self.inner.write().await;
        inner.tests.ensure(payload.test_id, "test")?;
        inner.equipment.ensure(payload.equipment_id, "equipment")?;
        Ok(inner.test_equipment_links.insert(|id| TestEquipmentLink {
            id,
            test_id: payload.test_id,
            equipment_id: payload.equipment_id,
        }))
    }

    pub async fn list_test_equipment_links(&self) -> Vec<TestEquipmentLink> {
        let inner = self.inner.read().await;
        inner.test_equipment_links.iter().cloned().collect()
    }

    pub async fn get_test_equipment_link(&self, id: i64) -> StoreResult<TestEquipmentLink> {
        let inner = self.inner.read().await;
        inner.test_equipment_links.require(id, "test-equipment link")
    }

    pub async fn update_test_equipment_link(
        &self,
        id: i64,
        payload: TestEquipmentLinkPayload,
    ) -> StoreResult<TestEquipmentLink> {
        let mut inner = self.inner.write().await;
        inner.test_equipment_links.ensure(id, "test-equipment link")?;
        inner.tests.ensure(payload.test_id, "test")?;
        inner.equipment.ensure(payload.equipment_id, "equipment")?;
        let link = TestEquipmentLink {
            id,
            test_id: payload.test_id,
            equipment_id: payload.equipment_id,
        };
        inner.test_equipment_links.put(id, link.clone());
        Ok(link)
    }

    pub async fn delete_test_equipment_link(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .test_equipment_links
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "test-equipment link", id })
    }

    pub async fn create_test_reagent_link(
        &self,
        payload: TestReagentLinkPayload,
    ) -> StoreResult<TestReagentLink> {
        let mut inner = self.inner.write().await;
        inner.tests.ensure(payload.test_id, "test")?;
        inner.reagents.ensure(payload.reagent_id, "reagent")?;
        Ok(inner.test_reagent_links.insert(|id| TestReagentLink {
            id,
            test_id: payload.test_id,
            reagent_id: payload.reagent_id,
            volume_used: payload.volume_used,
        }))
    }

    pub async fn list_test_reagent_links(&self) -> Vec<TestReagentLink> {
        let inner = self.inner.read().await;
        inner.test_reagent_links.iter().cloned().collect()
    }

    pub async fn get_test_reagent_link(&self, id: i64) -> StoreResult<TestReagentLink> {
        let inner = self.inner.read().await;
        inner.test_reagent_links.require(id, "test-reagent link")
    }

    pub async fn update_test_reagent_link(
        &self,
        id: i64,
        payload: TestReagentLinkPayload,
    ) -> StoreResult<TestReagentLink> {
        let mut inner = self.inner.write().await;
        inner.test_reagent_links.ensure(id, "test-reagent link")?;
        inner.tests.ensure(payload.test_id, "test")?;
        inner.reagents.ensure(payload.reagent_id, "reagent")?;
        let link = TestReagentLink {
            id,
            test_id: payload.test_id,
            reagent_id: payload.reagent_id,
            volume_used: payload.volume_used,
        };
        inner.test_reagent_links.put(id, link.clone());
        Ok(link)
    }

    pub async fn delete_test_reagent_link(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .test_reagent_links
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "test-reagent link", id })
    }
}
