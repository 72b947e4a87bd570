use tracing::info;

use super::{LimsStore, StoreError, StoreInner, StoreResult};
use crate::models::{UserAccount, UserAccountPayload, UserRole};

/// Supervisor name stamped on analyst details created from the role
/// flag; edited afterwards through the role sub-resource.
const DEFAULT_ANALYST_SUPERVISOR: &str = "Default Supervisor";

fn check_payload(inner: &StoreInner, payload: &UserAccountPayload, exclude_id: i64) -> StoreResult<()> {
    if payload.account_username.trim().is_empty() {
        return Err(StoreError::Validation("account_username must not be empty".into()));
    }
    if !payload.email.contains('@') {
        return Err(StoreError::Validation(format!(
            "email '{}' is not a valid address",
            payload.email
        )));
    }
    let taken = inner
        .users
        .iter()
        .any(|u| u.account_username == payload.account_username && u.id != exclude_id);
    if taken {
        return Err(StoreError::Conflict(format!(
            "username '{}' is already in use",
            payload.account_username
        )));
    }
    Ok(())
}

/// Derives the role detail from the account's role flags.
///
/// The analyst branch deliberately wins when both flags are set: an
/// account flagged analyst and administrator gets an analyst detail and
/// no administrator detail.
fn derive_role(payload: &UserAccountPayload) -> Option<UserRole> {
    if payload.is_analyst {
        Some(UserRole::Analyst {
            access_level: 1,
            analyst_supervisor: DEFAULT_ANALYST_SUPERVISOR.to_string(),
        })
    } else if payload.is_administrator {
        Some(UserRole::Administrator { is_supervisor: false })
    } else {
        None
    }
}

impl LimsStore {
    pub async fn create_user(&self, payload: UserAccountPayload) -> StoreResult<UserAccount> {
        let mut inner = self.inner.write().await;
        check_payload(&inner, &payload, 0)?;
        let role = derive_role(&payload);
        let user = inner.users.insert(|id| UserAccount {
            id,
            account_username: payload.account_username.clone(),
            first_name: payload.first_name.clone(),
            last_name: payload.last_name.clone(),
            phone: payload.phone.clone(),
            email: payload.email.clone(),
            department: payload.department.clone(),
            training_completed: payload.training_completed,
            is_analyst: payload.is_analyst,
            is_administrator: payload.is_administrator,
            auth_subject: payload.auth_subject.clone(),
            role: role.clone(),
        });
        info!(id = user.id, username = %user.account_username, "created user account");
        Ok(user)
    }

    /// Lists accounts, optionally narrowed to the one linked to an
    /// identity-provider subject.
    pub async fn list_users(&self, subject: Option<&str>) -> Vec<UserAccount> {
        let inner = self.inner.read().await;
        inner
            .users
            .iter()
            .filter(|u| subject.is_none() || u.auth_subject.as_deref() == subject)
            .cloned()
            .collect()
    }

    pub async fn get_user(&self, id: i64) -> StoreResult<UserAccount> {
        let inner = self.inner.read().await;
        inner.users.require(id, "user account")
    }

    /// Replaces the account's scalar fields. The role detail is left
    /// untouched even when the role flags change; it is managed through
    /// [`LimsStore::set_user_role`].
    pub async fn update_user(&self, id: i64, payload: UserAccountPayload) -> StoreResult<UserAccount> {
        let mut inner = self.inner.write().await;
        let existing = inner.users.require(id, "user account")?;
        check_payload(&inner, &payload, id)?;
        let user = UserAccount {
            id,
            account_username: payload.account_username,
            first_name: payload.first_name,
            last_name: payload.last_name,
            phone: payload.phone,
            email: payload.email,
            department: payload.department,
            training_completed: payload.training_completed,
            is_analyst: payload.is_analyst,
            is_administrator: payload.is_administrator,
            auth_subject: payload.auth_subject,
            role: existing.role,
        };
        inner.users.put(id, user.clone());
        Ok(user)
    }

    pub async fn delete_user(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.users.ensure(id, "user account")?;
        inner.purge_user(id);
        info!(id, "deleted user account and dependents");
        Ok(())
    }

    pub async fn get_user_role(&self, id: i64) -> StoreResult<Option<UserRole>> {
        let inner = self.inner.read().await;
        Ok(inner.users.require(id, "user account")?.role)
    }

    /// Replaces the role detail. The variant must agree with the
    /// account's role flags.
    pub async fn set_user_role(&self, id: i64, role: UserRole) -> StoreResult<UserAccount> {
        let mut inner = self.inner.write().await;
        let mut user = inner.users.require(id, "user account")?;
        match &role {
            UserRole::Analyst { access_level, .. } => {
                if !user.is_analyst {
                    return Err(StoreError::Validation(
                        "account is not flagged as an analyst".into(),
                    ));
                }
                if *access_level < 1 {
                    return Err(StoreError::Validation(
                        "access_level must be a positive integer".into(),
                    ));
                }
            }
            UserRole::Administrator { .. } => {
                if !user.is_administrator {
                    return Err(StoreError::Validation(
                        "account is not flagged as an administrator".into(),
                    ));
                }
            }
        }
        user.role = Some(role);
        inner.users.put(id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(username: &str, analyst: bool, admin: bool) -> UserAccountPayload {
        UserAccountPayload {
            account_username: username.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Park".to_string(),
            phone: "555-0100".to_string(),
            email: "ada@lab.example".to_string(),
            department: "QC".to_string(),
            training_completed: true,
            is_analyst: analyst,
            is_administrator: admin,
            auth_subject: None,
        }
    }

    #[tokio::test]
    async fn analyst_flag_wins_over_administrator_flag() {
        let store = LimsStore::new();
        let user = store.create_user(payload("both", true, true)).await.unwrap();
        match user.role {
            Some(UserRole::Analyst { access_level, ref analyst_supervisor }) => {
                assert_eq!(access_level, 1);
                assert_eq!(analyst_supervisor, DEFAULT_ANALYST_SUPERVISOR);
            }
            other => panic!("expected analyst detail, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn administrator_detail_defaults_to_non_supervisor() {
        let store = LimsStore::new();
        let user = store.create_user(payload("admin", false, true)).await.unwrap();
        assert_eq!(user.role, Some(UserRole::Administrator { is_supervisor: false }));
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let store = LimsStore::new();
        store.create_user(payload("dup", false, false)).await.unwrap();
        let err = store.create_user(payload("dup", false, false)).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn role_update_must_match_flags() {
        let store = LimsStore::new();
        let user = store.create_user(payload("plain", false, false)).await.unwrap();
        let err = store
            .set_user_role(
                user.id,
                UserRole::Analyst { access_level: 2, analyst_supervisor: "Kim".to_string() },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
