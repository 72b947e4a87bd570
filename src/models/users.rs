use serde::{Deserialize, Serialize};

/// Role-specific detail owned by a [`UserAccount`].
///
/// Modeled as a tagged variant rather than separate analyst/administrator
/// tables so an account can never carry more than one detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserRole {
    Analyst {
        access_level: u8,
        analyst_supervisor: String,
    },
    Administrator {
        is_supervisor: bool,
    },
}

impl UserRole {
    pub fn kind(&self) -> &'static str {
        match self {
            UserRole::Analyst { .. } => "analyst",
            UserRole::Administrator { .. } => "administrator",
        }
    }
}

/// A user of the laboratory system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub account_username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub training_completed: bool,
    pub is_analyst: bool,
    pub is_administrator: bool,
    /// Subject identifier of the linked identity-provider account, if any.
    pub auth_subject: Option<String>,
    pub role: Option<UserRole>,
}

/// Payload for creating or replacing a user account.
///
/// The role detail is never supplied here: it is derived from the role
/// flags at creation time and edited through the role sub-resource.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAccountPayload {
    pub account_username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub training_completed: bool,
    pub is_analyst: bool,
    pub is_administrator: bool,
    #[serde(default)]
    pub auth_subject: Option<String>,
}
