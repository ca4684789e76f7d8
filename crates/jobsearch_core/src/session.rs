use serde::{Deserialize, Serialize};

pub type UserId = u64;

/// Authenticated user as returned by `/auth/login`.
///
/// Unknown fields are kept so the identity header carries the object back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_company: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn display_name(&self) -> String {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .or(self.email.as_deref())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("user #{}", self.id))
    }

    /// Admins and companies may edit postings.
    pub fn can_manage_postings(&self) -> bool {
        self.is_admin || self.is_company
    }
}

/// Read-only identity context handed to the state machine and the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Session {
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}
