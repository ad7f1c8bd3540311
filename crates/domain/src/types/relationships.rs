//! Teacher/parent ↔ student links and the invites that create them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auth::UserType;
use super::common::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Cancelled,
    Expired,
}

crate::impl_wire_enum_conversions!(InviteStatus {
    Pending => "pending",
    Accepted => "accepted",
    Cancelled => "cancelled",
    Expired => "expired",
});

/// `POST /invite`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
    /// Role the invitee is linked as
    pub relationship_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
    pub invite_id: i64,
    pub email: String,
    pub relationship_type: UserType,
    pub status: InviteStatus,
    #[serde(default)]
    pub invite_code: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// `POST /invite/accept`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptInvite {
    pub invite_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub relationship_id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    pub relationship_type: UserType,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_request_wire_shape() {
        let request = InviteRequest {
            email: "parent@example.com".into(),
            relationship_type: UserType::Parent,
            message: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "parent@example.com", "relationship_type": "parent"})
        );
    }
}
