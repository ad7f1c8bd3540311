//! Invites and teacher/parent ↔ student relationships

use std::sync::Arc;

use smartpath_domain::{AcceptInvite, ApiResult, Invite, InviteRequest, RawPayload, Relationship};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::client::ApiClient;

pub struct RelationshipsApi {
    client: Arc<ApiClient>,
}

impl RelationshipsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[instrument(skip_all, fields(relationship = %request.relationship_type))]
    pub async fn send_invite(&self, request: &InviteRequest) -> ApiResult<Invite> {
        let invite: Invite = self.client.post("/invite", request).await?;
        debug!(invite_id = invite.invite_id, "invite sent");
        Ok(invite)
    }

    /// Redeem an invite code; returns the new link
    #[instrument(skip_all)]
    pub async fn accept_invite(&self, invite_code: &str) -> ApiResult<Relationship> {
        let body = AcceptInvite { invite_code: invite_code.to_string() };
        self.client.post("/invite/accept", &body).await
    }

    /// Withdraw a pending invite
    #[instrument(skip_all)]
    pub async fn cancel_invite(&self, invite_code: &str) -> ApiResult<()> {
        let path = format!("/invite/{}", encode(invite_code));
        let _: RawPayload = self.client.delete(&path).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_invites(&self) -> ApiResult<Vec<Invite>> {
        self.client.get("/invite").await
    }

    #[instrument(skip(self))]
    pub async fn list_relationships(&self) -> ApiResult<Vec<Relationship>> {
        self.client.get("/relationships").await
    }

    #[instrument(skip(self))]
    pub async fn remove_relationship(&self, relationship_id: i64) -> ApiResult<()> {
        let _: RawPayload = self.client.delete(&format!("/relationships/{relationship_id}")).await?;
        Ok(())
    }
}
