//! Authentication and profile endpoints

use std::sync::Arc;

use smartpath_domain::{
    ApiResult, LoginRequest, ProfilePicture, ProfileUpdate, RegisterRequest, Registration,
    TokenResponse, UserProfile,
};
use tracing::{debug, info, instrument};

use crate::api::client::ApiClient;
use crate::api::request::FilePart;

/// Account lifecycle: registration, login/logout and the profile
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Create an account. Stores the credential when the server issues one
    /// straight away.
    ///
    /// # Errors
    ///
    /// Returns error if the email is taken or the payload fails validation
    #[instrument(skip_all)]
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<Registration> {
        let registration: Option<Registration> =
            self.client.post_public("/auth/register", request).await?;
        let registration = registration.unwrap_or_default();

        if let Some(token) = registration.access_token.as_deref() {
            self.client.tokens().set(Some(token));
        }

        info!(user_id = ?registration.user_id, "account registered");
        Ok(registration)
    }

    /// Exchange credentials for a bearer token and store it
    ///
    /// # Errors
    ///
    /// Returns error if the credentials are rejected
    #[instrument(skip_all)]
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<TokenResponse> {
        let token: TokenResponse = self.client.post_public("/auth/login", request).await?;
        self.client.tokens().set(Some(&token.access_token));

        info!("logged in");
        Ok(token)
    }

    /// Forget the stored credential. Local only; the server keeps no session.
    pub fn logout(&self) {
        self.client.tokens().clear();
        debug!("logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.tokens().is_authenticated()
    }

    #[instrument(skip(self))]
    pub async fn profile(&self) -> ApiResult<UserProfile> {
        self.client.get("/auth/profile").await
    }

    #[instrument(skip_all)]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<UserProfile> {
        self.client.put("/auth/profile", update).await
    }

    /// Multipart upload under the upload deadline
    #[instrument(skip_all, fields(file_name = %picture.file_name))]
    pub async fn upload_profile_picture(&self, picture: FilePart) -> ApiResult<ProfilePicture> {
        self.client
            .upload_file("/auth/profile-picture", picture, std::iter::empty::<(&str, &str)>())
            .await
    }
}
