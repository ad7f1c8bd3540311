//! Authentication and profile payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::timestamp;

/// Account role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Teacher,
    Parent,
    Admin,
}

crate::impl_wire_enum_conversions!(UserType {
    Student => "student",
    Teacher => "teacher",
    Parent => "parent",
    Admin => "admin",
});

/// National curriculum the student follows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurriculumType {
    #[default]
    #[serde(rename = "CBC")]
    Cbc,
    #[serde(rename = "8-4-4")]
    EightFourFour,
}

crate::impl_wire_enum_conversions!(CurriculumType {
    Cbc => "CBC",
    EightFourFour => "8-4-4",
});

/// `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<u8>,
    #[serde(default)]
    pub curriculum_type: CurriculumType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
}

/// Normalized registration payload.
///
/// The server wraps `{user_id}` in a message envelope; some deployments also
/// issue a token straight away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub access_token: Option<String>,
}

/// `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

/// Bearer credential issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// `GET /auth/profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub grade_level: Option<u8>,
    #[serde(default)]
    pub curriculum_type: CurriculumType,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    /// Server-relative path; resolve with `ClientConfig::resolve_media_url`
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// `PUT /auth/profile`; only populated fields are sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curriculum_type: Option<CurriculumType>,
}

/// `POST /auth/profile-picture`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePicture {
    #[serde(default, alias = "profile_picture")]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_omits_empty_optionals() {
        let request = RegisterRequest {
            email: "a@b.com".into(),
            password: "secret123".into(),
            full_name: "Amina Otieno".into(),
            user_type: UserType::Student,
            grade_level: Some(10),
            curriculum_type: CurriculumType::EightFourFour,
            phone_number: None,
            school_name: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["curriculum_type"], "8-4-4");
        assert_eq!(json["user_type"], "student");
        assert!(json.get("phone_number").is_none());
    }

    #[test]
    fn test_profile_parses_server_shape() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"user_id":7,"email":"a@b.com","full_name":"Amina","user_type":"parent",
                "grade_level":null,"curriculum_type":"CBC","phone_number":null,
                "school_name":"Alliance","created_at":"2024-02-01T09:00:00"}"#,
        )
        .unwrap();
        assert_eq!(profile.user_type, UserType::Parent);
        assert_eq!(profile.curriculum_type, CurriculumType::Cbc);
        assert!(profile.profile_picture.is_none());
    }

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
    }
}
