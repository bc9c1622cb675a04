use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Request body for registration. Fields default to empty so a missing field
/// is answered by the validation path, not a codec rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public part of the user returned to the client. `createdAt` is present on
/// registration only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created_at: Option<OffsetDateTime>,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn register_body_defaults_missing_fields_to_empty() {
        let payload: RegisterRequest = serde_json::from_str(r#"{"email":"ann@x.com"}"#).unwrap();
        assert!(payload.name.is_empty());
        assert_eq!(payload.email, "ann@x.com");
        assert!(payload.password.is_empty());
    }

    #[test]
    fn public_user_includes_created_at_when_set() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            name: "Ann".into(),
            email: "ann@x.com".into(),
            created_at: Some(datetime!(2026-01-02 03:04:05 UTC)),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["createdAt"], "2026-01-02T03:04:05Z");
    }

    #[test]
    fn public_user_omits_created_at_when_unset() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            name: "Ann".into(),
            email: "ann@x.com".into(),
            created_at: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("createdAt").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
