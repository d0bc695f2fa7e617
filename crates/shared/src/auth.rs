//! Authentication payloads for sign-up and sign-in.
//!
//! Fields are optional on the wire so that a missing field is reported by
//! validation alongside every other violation instead of failing decoding.

use serde::{Deserialize, Serialize};

/// Sign-up request payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    /// Display name.
    pub name: Option<String>,
    /// User email, the identity every statement is owned by.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Must repeat `password` exactly.
    pub repeat_password: Option<String>,
}

/// Sign-in request payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    /// User email.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Sign-in response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// Display name of the signed-in user.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_ignored() {
        let req: SignInRequest = serde_json::from_str(
            r#"{"email":"ana@example.com","password":"pw","remember_me":true}"#,
        )
        .unwrap();
        assert_eq!(req.email.as_deref(), Some("ana@example.com"));
        assert_eq!(req.password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_missing_fields_decode_as_none() {
        let req: SignUpRequest = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Ana"));
        assert!(req.email.is_none());
        assert!(req.repeat_password.is_none());
    }
}
