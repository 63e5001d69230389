use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

// Success envelope wrapping every API payload.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

// Request payload for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// Request payload for starting the forgot-password flow.
#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

// Request payload for checking a reset or verification code.
#[derive(Debug, Serialize)]
pub struct CheckCodeRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

// Request payload for setting a new password with a verified code.
#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
    pub password: &'a str,
}

// Request payload for push token registration and removal.
#[derive(Debug, Serialize)]
pub struct PushTokenRequest<'a> {
    pub token: &'a str,
}

// Auth payload returned by login and email verification.
#[derive(Debug, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    pub user: UserPayload,
}

// User profile as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserPayload {
    pub fn into_entity(self) -> User {
        User {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

// Error body the API uses for failed requests. Any subset of the fields may
// be present; absent or malformed bodies fall back to status-based texts.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}
