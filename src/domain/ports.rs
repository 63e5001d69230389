use async_trait::async_trait;

use crate::domain::entities::{AuthResponse, User};
use crate::domain::errors::AuthError;

// Port for the remote auth API. Implementations classify transport failures
// before returning, so callers only ever see AuthError.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError>;
    async fn logout(&self) -> Result<(), AuthError>;
    async fn forgot_password(&self, email: &str) -> Result<(), AuthError>;
    async fn forgot_password_check_code(&self, email: &str, code: &str) -> Result<(), AuthError>;
    async fn forgot_password_reset_password(
        &self,
        email: &str,
        code: &str,
        password: &str,
    ) -> Result<(), AuthError>;
    async fn email_verification(&self, email: &str, code: &str)
        -> Result<AuthResponse, AuthError>;
    async fn email_verification_resend_code(&self, email: &str) -> Result<(), AuthError>;
    async fn send_firebase_token(&self, token: &str) -> Result<(), AuthError>;
    async fn delete_firebase_token(&self, token: &str) -> Result<(), AuthError>;
    async fn is_live_mode_accepted(&self) -> Result<bool, AuthError>;
}

// Port for persisted session state: auth token, user profile and the device
// push token. The user is stored whole; resetting it writes the empty
// profile back.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn token(&self) -> Result<Option<String>, String>;
    async fn set_token(&self, token: Option<String>) -> Result<(), String>;
    async fn user(&self) -> Result<User, String>;
    async fn set_user(&self, user: User) -> Result<(), String>;
    async fn reset_user(&self) -> Result<(), String>;
    async fn push_token(&self) -> Result<Option<String>, String>;
    async fn set_push_token(&self, token: Option<String>) -> Result<(), String>;
}

// Port for the registration wizard state. Auth flows only ever clear it.
#[async_trait]
pub trait RegistrationStepsStore: Send + Sync {
    async fn clear_steps(&self) -> Result<(), String>;
}

// Port for checking whether the device currently has internet access.
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_connected(&self) -> bool;
}

// Port for the token attached to authorized requests.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Option<String>;
}
