use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthGateway, RegistrationStepsStore, SessionStore};
use crate::use_cases::session::SessionRepository;

// Forgot-password flow: three passthrough calls with no local state. Errors
// arrive already classified by the gateway.
impl<G, S, R> SessionRepository<G, S, R>
where
    G: AuthGateway + Clone + 'static,
    S: SessionStore + Clone + 'static,
    R: RegistrationStepsStore,
{
    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        self.gateway.forgot_password(email).await
    }

    pub async fn forgot_password_check_code(&self, email: &str, code: &str) -> Result<(), AuthError> {
        self.gateway.forgot_password_check_code(email, code).await
    }

    pub async fn forgot_password_reset_password(
        &self,
        email: &str,
        code: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        self.gateway
            .forgot_password_reset_password(email, code, password)
            .await
    }
}
