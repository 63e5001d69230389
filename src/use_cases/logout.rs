use tracing::warn;

use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthGateway, RegistrationStepsStore, SessionStore};
use crate::use_cases::session::SessionRepository;

impl<G, S, R> SessionRepository<G, S, R>
where
    G: AuthGateway + Clone + 'static,
    S: SessionStore + Clone + 'static,
    R: RegistrationStepsStore,
{
    // Signs the user out. Remote calls are best-effort; local teardown is
    // what actually ends the session and must fully succeed.
    pub async fn logout(&self, skip_request: bool) -> Result<(), AuthError> {
        if !self.is_signed_in().await? {
            return Err(AuthError::NotSignedIn);
        }

        if !skip_request && self.has_token().await? {
            self.best_effort_remote_logout().await;
        }

        self.delete_local_session_data().await
    }

    // Tells the backend to drop the push token and the session. Neither
    // call failing may block the local sign-out.
    async fn best_effort_remote_logout(&self) {
        match self.store.push_token().await {
            Ok(Some(push_token)) => {
                if let Err(err) = self.gateway.delete_firebase_token(&push_token).await {
                    warn!(error = %err, "push token delete failed");
                }
            }
            Ok(None) => {}
            Err(err) => {
                warn!(error = %err, "push token read failed, skipping remote delete");
            }
        }

        if let Err(err) = self.gateway.logout().await {
            warn!(error = %err, "logout request failed");
        }
    }

    // Clears token, user and registration progress. The writes are
    // independent and run concurrently, and all of them must land.
    async fn delete_local_session_data(&self) -> Result<(), AuthError> {
        let (token, user, steps) = tokio::join!(
            self.store.set_token(None),
            self.store.reset_user(),
            self.registration_steps.clear_steps(),
        );

        token.map_err(AuthError::Storage)?;
        user.map_err(AuthError::Storage)?;
        steps.map_err(AuthError::Storage)?;
        Ok(())
    }
}
