use tracing::warn;

use crate::domain::entities::AuthResponse;
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthGateway, RegistrationStepsStore, SessionStore};

// Session lifecycle orchestration over the injected gateway and stores.
// Holds no session state of its own: the signed-in and token flags are
// derived from the store on every read.
pub struct SessionRepository<G, S, R> {
    pub gateway: G,
    pub store: S,
    pub registration_steps: R,
}

impl<G, S, R> SessionRepository<G, S, R>
where
    G: AuthGateway + Clone + 'static,
    S: SessionStore + Clone + 'static,
    R: RegistrationStepsStore,
{
    pub fn new(gateway: G, store: S, registration_steps: R) -> Self {
        Self {
            gateway,
            store,
            registration_steps,
        }
    }

    // A user is signed in while a profile with an email is stored.
    pub async fn is_signed_in(&self) -> Result<bool, AuthError> {
        let user = self.store.user().await.map_err(AuthError::Storage)?;
        Ok(user.is_present())
    }

    // Token presence is tracked separately from the signed-in flag.
    pub async fn has_token(&self) -> Result<bool, AuthError> {
        let token = self.store.token().await.map_err(AuthError::Storage)?;
        Ok(token.is_some())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self.gateway.login(email, password).await?;
        self.establish_session(response).await
    }

    // Email verification issues the same payload as login and establishes
    // the session the same way.
    pub async fn email_verification(&self, email: &str, code: &str) -> Result<(), AuthError> {
        let response = self.gateway.email_verification(email, code).await?;
        self.establish_session(response).await
    }

    pub async fn email_verification_resend_code(&self, email: &str) -> Result<(), AuthError> {
        self.gateway.email_verification_resend_code(email).await
    }

    // Remembers the device push token locally so it can be registered on
    // the next sign-in, even while signed out.
    pub async fn save_firebase_token(&self, token: &str) -> Result<(), AuthError> {
        self.store
            .set_push_token(Some(token.to_string()))
            .await
            .map_err(AuthError::Storage)
    }

    pub async fn send_firebase_token(&self, token: &str) -> Result<(), AuthError> {
        self.gateway.send_firebase_token(token).await
    }

    pub async fn delete_firebase_token(&self, token: &str) -> Result<(), AuthError> {
        self.gateway.delete_firebase_token(token).await
    }

    pub async fn is_live_mode_accepted(&self) -> Result<bool, AuthError> {
        self.gateway.is_live_mode_accepted().await
    }

    // Persists the session, then registers a pending push token once a real
    // token exists. Runs on a spawned task so a caller dropping the login
    // future cannot tear the write sequence in half.
    pub(crate) async fn establish_session(&self, response: AuthResponse) -> Result<(), AuthError> {
        let gateway = self.gateway.clone();
        let store = self.store.clone();

        let writes = tokio::spawn(async move {
            let token = response.token.clone();
            store
                .set_token(response.token)
                .await
                .map_err(AuthError::Storage)?;
            store
                .set_user(response.user)
                .await
                .map_err(AuthError::Storage)?;

            if token.is_some() {
                let pending = store.push_token().await.map_err(AuthError::Storage)?;
                if let Some(push_token) = pending {
                    // Registration is best-effort: the session is already
                    // established and must not be discarded over it.
                    if let Err(err) = gateway.send_firebase_token(&push_token).await {
                        warn!(error = %err, "push token registration after sign-in failed");
                    }
                }
            }

            Ok(())
        });

        writes
            .await
            .map_err(|err| AuthError::Storage(format!("session write task failed: {err}")))?
    }
}
