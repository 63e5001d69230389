use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{AuthResponse, User};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthGateway, RegistrationStepsStore, SessionStore};

pub(crate) fn user(email: &str) -> User {
    User {
        email: email.to_string(),
        ..User::default()
    }
}

// Toggles used by negative-path tests to simulate gateway failures.
#[derive(Clone, Copy, Default)]
pub(crate) struct GatewayFailures {
    pub login: bool,
    pub logout: bool,
    pub email_verification: bool,
    pub send_firebase_token: bool,
    pub delete_firebase_token: bool,
    pub passthroughs: bool,
}

// Fake gateway that records every call it receives.
#[derive(Clone)]
pub(crate) struct RecordingGateway {
    calls: Arc<Mutex<Vec<String>>>,
    auth_response: AuthResponse,
    live_mode: bool,
    failures: GatewayFailures,
}

impl RecordingGateway {
    pub(crate) fn new(auth_response: AuthResponse) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            auth_response,
            live_mode: false,
            failures: GatewayFailures::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: GatewayFailures) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn with_live_mode(mut self, live_mode: bool) -> Self {
        self.live_mode = live_mode;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    pub(crate) fn calls_named(&self, name: &str) -> usize {
        self.calls().iter().filter(|call| *call == name).count()
    }

    pub(crate) fn calls_starting_with(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }

    fn outcome(&self, failed: bool) -> Result<(), AuthError> {
        if failed {
            return Err(AuthError::Network("gateway failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for RecordingGateway {
    async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse, AuthError> {
        self.record(format!("login:{email}"));
        self.outcome(self.failures.login)?;
        Ok(self.auth_response.clone())
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.record("logout".to_string());
        self.outcome(self.failures.logout)
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        self.record(format!("forgot_password:{email}"));
        self.outcome(self.failures.passthroughs)
    }

    async fn forgot_password_check_code(&self, email: &str, code: &str) -> Result<(), AuthError> {
        self.record(format!("forgot_password_check_code:{email}:{code}"));
        self.outcome(self.failures.passthroughs)
    }

    async fn forgot_password_reset_password(
        &self,
        email: &str,
        code: &str,
        _password: &str,
    ) -> Result<(), AuthError> {
        self.record(format!("forgot_password_reset_password:{email}:{code}"));
        self.outcome(self.failures.passthroughs)
    }

    async fn email_verification(
        &self,
        email: &str,
        code: &str,
    ) -> Result<AuthResponse, AuthError> {
        self.record(format!("email_verification:{email}:{code}"));
        self.outcome(self.failures.email_verification)?;
        Ok(self.auth_response.clone())
    }

    async fn email_verification_resend_code(&self, email: &str) -> Result<(), AuthError> {
        self.record(format!("email_verification_resend_code:{email}"));
        self.outcome(self.failures.passthroughs)
    }

    async fn send_firebase_token(&self, token: &str) -> Result<(), AuthError> {
        self.record(format!("send_firebase_token:{token}"));
        self.outcome(self.failures.send_firebase_token)
    }

    async fn delete_firebase_token(&self, token: &str) -> Result<(), AuthError> {
        self.record(format!("delete_firebase_token:{token}"));
        self.outcome(self.failures.delete_firebase_token)
    }

    async fn is_live_mode_accepted(&self) -> Result<bool, AuthError> {
        self.record("is_live_mode_accepted".to_string());
        self.outcome(self.failures.passthroughs)?;
        Ok(self.live_mode)
    }
}

// Toggles used by negative-path tests to simulate store failures.
#[derive(Clone, Copy, Default)]
pub(crate) struct StoreFailures {
    pub reads: bool,
    pub set_token: bool,
    pub set_user: bool,
    pub reset_user: bool,
    pub set_push_token: bool,
}

#[derive(Debug, Default)]
struct StoreRecord {
    token: Option<String>,
    user: User,
    push_token: Option<String>,
}

// Shared in-memory store that lets tests seed and inspect session state.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    record: Arc<Mutex<StoreRecord>>,
    failures: StoreFailures,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            record: Arc::new(Mutex::new(StoreRecord::default())),
            failures: StoreFailures::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: StoreFailures) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn seed_signed_in(&self, email: &str, token: Option<&str>) {
        let mut record = self.record.lock().expect("record mutex poisoned");
        record.user = user(email);
        record.token = token.map(str::to_string);
    }

    pub(crate) fn seed_push_token(&self, token: &str) {
        self.record
            .lock()
            .expect("record mutex poisoned")
            .push_token = Some(token.to_string());
    }

    pub(crate) fn stored_token(&self) -> Option<String> {
        self.record
            .lock()
            .expect("record mutex poisoned")
            .token
            .clone()
    }

    pub(crate) fn stored_user(&self) -> User {
        self.record
            .lock()
            .expect("record mutex poisoned")
            .user
            .clone()
    }

    pub(crate) fn stored_push_token(&self) -> Option<String> {
        self.record
            .lock()
            .expect("record mutex poisoned")
            .push_token
            .clone()
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn token(&self) -> Result<Option<String>, String> {
        if self.failures.reads {
            return Err("token read failed".to_string());
        }
        Ok(self.stored_token())
    }

    async fn set_token(&self, token: Option<String>) -> Result<(), String> {
        if self.failures.set_token {
            return Err("token write failed".to_string());
        }
        self.record.lock().expect("record mutex poisoned").token = token;
        Ok(())
    }

    async fn user(&self) -> Result<User, String> {
        if self.failures.reads {
            return Err("user read failed".to_string());
        }
        Ok(self.stored_user())
    }

    async fn set_user(&self, user: User) -> Result<(), String> {
        if self.failures.set_user {
            return Err("user write failed".to_string());
        }
        self.record.lock().expect("record mutex poisoned").user = user;
        Ok(())
    }

    async fn reset_user(&self) -> Result<(), String> {
        if self.failures.reset_user {
            return Err("user reset failed".to_string());
        }
        self.record.lock().expect("record mutex poisoned").user = User::default();
        Ok(())
    }

    async fn push_token(&self) -> Result<Option<String>, String> {
        if self.failures.reads {
            return Err("push token read failed".to_string());
        }
        Ok(self.stored_push_token())
    }

    async fn set_push_token(&self, token: Option<String>) -> Result<(), String> {
        if self.failures.set_push_token {
            return Err("push token write failed".to_string());
        }
        self.record
            .lock()
            .expect("record mutex poisoned")
            .push_token = token;
        Ok(())
    }
}

// Fake registration steps store tracking whether it was cleared.
#[derive(Clone)]
pub(crate) struct RecordingSteps {
    cleared: Arc<Mutex<usize>>,
    should_fail: bool,
}

impl RecordingSteps {
    pub(crate) fn new() -> Self {
        Self {
            cleared: Arc::new(Mutex::new(0)),
            should_fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            cleared: Arc::new(Mutex::new(0)),
            should_fail: true,
        }
    }

    pub(crate) fn clear_count(&self) -> usize {
        *self.cleared.lock().expect("cleared mutex poisoned")
    }
}

#[async_trait]
impl RegistrationStepsStore for RecordingSteps {
    async fn clear_steps(&self) -> Result<(), String> {
        if self.should_fail {
            return Err("steps clear failed".to_string());
        }
        *self.cleared.lock().expect("cleared mutex poisoned") += 1;
        Ok(())
    }
}
