use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::net::TcpStream;
use tokio::sync::Mutex;

use crate::domain::entities::User;
use crate::domain::ports::{
    Connectivity, RegistrationStepsStore, SessionStore, TokenProvider,
};
use crate::frameworks::config;

// Locally persisted session fields.
#[derive(Debug, Default)]
struct SessionRecord {
    token: Option<String>,
    user: User,
    push_token: Option<String>,
}

// In-memory session store adapter. Hosts with a secure keystore plug in
// their own SessionStore implementation instead.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    record: Arc<Mutex<SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn token(&self) -> Result<Option<String>, String> {
        Ok(self.record.lock().await.token.clone())
    }

    async fn set_token(&self, token: Option<String>) -> Result<(), String> {
        self.record.lock().await.token = token;
        Ok(())
    }

    async fn user(&self) -> Result<User, String> {
        Ok(self.record.lock().await.user.clone())
    }

    async fn set_user(&self, user: User) -> Result<(), String> {
        self.record.lock().await.user = user;
        Ok(())
    }

    async fn reset_user(&self) -> Result<(), String> {
        self.record.lock().await.user = User::default();
        Ok(())
    }

    async fn push_token(&self) -> Result<Option<String>, String> {
        Ok(self.record.lock().await.push_token.clone())
    }

    async fn set_push_token(&self, token: Option<String>) -> Result<(), String> {
        self.record.lock().await.push_token = token;
        Ok(())
    }
}

#[async_trait]
impl TokenProvider for InMemorySessionStore {
    async fn bearer_token(&self) -> Option<String> {
        self.record.lock().await.token.clone()
    }
}

// In-memory registration wizard state.
#[derive(Clone, Default)]
pub struct InMemoryRegistrationSteps {
    steps: Arc<Mutex<HashMap<String, Value>>>,
}

impl InMemoryRegistrationSteps {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_step(&self, name: impl Into<String>, value: Value) {
        self.steps.lock().await.insert(name.into(), value);
    }

    pub async fn step(&self, name: &str) -> Option<Value> {
        self.steps.lock().await.get(name).cloned()
    }
}

#[async_trait]
impl RegistrationStepsStore for InMemoryRegistrationSteps {
    async fn clear_steps(&self) -> Result<(), String> {
        self.steps.lock().await.clear();
        Ok(())
    }
}

// Connectivity probe that attempts a TCP connect within a deadline.
#[derive(Clone)]
pub struct TcpProbeConnectivity {
    pub probe_addr: String,
    pub timeout: Duration,
}

impl TcpProbeConnectivity {
    // Probe target and deadline resolved from the environment.
    pub fn from_env() -> Self {
        Self {
            probe_addr: config::connectivity_probe_addr(),
            timeout: config::connectivity_probe_timeout(),
        }
    }
}

#[async_trait]
impl Connectivity for TcpProbeConnectivity {
    async fn is_connected(&self) -> bool {
        matches!(
            tokio::time::timeout(self.timeout, TcpStream::connect(&self.probe_addr)).await,
            Ok(Ok(_))
        )
    }
}

// Connectivity adapter for hosts that track connectivity themselves.
#[derive(Clone, Copy, Default)]
pub struct AssumeOnline;

#[async_trait]
impl Connectivity for AssumeOnline {
    async fn is_connected(&self) -> bool {
        true
    }
}
