use serde::{Deserialize, Serialize};

// User profile as returned by the auth API and persisted locally. An empty
// email means "no user": the signed-in check keys off its presence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    pub fn is_present(&self) -> bool {
        !self.email.is_empty()
    }
}

// Payload produced by login and email verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub user: User,
}
