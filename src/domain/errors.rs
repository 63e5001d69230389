use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

// Classified errors surfaced by auth operations. Transport failures are
// mapped into these exactly once, at the gateway boundary, so everything
// above it only ever sees this taxonomy.
#[derive(Clone, Debug, Error)]
pub enum AuthError {
    // Per-field errors returned by the API; rendered next to the inputs.
    #[error("{}", .message.as_deref().unwrap_or("invalid fields"))]
    FieldValidation {
        message: Option<String>,
        fields: HashMap<String, String>,
    },
    #[error("{0}")]
    AccessForbidden(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    // Request failed while the device had no internet access.
    #[error("{0}")]
    NoConnectivity(String),
    // Network-level failure carrying a renderable message.
    #[error("{0}")]
    Network(String),
    // Logout was attempted without a signed-in session.
    #[error("was not authorized")]
    NotSignedIn,
    // A local store operation failed.
    #[error("{0}")]
    Storage(String),
    // Failure that matched no known shape, passed through unchanged.
    #[error("{0}")]
    Unknown(Arc<dyn std::error::Error + Send + Sync>),
}
