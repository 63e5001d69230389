use std::fmt;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::domain::errors::AuthError;
use crate::domain::ports::Connectivity;
use crate::frameworks::config::UNAUTHORIZED_CHANNEL_CAPACITY;
use crate::interface_adapters::protocol::ApiErrorBody;

// Fallback texts used when the API gives nothing renderable. Injected so
// hosts can swap in localized strings.
#[derive(Clone, Debug)]
pub struct ErrorMessages {
    pub default: String,
    pub forbidden: String,
    pub invalid_session: String,
    pub no_internet: String,
    pub connection: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            default: "Something went wrong. Please try again.".to_string(),
            forbidden: "You do not have access to this resource.".to_string(),
            invalid_session: "Your session has expired. Please sign in again.".to_string(),
            no_internet: "No internet connection.".to_string(),
            connection: "Could not reach the server. Please try again.".to_string(),
        }
    }
}

// A response that arrived with a non-success status and nothing usable in
// its body. Kept so the original failure can pass through unchanged.
#[derive(Clone, Debug)]
pub struct HttpFailure {
    pub status: u16,
    pub body: Vec<u8>,
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http status {}", self.status)
    }
}

impl std::error::Error for HttpFailure {}

// Transport-level failure handed to the classifier.
#[derive(Debug)]
pub enum TransportFailure {
    // A response arrived with a non-success status code.
    Http { status: u16, body: Vec<u8> },
    // The request never produced a response.
    Request {
        is_connect: bool,
        is_timeout: bool,
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        // DNS resolution failures also surface through is_connect here.
        TransportFailure::Request {
            is_connect: err.is_connect(),
            is_timeout: err.is_timeout(),
            source: Arc::new(err),
        }
    }
}

// Maps transport failures into AuthError and raises the global unauthorized
// signal whenever a 401 passes through. Classification itself never fails.
pub struct ErrorClassifier<C> {
    connectivity: C,
    messages: ErrorMessages,
    unauthorized_tx: broadcast::Sender<AuthError>,
}

impl<C> ErrorClassifier<C>
where
    C: Connectivity,
{
    pub fn new(connectivity: C, messages: ErrorMessages) -> Self {
        let (unauthorized_tx, _) = broadcast::channel(UNAUTHORIZED_CHANNEL_CAPACITY);
        Self {
            connectivity,
            messages,
            unauthorized_tx,
        }
    }

    // Receiver for forced re-authentication events. Only events sent after
    // subscribing are observed; with capacity one, rapid repeats collapse to
    // the most recent event.
    pub fn subscribe_unauthorized(&self) -> broadcast::Receiver<AuthError> {
        self.unauthorized_tx.subscribe()
    }

    pub async fn classify(&self, failure: TransportFailure) -> AuthError {
        match failure {
            TransportFailure::Http { status, body } => self.classify_http(status, body),
            TransportFailure::Request {
                is_connect,
                is_timeout,
                source,
            } => self.classify_request(is_connect, is_timeout, source).await,
        }
    }

    fn classify_http(&self, status: u16, body: Vec<u8>) -> AuthError {
        let classified = match serde_json::from_slice::<ApiErrorBody>(&body) {
            Ok(ApiErrorBody {
                errors: Some(fields),
                message,
                ..
            }) => AuthError::FieldValidation { message, fields },
            Ok(parsed) => match parsed.error.or(parsed.message) {
                Some(message) => match status {
                    403 => AuthError::AccessForbidden(message),
                    401 => AuthError::Unauthorized(message),
                    404 => AuthError::NotFound(message),
                    _ => AuthError::Network(message),
                },
                // A decodable body with nothing usable passes through.
                None => AuthError::Unknown(Arc::new(HttpFailure { status, body })),
            },
            Err(_) => AuthError::Network(self.fallback_message(status).to_string()),
        };

        if status == 401 {
            // No subscribers just means nobody is listening yet.
            let _ = self.unauthorized_tx.send(classified.clone());
        }

        classified
    }

    fn fallback_message(&self, status: u16) -> &str {
        match status {
            400 => &self.messages.default,
            403 => &self.messages.forbidden,
            401 => &self.messages.invalid_session,
            _ => &self.messages.default,
        }
    }

    async fn classify_request(
        &self,
        is_connect: bool,
        is_timeout: bool,
        source: Arc<dyn std::error::Error + Send + Sync>,
    ) -> AuthError {
        if !self.connectivity.is_connected().await {
            return AuthError::NoConnectivity(self.messages.no_internet.clone());
        }

        if is_connect || is_timeout {
            return AuthError::Network(self.messages.connection.clone());
        }

        AuthError::Unknown(source)
    }
}
