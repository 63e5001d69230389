pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;
pub mod validator;

pub use domain::entities::{AuthResponse, User};
pub use domain::errors::AuthError;
pub use interface_adapters::classifier::{ErrorClassifier, ErrorMessages, TransportFailure};
pub use interface_adapters::gateway::HttpAuthGateway;
pub use use_cases::session::SessionRepository;
