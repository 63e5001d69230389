// Interface adapters: wire protocol, error classification and the concrete
// gateway/store implementations behind the domain ports.

pub mod classifier;
pub mod gateway;
pub mod protocol;
pub mod state;

pub use classifier::{ErrorClassifier, ErrorMessages, TransportFailure};
pub use gateway::HttpAuthGateway;
pub use state::{AssumeOnline, InMemoryRegistrationSteps, InMemorySessionStore, TcpProbeConnectivity};
