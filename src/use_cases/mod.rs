// Use cases layer: session lifecycle workflows over the domain ports.

pub mod logout;
pub mod password_reset;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use session::SessionRepository;
