//! Authentication collaborator boundary

mod dispatcher;
mod traits;

pub use dispatcher::TracingAuthDispatcher;
pub use traits::{AuthDispatcher, LoginCredentials};

#[cfg(test)]
pub use traits::MockAuthDispatcher;
