// Service exports
pub mod sessions;

pub use sessions::{SessionError, SessionLimits, SessionStore};
