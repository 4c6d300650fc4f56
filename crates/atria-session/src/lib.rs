//! Atria Session — session lifecycle and role selection.
//!
//! One logical session exists per process instance. It is the single source
//! of truth for who is acting and as what role; role-sensitive operations
//! take the session explicitly instead of consulting a global.

pub mod error;
pub mod service;

pub use error::SessionError;
pub use service::{Session, SessionService, SessionState};
