//! Session error types.

use atria_core::error::AtriaError;
use atria_core::models::role::Role;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("role '{0}' is not held by this account")]
    RoleNotHeld(Role),

    #[error("no live session")]
    NoSession,
}

impl From<SessionError> for AtriaError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::RoleNotHeld(role) => AtriaError::InvalidRole { role },
            SessionError::NoSession => AtriaError::NotFound {
                entity: "session".into(),
                id: "current".into(),
            },
        }
    }
}
