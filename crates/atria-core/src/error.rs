//! Error types for the Atria system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::role::Role;

/// A single failed precondition on a mutating operation.
///
/// Validation reports every violated field at once so the calling UI can
/// render errors field-by-field rather than one opaque message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum AtriaError {
    /// One or more required fields are missing or invalid. The mutation is
    /// blocked entirely; nothing is partially applied.
    #[error("validation failed: {}", join_violations(.violations))]
    Validation { violations: Vec<Violation> },

    #[error("role '{role}' is not held by this account")]
    InvalidRole { role: Role },

    /// A role-gated surface was opened while a different role was active.
    /// Distinct from [`AtriaError::InvalidRole`]: the account may well hold
    /// the required role without currently acting as it.
    #[error("requires the '{required}' role to be active")]
    RoleNotActive { required: Role },

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
}

impl AtriaError {
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        AtriaError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

pub type AtriaResult<T> = Result<T, AtriaError>;
