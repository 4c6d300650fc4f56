//! Shared field-validation helpers.
//!
//! Create operations validate every field and report all violations at
//! once, not fail-fast on the first.

use atria_core::error::{AtriaError, AtriaResult, Violation};

pub(crate) fn require_non_empty(violations: &mut Vec<Violation>, field: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(Violation::new(field, "is required"));
    }
}

pub(crate) fn finish(violations: Vec<Violation>) -> AtriaResult<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AtriaError::Validation { violations })
    }
}
