//! Atria Core — domain models, error taxonomy, repository traits, and the
//! shared status-vocabulary abstraction.
//!
//! These are the core types shared across all crates. The service layers
//! (`atria-session`, `atria-broker`) are generic over the repository traits
//! defined here and carry no dependency on any concrete store.

pub mod error;
pub mod models;
pub mod repository;
pub mod status;

pub use error::{AtriaError, AtriaResult, Violation};
pub use status::{BookingStatus, LeadStatus, PaymentStatus, StatusFilter, StatusVocabulary};
