//! Atria Store — in-memory implementations of the `atria-core` repository
//! traits.
//!
//! The platform holds all records in process memory; there is no persistence
//! layer. Stores keep insertion order so list screens render records in a
//! stable sequence.

mod repository;

pub use repository::{InMemoryBookingRepository, InMemoryLeadRepository, InMemoryRolePreferences};
