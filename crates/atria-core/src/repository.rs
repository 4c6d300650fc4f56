//! Repository trait definitions for the in-memory collections.
//!
//! The service crates are generic over these traits so tests can supply
//! isolated fixtures per case and the composition root owns the actual
//! collections. Everything is synchronous: the specified system is a
//! single-actor, in-memory core with no blocking I/O.

use uuid::Uuid;

use crate::error::AtriaResult;
use crate::models::booking::Booking;
use crate::models::lead::Lead;
use crate::models::role::Role;

pub trait LeadRepository {
    fn insert(&mut self, lead: Lead) -> AtriaResult<Lead>;
    fn get(&self, id: Uuid) -> AtriaResult<Lead>;
    /// Replaces the stored record. Fails with `NotFound` for unknown ids.
    fn save(&mut self, lead: Lead) -> AtriaResult<Lead>;
    /// All leads in insertion order.
    fn list(&self) -> Vec<Lead>;
}

pub trait BookingRepository {
    fn insert(&mut self, booking: Booking) -> AtriaResult<Booking>;
    fn get(&self, id: Uuid) -> AtriaResult<Booking>;
    fn save(&mut self, booking: Booking) -> AtriaResult<Booking>;
    fn list(&self) -> Vec<Booking>;
}

/// Persisted "remember my role" choice. Survives logout by design; cleared
/// only through an explicit forget.
pub trait RolePreferenceStore {
    fn remembered(&self, account_id: Uuid) -> Option<Role>;
    fn remember(&mut self, account_id: Uuid, role: Role);
    fn forget(&mut self, account_id: Uuid);
}
