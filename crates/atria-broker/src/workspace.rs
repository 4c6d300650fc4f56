//! Broker workspace — the composition point for the broker-only screens.
//!
//! Lead, booking, and shortlist collections are owned here; other roles
//! never get a workspace handle, which is how reachability is gated.

use atria_core::error::{AtriaError, AtriaResult};
use atria_core::models::role::Role;
use atria_core::repository::{BookingRepository, LeadRepository};
use atria_session::Session;

use crate::bookings::BookingTracker;
use crate::config::TrackerConfig;
use crate::leads::LeadTracker;
use crate::shortlist::Shortlist;

pub struct BrokerWorkspace<L: LeadRepository, B: BookingRepository> {
    pub leads: LeadTracker<L>,
    pub bookings: BookingTracker<B>,
    pub shortlist: Shortlist,
}

impl<L: LeadRepository, B: BookingRepository> BrokerWorkspace<L, B> {
    /// Opens the workspace for a session whose active role is `Broker`.
    /// Any other (or no) active role is rejected.
    pub fn open(
        session: &Session,
        leads: L,
        bookings: B,
        config: TrackerConfig,
    ) -> AtriaResult<Self> {
        if session.active_role() != Some(Role::Broker) {
            return Err(AtriaError::RoleNotActive {
                required: Role::Broker,
            });
        }
        Ok(Self {
            leads: LeadTracker::new(leads),
            bookings: BookingTracker::new(bookings, config),
            shortlist: Shortlist::new(),
        })
    }
}
