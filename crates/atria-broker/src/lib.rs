//! Atria Broker — the broker-role workspace: lead tracking, booking
//! tracking, and the shortlist/comparison set.
//!
//! Leads and bookings are structurally the same machine (labeled statuses,
//! free transitions, append-only logs) parametrized by different
//! vocabularies; the shared pieces live in `atria-core::status`.

pub mod bookings;
pub mod config;
pub mod leads;
pub mod shortlist;
pub mod workspace;

mod validate;

pub use bookings::{BookingFilter, BookingTracker, QuickAction};
pub use config::TrackerConfig;
pub use leads::{LeadFilter, LeadTracker};
pub use shortlist::{RECOMMENDED_COMPARE_LIMIT, Shortlist};
pub use workspace::BrokerWorkspace;
