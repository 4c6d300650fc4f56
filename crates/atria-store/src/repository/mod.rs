mod booking;
mod lead;
mod preferences;

pub use booking::InMemoryBookingRepository;
pub use lead::InMemoryLeadRepository;
pub use preferences::InMemoryRolePreferences;
