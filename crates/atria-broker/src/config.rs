//! Tracker configuration.

/// Configuration for the booking tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Reject payment-status moves that go backward along
    /// `Pending → Partial → Paid`. The observed product never forbids
    /// backward moves, so this is off unless the deployment opts in.
    pub strict_payment_progression: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            strict_payment_progression: false,
        }
    }
}
