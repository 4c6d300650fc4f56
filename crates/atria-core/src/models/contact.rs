//! Contact information shared by leads and bookings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Case-insensitive substring match against name, phone, or email.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.phone.to_lowercase().contains(&q)
            || self.email.to_lowercase().contains(&q)
    }
}
