//! Shortlist entry — a saved property reference with display metadata.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub property_id: String,
    pub name: String,
    pub price_label: String,
    pub location: String,
    pub unit_range: String,
    /// Marketing badge, e.g. "Exclusive" or "New Launch".
    pub badge: Option<String>,
}
