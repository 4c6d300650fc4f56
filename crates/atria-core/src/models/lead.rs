//! Lead domain model — a tracked pre-sale expression of interest.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::contact::Contact;
use crate::models::timeline::{Note, TimelineEvent};
use crate::status::LeadStatus;

/// Optional budget bounds; `min <= max` whenever both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub contact: Contact,
    pub status: LeadStatus,
    pub budget: BudgetRange,
    pub property_type: Option<String>,
    pub bedrooms: Option<String>,
    /// Where the lead came from, e.g. "Website Inquiry".
    pub source: Option<String>,
    pub linked_units: BTreeSet<String>,
    /// Free-text broker notes. Append-only.
    pub notes: Vec<Note>,
    /// System-generated activity log. Append-only.
    pub timeline: Vec<TimelineEvent>,
    pub created_at: DateTime<Utc>,
    pub last_contact_at: Option<DateTime<Utc>>,
}

/// Input for lead creation. Name, phone, and email are required; the
/// requirements block (budget/type/bedrooms) is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub budget_min: Option<u64>,
    pub budget_max: Option<u64>,
    pub property_type: Option<String>,
    pub bedrooms: Option<String>,
    pub source: Option<String>,
}
