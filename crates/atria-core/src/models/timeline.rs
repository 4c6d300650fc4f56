//! Append-only notes and timeline entries.
//!
//! Notes are free-text, written by the broker. Timeline events are
//! system-generated records of what happened to a lead or booking; the two
//! logs are kept separate and both only grow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineEventKind {
    Created,
    StatusChanged,
    PaymentReceived,
    DocumentVerified,
    ContactMade,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: Uuid,
    pub kind: TimelineEventKind,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
}

impl TimelineEvent {
    pub fn now(kind: TimelineEventKind, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            description: description.into(),
            occurred_at: Utc::now(),
        }
    }
}
