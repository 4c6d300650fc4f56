//! Booking domain model — a confirmed viewing or transaction tied to one
//! property unit and one customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::contact::Contact;
use crate::models::timeline::{Note, TimelineEvent};
use crate::status::{BookingStatus, PaymentStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub customer: Contact,
    /// The unit this booking is for. Exactly one, required.
    pub unit: String,
    pub status: BookingStatus,
    /// Independent of `status`; the two axes move separately.
    pub payment_status: PaymentStatus,
    /// Amount paid to reserve. Never exceeds `total_amount`.
    pub booking_amount: u64,
    pub total_amount: u64,
    /// Broker commission; independent of the other amounts.
    pub commission: u64,
    pub viewing_at: Option<DateTime<Utc>>,
    /// Free-text broker notes. Append-only.
    pub notes: Vec<Note>,
    /// System-generated events (payments, documents, transitions).
    pub timeline: Vec<TimelineEvent>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBooking {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub unit: String,
    pub booking_amount: u64,
    pub total_amount: u64,
    pub commission: u64,
    pub viewing_at: Option<DateTime<Utc>>,
}
