//! Booking tracker — creation, the two independent status axes, notes,
//! and the system timeline.

use atria_core::error::{AtriaError, AtriaResult, Violation};
use atria_core::models::booking::{Booking, CreateBooking};
use atria_core::models::contact::Contact;
use atria_core::models::timeline::{Note, TimelineEvent, TimelineEventKind};
use atria_core::repository::BookingRepository;
use atria_core::status::{
    BookingStatus, PaymentStatus, StatusFilter, transition_description,
};
use chrono::Utc;
use uuid::Uuid;

use crate::config::TrackerConfig;
use crate::validate::{finish, require_non_empty};

/// An external intent handed to the platform layer (phone dialer, mail
/// client). Fire-and-forget; triggering one never mutates a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickAction {
    Dial(String),
    Email(String),
}

/// List-screen filter; same semantics as [`crate::LeadFilter`].
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub status: StatusFilter<BookingStatus>,
    pub search: Option<String>,
}

impl BookingFilter {
    fn matches(&self, booking: &Booking) -> bool {
        if !self.status.matches(booking.status) {
            return false;
        }
        match self.search.as_deref() {
            None | Some("") => true,
            Some(query) => booking.customer.matches(query),
        }
    }
}

pub struct BookingTracker<R: BookingRepository> {
    repo: R,
    config: TrackerConfig,
}

impl<R: BookingRepository> BookingTracker<R> {
    pub fn new(repo: R, config: TrackerConfig) -> Self {
        Self { repo, config }
    }

    /// Creates a booking in `Pending`/`Pending`. The customer contact and
    /// unit are required and `booking_amount` must not exceed
    /// `total_amount`; all violations are reported together.
    pub fn create(&mut self, input: CreateBooking) -> AtriaResult<Booking> {
        let mut violations = Vec::new();
        require_non_empty(&mut violations, "name", &input.name);
        require_non_empty(&mut violations, "phone", &input.phone);
        require_non_empty(&mut violations, "email", &input.email);
        require_non_empty(&mut violations, "unit", &input.unit);
        if input.booking_amount > input.total_amount {
            violations.push(Violation::new(
                "booking_amount",
                "exceeds the total amount",
            ));
        }
        finish(violations)?;

        let booking = Booking {
            id: Uuid::new_v4(),
            customer: Contact {
                name: input.name,
                phone: input.phone,
                email: input.email,
            },
            unit: input.unit,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            booking_amount: input.booking_amount,
            total_amount: input.total_amount,
            commission: input.commission,
            viewing_at: input.viewing_at,
            notes: Vec::new(),
            timeline: vec![TimelineEvent::now(
                TimelineEventKind::Created,
                "Booking created",
            )],
            created_at: Utc::now(),
        };
        tracing::info!(booking = %booking.id, unit = %booking.unit, "booking created");
        self.repo.insert(booking)
    }

    pub fn get(&self, id: Uuid) -> AtriaResult<Booking> {
        self.repo.get(id)
    }

    /// Moves the booking status. Leaves the payment axis untouched.
    pub fn update_status(&mut self, id: Uuid, new_status: BookingStatus) -> AtriaResult<Booking> {
        let mut booking = self.repo.get(id)?;
        if booking.status == new_status {
            return Ok(booking);
        }
        let description = transition_description(booking.status, new_status);
        tracing::info!(booking = %id, %description, "booking status changed");
        booking.timeline.push(TimelineEvent::now(
            TimelineEventKind::StatusChanged,
            description,
        ));
        booking.status = new_status;
        self.repo.save(booking)
    }

    /// Moves the payment status. Leaves the booking axis untouched. With
    /// `strict_payment_progression`, backward moves along
    /// `Pending → Partial → Paid` are rejected.
    pub fn update_payment_status(
        &mut self,
        id: Uuid,
        new_status: PaymentStatus,
    ) -> AtriaResult<Booking> {
        let mut booking = self.repo.get(id)?;
        if booking.payment_status == new_status {
            return Ok(booking);
        }
        if self.config.strict_payment_progression && new_status < booking.payment_status {
            return Err(AtriaError::Validation {
                violations: vec![Violation::new(
                    "payment_status",
                    format!(
                        "cannot move backward: {}",
                        transition_description(booking.payment_status, new_status)
                    ),
                )],
            });
        }
        let description = format!(
            "Payment {}",
            transition_description(booking.payment_status, new_status)
        );
        booking.timeline.push(TimelineEvent::now(
            TimelineEventKind::StatusChanged,
            description,
        ));
        booking.payment_status = new_status;
        self.repo.save(booking)
    }

    /// Updates the monetary fields, holding `booking_amount ≤ total_amount`.
    pub fn update_amounts(
        &mut self,
        id: Uuid,
        booking_amount: u64,
        total_amount: u64,
    ) -> AtriaResult<Booking> {
        if booking_amount > total_amount {
            return Err(AtriaError::Validation {
                violations: vec![Violation::new(
                    "booking_amount",
                    "exceeds the total amount",
                )],
            });
        }
        let mut booking = self.repo.get(id)?;
        booking.booking_amount = booking_amount;
        booking.total_amount = total_amount;
        self.repo.save(booking)
    }

    pub fn add_note(&mut self, id: Uuid, text: &str) -> AtriaResult<Booking> {
        let mut violations = Vec::new();
        require_non_empty(&mut violations, "note", text);
        finish(violations)?;

        let mut booking = self.repo.get(id)?;
        booking.notes.push(Note::new(text));
        self.repo.save(booking)
    }

    /// Appends a system-generated event (payment received, document
    /// verified, contact made) distinct from broker notes.
    pub fn record_timeline_event(
        &mut self,
        id: Uuid,
        kind: TimelineEventKind,
        description: &str,
    ) -> AtriaResult<Booking> {
        let mut booking = self.repo.get(id)?;
        booking.timeline.push(TimelineEvent::now(kind, description));
        self.repo.save(booking)
    }

    pub fn filter(&self, filter: &BookingFilter) -> Vec<Booking> {
        self.repo
            .list()
            .into_iter()
            .filter(|booking| filter.matches(booking))
            .collect()
    }
}

/// Opens the phone dialer for the booking's customer.
pub fn quick_dial(booking: &Booking) -> QuickAction {
    QuickAction::Dial(booking.customer.phone.clone())
}

/// Opens the mail client for the booking's customer.
pub fn quick_email(booking: &Booking) -> QuickAction {
    QuickAction::Email(booking.customer.email.clone())
}
