//! Status vocabularies and the shared state-machine helpers.
//!
//! Lead status, booking status, and payment status are structurally the same
//! machine: a fixed label set with free transitions, a terminal subset, and a
//! timeline entry per move. One trait covers all three instead of three
//! copies of the transition logic.

use serde::{Deserialize, Serialize};

/// A fixed status vocabulary with a terminal subset.
///
/// Transitions between any two members are allowed business operations, not
/// errors; terminal-ness is metadata for callers (a terminal record is
/// read-mostly), never enforced here.
pub trait StatusVocabulary: Copy + Eq + Sized + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn is_terminal(&self) -> bool;

    /// Case-insensitive lookup by display label.
    fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }
}

/// Human-readable description of a status move, e.g. `New → Site Visit`.
pub fn transition_description<S: StatusVocabulary>(from: S, to: S) -> String {
    format!("{} → {}", from.label(), to.label())
}

/// Status filter used by list screens. `All` matches every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: StatusVocabulary> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Lead lifecycle, in intended progression order. Backward moves and direct
/// jumps are allowed; `Booked` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    #[serde(rename = "Site Visit")]
    SiteVisit,
    Offer,
    Booked,
    Lost,
}

impl StatusVocabulary for LeadStatus {
    const ALL: &'static [LeadStatus] = &[
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::SiteVisit,
        LeadStatus::Offer,
        LeadStatus::Booked,
        LeadStatus::Lost,
    ];

    fn label(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::SiteVisit => "Site Visit",
            LeadStatus::Offer => "Offer",
            LeadStatus::Booked => "Booked",
            LeadStatus::Lost => "Lost",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, LeadStatus::Booked | LeadStatus::Lost)
    }
}

/// Booking lifecycle. Independent of payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl StatusVocabulary for BookingStatus {
    const ALL: &'static [BookingStatus] = &[
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

/// Payment progression. Declaration order is the intended progression, so
/// `Ord` gives "is this a backward move" directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Partial,
    Paid,
}

impl StatusVocabulary for PaymentStatus {
    const ALL: &'static [PaymentStatus] = &[
        PaymentStatus::Pending,
        PaymentStatus::Partial,
        PaymentStatus::Paid,
    ];

    fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Paid => "Paid",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}
