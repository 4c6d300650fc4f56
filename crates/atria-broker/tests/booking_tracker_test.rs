//! Integration tests for the booking tracker.

use atria_broker::bookings::{quick_dial, quick_email};
use atria_broker::{BookingFilter, BookingTracker, QuickAction, TrackerConfig};
use atria_core::error::AtriaError;
use atria_core::models::booking::CreateBooking;
use atria_core::models::timeline::TimelineEventKind;
use atria_core::status::{BookingStatus, PaymentStatus, StatusFilter};
use atria_store::InMemoryBookingRepository;

fn tracker() -> BookingTracker<InMemoryBookingRepository> {
    BookingTracker::new(InMemoryBookingRepository::new(), TrackerConfig::default())
}

fn strict_tracker() -> BookingTracker<InMemoryBookingRepository> {
    BookingTracker::new(
        InMemoryBookingRepository::new(),
        TrackerConfig {
            strict_payment_progression: true,
        },
    )
}

fn marina_booking() -> CreateBooking {
    CreateBooking {
        name: "Ahmed Al Mansouri".into(),
        phone: "+971501234567".into(),
        email: "ahmed.m@email.com".into(),
        unit: "Marina Heights - Unit 205".into(),
        booking_amount: 50_000,
        total_amount: 2_500_000,
        commission: 50_000,
        viewing_at: None,
    }
}

#[test]
fn create_starts_pending_on_both_axes() {
    let mut bookings = tracker();
    let booking = bookings.create(marina_booking()).unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.payment_status, PaymentStatus::Pending);
    assert_eq!(booking.timeline.len(), 1);
    assert_eq!(booking.timeline[0].kind, TimelineEventKind::Created);
}

#[test]
fn create_rejects_booking_amount_above_total() {
    let mut bookings = tracker();
    let err = bookings
        .create(CreateBooking {
            booking_amount: 3_000_000,
            total_amount: 2_500_000,
            ..marina_booking()
        })
        .unwrap_err();

    let AtriaError::Validation { violations } = err else {
        panic!("expected validation error");
    };
    assert_eq!(violations[0].field, "booking_amount");
}

#[test]
fn create_requires_a_unit_reference() {
    let mut bookings = tracker();
    let err = bookings
        .create(CreateBooking {
            unit: String::new(),
            ..marina_booking()
        })
        .unwrap_err();

    let AtriaError::Validation { violations } = err else {
        panic!("expected validation error");
    };
    assert_eq!(violations[0].field, "unit");
}

#[test]
fn payment_axis_moves_independently_of_booking_status() {
    let mut bookings = tracker();
    let booking = bookings.create(marina_booking()).unwrap();

    let booking = bookings
        .update_payment_status(booking.id, PaymentStatus::Partial)
        .unwrap();
    assert_eq!(booking.payment_status, PaymentStatus::Partial);
    assert_eq!(booking.status, BookingStatus::Pending);
}

#[test]
fn status_change_appends_a_timeline_entry() {
    let mut bookings = tracker();
    let booking = bookings.create(marina_booking()).unwrap();

    let booking = bookings
        .update_status(booking.id, BookingStatus::Confirmed)
        .unwrap();
    assert!(
        booking
            .timeline
            .iter()
            .any(|e| e.kind == TimelineEventKind::StatusChanged
                && e.description == "Pending → Confirmed")
    );
}

#[test]
fn lenient_config_allows_backward_payment_moves() {
    let mut bookings = tracker();
    let booking = bookings.create(marina_booking()).unwrap();

    bookings
        .update_payment_status(booking.id, PaymentStatus::Paid)
        .unwrap();
    let booking = bookings
        .update_payment_status(booking.id, PaymentStatus::Partial)
        .unwrap();
    assert_eq!(booking.payment_status, PaymentStatus::Partial);
}

#[test]
fn strict_config_rejects_backward_payment_moves() {
    let mut bookings = strict_tracker();
    let booking = bookings.create(marina_booking()).unwrap();

    bookings
        .update_payment_status(booking.id, PaymentStatus::Paid)
        .unwrap();
    let err = bookings
        .update_payment_status(booking.id, PaymentStatus::Pending)
        .unwrap_err();
    assert!(matches!(err, AtriaError::Validation { .. }));
    assert_eq!(
        bookings.get(booking.id).unwrap().payment_status,
        PaymentStatus::Paid
    );
}

#[test]
fn update_amounts_holds_the_monetary_invariant() {
    let mut bookings = tracker();
    let booking = bookings.create(marina_booking()).unwrap();

    let err = bookings
        .update_amounts(booking.id, 2_600_000, 2_500_000)
        .unwrap_err();
    assert!(matches!(err, AtriaError::Validation { .. }));

    // Nothing was partially applied.
    let unchanged = bookings.get(booking.id).unwrap();
    assert_eq!(unchanged.booking_amount, 50_000);

    let updated = bookings
        .update_amounts(booking.id, 100_000, 2_500_000)
        .unwrap();
    assert_eq!(updated.booking_amount, 100_000);
}

#[test]
fn timeline_events_and_notes_are_separate_logs() {
    let mut bookings = tracker();
    let booking = bookings.create(marina_booking()).unwrap();

    bookings
        .record_timeline_event(
            booking.id,
            TimelineEventKind::PaymentReceived,
            "AED 50,000 received via bank transfer",
        )
        .unwrap();
    bookings
        .record_timeline_event(
            booking.id,
            TimelineEventKind::DocumentVerified,
            "Emirates ID and passport verified",
        )
        .unwrap();
    let booking = bookings
        .add_note(booking.id, "Customer confirmed for Saturday")
        .unwrap();

    assert_eq!(booking.notes.len(), 1);
    // Created + the two recorded events.
    assert_eq!(booking.timeline.len(), 3);
}

#[test]
fn quick_actions_carry_contact_details_and_mutate_nothing() {
    let mut bookings = tracker();
    let booking = bookings.create(marina_booking()).unwrap();

    assert_eq!(
        quick_dial(&booking),
        QuickAction::Dial("+971501234567".into())
    );
    assert_eq!(
        quick_email(&booking),
        QuickAction::Email("ahmed.m@email.com".into())
    );

    let after = bookings.get(booking.id).unwrap();
    assert_eq!(after.timeline.len(), booking.timeline.len());
    assert_eq!(after.notes.len(), booking.notes.len());
}

#[test]
fn filter_by_status_and_customer_search() {
    let mut bookings = tracker();
    let a = bookings.create(marina_booking()).unwrap();
    bookings
        .create(CreateBooking {
            name: "Emily Chen".into(),
            phone: "+971562345678".into(),
            email: "emily.c@email.com".into(),
            unit: "Bay East - Unit 3B".into(),
            booking_amount: 25_000,
            total_amount: 1_800_000,
            commission: 36_000,
            viewing_at: None,
        })
        .unwrap();
    bookings.update_status(a.id, BookingStatus::Confirmed).unwrap();

    let confirmed = bookings.filter(&BookingFilter {
        status: StatusFilter::Only(BookingStatus::Confirmed),
        search: None,
    });
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].id, a.id);

    let by_email = bookings.filter(&BookingFilter {
        status: StatusFilter::All,
        search: Some("emily.c".into()),
    });
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].customer.name, "Emily Chen");
}
