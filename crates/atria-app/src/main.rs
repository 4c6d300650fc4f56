//! Atria App — composition root.
//!
//! Owns the single session and the in-memory collections, and wires them
//! into the role-gated broker workspace. The surrounding UI layer calls
//! into the same services this walkthrough exercises.

use atria_broker::{BrokerWorkspace, LeadFilter, TrackerConfig};
use atria_core::models::account::Account;
use atria_core::models::booking::CreateBooking;
use atria_core::models::lead::CreateLead;
use atria_core::models::role::Role;
use atria_core::status::{LeadStatus, PaymentStatus};
use atria_session::SessionService;
use atria_store::{InMemoryBookingRepository, InMemoryLeadRepository, InMemoryRolePreferences};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("atria=info".parse().unwrap()))
        .json()
        .init();

    tracing::info!("Starting Atria...");

    let mut sessions = SessionService::new(InMemoryRolePreferences::new());
    sessions.login(Account::new("Fatima Al Rashid", [Role::Broker, Role::Buyer]));
    if let Err(err) = sessions.select_role(Role::Broker, true) {
        tracing::error!(%err, "role selection failed");
        return;
    }

    let workspace = BrokerWorkspace::open(
        sessions.session(),
        InMemoryLeadRepository::new(),
        InMemoryBookingRepository::new(),
        TrackerConfig::default(),
    );
    let mut workspace = match workspace {
        Ok(workspace) => workspace,
        Err(err) => {
            tracing::error!(%err, "broker workspace unavailable");
            return;
        }
    };

    if let Err(err) = run_walkthrough(&mut workspace) {
        tracing::error!(%err, "walkthrough failed");
    }

    sessions.logout();
    tracing::info!("Atria stopped.");
}

fn run_walkthrough(
    workspace: &mut BrokerWorkspace<InMemoryLeadRepository, InMemoryBookingRepository>,
) -> atria_core::AtriaResult<()> {
    let lead = workspace.leads.create(CreateLead {
        name: "Ahmed Al Mansouri".into(),
        phone: "+971 50 123 4567".into(),
        email: "ahmed.m@email.com".into(),
        budget_min: Some(2_000_000),
        budget_max: Some(3_000_000),
        property_type: Some("Apartment".into()),
        bedrooms: Some("2-3".into()),
        source: Some("Website Inquiry".into()),
    })?;
    workspace.leads.update_status(lead.id, LeadStatus::SiteVisit)?;
    workspace.leads.add_note(lead.id, "Prefers high floor (15+)")?;
    workspace
        .leads
        .link_unit(lead.id, "Marina Heights - Unit 205")?;

    let booking = workspace.bookings.create(CreateBooking {
        name: "Ahmed Al Mansouri".into(),
        phone: "+971 50 123 4567".into(),
        email: "ahmed.m@email.com".into(),
        unit: "Marina Heights - Unit 205".into(),
        booking_amount: 50_000,
        total_amount: 2_500_000,
        commission: 50_000,
        viewing_at: None,
    })?;
    workspace
        .bookings
        .update_payment_status(booking.id, PaymentStatus::Partial)?;

    let open_leads = workspace.leads.filter(&LeadFilter::default());
    tracing::info!(
        leads = open_leads.len(),
        bookings = workspace.bookings.filter(&Default::default()).len(),
        "workspace seeded"
    );
    Ok(())
}
