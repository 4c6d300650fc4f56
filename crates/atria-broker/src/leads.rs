//! Lead tracker — creation, status transitions, notes, unit links, and
//! list filtering.

use std::collections::BTreeMap;

use atria_core::error::{AtriaResult, Violation};
use atria_core::models::contact::Contact;
use atria_core::models::lead::{BudgetRange, CreateLead, Lead};
use atria_core::models::timeline::{Note, TimelineEvent, TimelineEventKind};
use atria_core::repository::LeadRepository;
use atria_core::status::{LeadStatus, StatusFilter, StatusVocabulary, transition_description};
use chrono::Utc;
use uuid::Uuid;

use crate::validate::{finish, require_non_empty};

/// List-screen filter. Status and search text combine with logical AND;
/// search matches case-insensitively against name, phone, or email.
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    pub status: StatusFilter<LeadStatus>,
    pub search: Option<String>,
}

impl LeadFilter {
    fn matches(&self, lead: &Lead) -> bool {
        if !self.status.matches(lead.status) {
            return false;
        }
        match self.search.as_deref() {
            None | Some("") => true,
            Some(query) => lead.contact.matches(query),
        }
    }
}

pub struct LeadTracker<R: LeadRepository> {
    repo: R,
}

impl<R: LeadRepository> LeadTracker<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a lead in status `New`. Name, phone, and email are required;
    /// every violated field is reported and nothing is created on failure.
    pub fn create(&mut self, input: CreateLead) -> AtriaResult<Lead> {
        let mut violations = Vec::new();
        require_non_empty(&mut violations, "name", &input.name);
        require_non_empty(&mut violations, "phone", &input.phone);
        require_non_empty(&mut violations, "email", &input.email);
        if let (Some(min), Some(max)) = (input.budget_min, input.budget_max) {
            if min > max {
                violations.push(Violation::new("budget", "minimum exceeds maximum"));
            }
        }
        finish(violations)?;

        let lead = Lead {
            id: Uuid::new_v4(),
            contact: Contact {
                name: input.name,
                phone: input.phone,
                email: input.email,
            },
            status: LeadStatus::New,
            budget: BudgetRange {
                min: input.budget_min,
                max: input.budget_max,
            },
            property_type: input.property_type,
            bedrooms: input.bedrooms,
            source: input.source,
            linked_units: Default::default(),
            notes: Vec::new(),
            timeline: vec![TimelineEvent::now(
                TimelineEventKind::Created,
                "Lead created",
            )],
            created_at: Utc::now(),
            last_contact_at: None,
        };
        tracing::info!(lead = %lead.id, name = %lead.contact.name, "lead created");
        self.repo.insert(lead)
    }

    pub fn get(&self, id: Uuid) -> AtriaResult<Lead> {
        self.repo.get(id)
    }

    /// Moves the lead to `new_status`. Any-to-any transitions are allowed
    /// business operations and each real move appends a timeline entry;
    /// a no-op transition appends nothing.
    pub fn update_status(&mut self, id: Uuid, new_status: LeadStatus) -> AtriaResult<Lead> {
        let mut lead = self.repo.get(id)?;
        if lead.status == new_status {
            return Ok(lead);
        }
        let description = transition_description(lead.status, new_status);
        tracing::info!(lead = %id, %description, "lead status changed");
        lead.timeline.push(TimelineEvent::now(
            TimelineEventKind::StatusChanged,
            description,
        ));
        lead.status = new_status;
        self.repo.save(lead)
    }

    /// Appends a free-text note. Prior notes are never mutated or removed.
    pub fn add_note(&mut self, id: Uuid, text: &str) -> AtriaResult<Lead> {
        let mut violations = Vec::new();
        require_non_empty(&mut violations, "note", text);
        finish(violations)?;

        let mut lead = self.repo.get(id)?;
        lead.notes.push(Note::new(text));
        self.repo.save(lead)
    }

    /// Links a property unit. Set semantics: re-linking is a no-op.
    pub fn link_unit(&mut self, id: Uuid, unit: &str) -> AtriaResult<Lead> {
        let mut lead = self.repo.get(id)?;
        lead.linked_units.insert(unit.to_owned());
        self.repo.save(lead)
    }

    pub fn unlink_unit(&mut self, id: Uuid, unit: &str) -> AtriaResult<Lead> {
        let mut lead = self.repo.get(id)?;
        lead.linked_units.remove(unit);
        self.repo.save(lead)
    }

    /// Records an outbound contact (call, email): stamps last-contact time
    /// and appends a contact-made timeline entry.
    pub fn record_contact(&mut self, id: Uuid, description: &str) -> AtriaResult<Lead> {
        let mut lead = self.repo.get(id)?;
        lead.last_contact_at = Some(Utc::now());
        lead.timeline.push(TimelineEvent::now(
            TimelineEventKind::ContactMade,
            description,
        ));
        self.repo.save(lead)
    }

    pub fn filter(&self, filter: &LeadFilter) -> Vec<Lead> {
        self.repo
            .list()
            .into_iter()
            .filter(|lead| filter.matches(lead))
            .collect()
    }

    /// Per-status totals for the filter chips on the list screen.
    pub fn status_counts(&self) -> BTreeMap<LeadStatus, usize> {
        let mut counts: BTreeMap<LeadStatus, usize> =
            LeadStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for lead in self.repo.list() {
            *counts.entry(lead.status).or_default() += 1;
        }
        counts
    }
}
