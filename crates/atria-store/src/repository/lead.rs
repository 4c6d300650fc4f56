//! In-memory implementation of [`LeadRepository`].

use atria_core::error::{AtriaError, AtriaResult};
use atria_core::models::lead::Lead;
use atria_core::repository::LeadRepository;
use uuid::Uuid;

/// Vec-backed store. Linear lookup is fine at the scale of a single broker
/// workspace, and a Vec preserves insertion order for list screens.
#[derive(Debug, Default)]
pub struct InMemoryLeadRepository {
    leads: Vec<Lead>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.leads.iter().position(|l| l.id == id)
    }
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&mut self, lead: Lead) -> AtriaResult<Lead> {
        self.leads.push(lead.clone());
        Ok(lead)
    }

    fn get(&self, id: Uuid) -> AtriaResult<Lead> {
        self.leads
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| AtriaError::not_found("lead", id))
    }

    fn save(&mut self, lead: Lead) -> AtriaResult<Lead> {
        let idx = self
            .position(lead.id)
            .ok_or_else(|| AtriaError::not_found("lead", lead.id))?;
        self.leads[idx] = lead.clone();
        Ok(lead)
    }

    fn list(&self) -> Vec<Lead> {
        self.leads.clone()
    }
}
