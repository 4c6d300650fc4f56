//! Shortlist — a bounded, deduplicated set of saved properties with
//! single-level undo for removals.

use atria_core::error::{AtriaError, AtriaResult};
use atria_core::models::shortlist::ShortlistEntry;

/// Comparing more properties than this is a UX hint, not an error; the
/// comparison screen lays out up to four cards comfortably.
pub const RECOMMENDED_COMPARE_LIMIT: usize = 4;

#[derive(Debug, Default)]
pub struct Shortlist {
    entries: Vec<ShortlistEntry>,
    /// Last removal, with its original position. Overwritten by the next
    /// remove; single-level undo only.
    undo_slot: Option<(usize, ShortlistEntry)>,
}

impl Shortlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ShortlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, property_id: &str) -> bool {
        self.entries.iter().any(|e| e.property_id == property_id)
    }

    /// Idempotent add: returns `false` without touching the list when the
    /// property is already shortlisted.
    pub fn add(&mut self, entry: ShortlistEntry) -> bool {
        if self.contains(&entry.property_id) {
            return false;
        }
        // Re-adding the removed property supersedes the parked undo;
        // restoring it later would duplicate the property id.
        if let Some((_, parked)) = &self.undo_slot {
            if parked.property_id == entry.property_id {
                self.undo_slot = None;
            }
        }
        self.entries.push(entry);
        true
    }

    /// Removes an entry and parks it in the undo slot. Fails with
    /// `NotFound` for a property that is not shortlisted.
    pub fn remove(&mut self, property_id: &str) -> AtriaResult<ShortlistEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.property_id == property_id)
            .ok_or_else(|| AtriaError::not_found("shortlist entry", property_id))?;
        let entry = self.entries.remove(idx);
        self.undo_slot = Some((idx, entry.clone()));
        Ok(entry)
    }

    /// Reinserts the last removal at its original position. Returns `None`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> Option<ShortlistEntry> {
        let (idx, entry) = self.undo_slot.take()?;
        let idx = idx.min(self.entries.len());
        self.entries.insert(idx, entry.clone());
        Some(entry)
    }

    /// Case-insensitive substring search over name and location.
    pub fn search(&self, query: &str) -> Vec<&ShortlistEntry> {
        let q = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&q) || e.location.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Resolves a comparison selection, keeping the caller's order and
    /// skipping ids that are not shortlisted. The recommended size cap is
    /// not enforced here.
    pub fn compare(&self, property_ids: &[&str]) -> Vec<&ShortlistEntry> {
        property_ids
            .iter()
            .filter_map(|id| self.entries.iter().find(|e| e.property_id == *id))
            .collect()
    }
}
