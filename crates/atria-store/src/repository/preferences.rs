//! In-memory implementation of [`RolePreferenceStore`].
//!
//! Lives outside the session so the remembered choice survives
//! logout/login boundaries within a process run.

use std::collections::HashMap;

use atria_core::models::role::Role;
use atria_core::repository::RolePreferenceStore;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryRolePreferences {
    remembered: HashMap<Uuid, Role>,
}

impl InMemoryRolePreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RolePreferenceStore for InMemoryRolePreferences {
    fn remembered(&self, account_id: Uuid) -> Option<Role> {
        self.remembered.get(&account_id).copied()
    }

    fn remember(&mut self, account_id: Uuid, role: Role) {
        self.remembered.insert(account_id, role);
    }

    fn forget(&mut self, account_id: Uuid) {
        self.remembered.remove(&account_id);
    }
}
