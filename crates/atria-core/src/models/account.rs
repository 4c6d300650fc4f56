//! Account domain model.
//!
//! Role assignment itself is external to this system; accounts arrive with
//! their granted roles already decided.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::role::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    /// Explicitly granted roles. Never empty; `Guest` need not be listed.
    pub roles: BTreeSet<Role>,
}

impl Account {
    pub fn new(name: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// All roles this account may act as. `Guest` is always implicitly
    /// available, even when not explicitly granted.
    pub fn held_roles(&self) -> BTreeSet<Role> {
        let mut held = self.roles.clone();
        held.insert(Role::Guest);
        held
    }

    pub fn holds(&self, role: Role) -> bool {
        role == Role::Guest || self.roles.contains(&role)
    }
}
