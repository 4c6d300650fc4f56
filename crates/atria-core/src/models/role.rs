//! Role domain model.

use serde::{Deserialize, Serialize};

/// A persona an account may act as. The set is fixed; an unknown role is
/// unrepresentable rather than a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Broker,
    Buyer,
    Homeowner,
    Guest,
}

/// Display metadata for a role, shown on the role-selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleInfo {
    pub label: &'static str,
    pub description: &'static str,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::Broker, Role::Buyer, Role::Homeowner, Role::Guest];

    pub fn info(&self) -> RoleInfo {
        match self {
            Role::Broker => RoleInfo {
                label: "Broker",
                description: "Manage leads, track bookings, and access live inventory",
            },
            Role::Buyer => RoleInfo {
                label: "Buyer / Customer",
                description: "Explore properties and express interest in available units",
            },
            Role::Homeowner => RoleInfo {
                label: "Homeowner",
                description: "Manage your property, documents, and payments",
            },
            Role::Guest => RoleInfo {
                label: "Guest",
                description: "Explore properties and express interest in available units",
            },
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().label)
    }
}
