//! Session service — login, role selection, and logout orchestration.

use std::collections::BTreeSet;

use atria_core::models::account::Account;
use atria_core::models::role::Role;
use atria_core::repository::RolePreferenceStore;

use crate::error::SessionError;

/// Session lifecycle:
/// `NoSession → (login) → RoleUnresolved → (select_role) → RoleActive`,
/// with `RoleUnresolved` skipped when a valid remembered role exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    /// Logged in, but the account holds several roles and none was
    /// remembered; an explicit selection is required.
    RoleUnresolved,
    RoleActive(Role),
}

/// The live session. Single source of truth for who is acting and as what
/// role. `account` is `None` for guest sessions.
#[derive(Debug, Clone)]
pub struct Session {
    pub account: Option<Account>,
    pub state: SessionState,
}

impl Session {
    pub fn active_role(&self) -> Option<Role> {
        match self.state {
            SessionState::RoleActive(role) => Some(role),
            _ => None,
        }
    }

    /// Roles selectable in this session. Guest-only when no account is
    /// attached.
    pub fn held_roles(&self) -> BTreeSet<Role> {
        match &self.account {
            Some(account) => account.held_roles(),
            None => BTreeSet::from([Role::Guest]),
        }
    }
}

/// Session service.
///
/// Generic over the preference store so that the session layer has no
/// dependency on the storage crate.
pub struct SessionService<P: RolePreferenceStore> {
    prefs: P,
    session: Session,
}

impl<P: RolePreferenceStore> SessionService<P> {
    pub fn new(prefs: P) -> Self {
        Self {
            prefs,
            session: Session {
                account: None,
                state: SessionState::NoSession,
            },
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state
    }

    pub fn active_role(&self) -> Option<Role> {
        self.session.active_role()
    }

    /// Bootstraps a session for an authenticated account. A remembered role
    /// that is still held is activated without prompting; otherwise the
    /// session stays `RoleUnresolved` until an explicit [`Self::select_role`].
    pub fn login(&mut self, account: Account) {
        let remembered = self
            .prefs
            .remembered(account.id)
            .filter(|role| account.holds(*role));

        let state = match remembered {
            Some(role) => {
                tracing::info!(account = %account.name, %role, "resuming remembered role");
                SessionState::RoleActive(role)
            }
            None => SessionState::RoleUnresolved,
        };

        self.session = Session {
            account: Some(account),
            state,
        };
    }

    /// Starts a guest session. Guests hold exactly the `Guest` role, so no
    /// selection step is needed.
    pub fn enter_as_guest(&mut self) {
        tracing::info!("guest session started");
        self.session = Session {
            account: None,
            state: SessionState::RoleActive(Role::Guest),
        };
    }

    /// Activates `role` for the rest of the session. With `remember`, the
    /// choice is persisted and future logins skip the selection screen.
    ///
    /// Fails without changing the active role when `role` is not held.
    pub fn select_role(&mut self, role: Role, remember: bool) -> Result<(), SessionError> {
        self.activate(role)?;
        if remember {
            if let Some(account) = &self.session.account {
                self.prefs.remember(account.id, role);
            }
        }
        Ok(())
    }

    /// Mid-session role switch, e.g. from the profile modal. A transient
    /// override: the persisted preference is left untouched.
    pub fn switch_role(&mut self, role: Role) -> Result<(), SessionError> {
        self.activate(role)
    }

    /// Clears the live session. The remembered-role preference is retained
    /// across logout/login boundaries; that is what "remember my choice"
    /// means.
    pub fn logout(&mut self) {
        tracing::info!("session ended");
        self.session = Session {
            account: None,
            state: SessionState::NoSession,
        };
    }

    /// Drops the persisted role preference for the current account.
    pub fn forget_remembered_role(&mut self) {
        if let Some(account) = &self.session.account {
            self.prefs.forget(account.id);
        }
    }

    fn activate(&mut self, role: Role) -> Result<(), SessionError> {
        if self.session.state == SessionState::NoSession {
            return Err(SessionError::NoSession);
        }
        if !self.session.held_roles().contains(&role) {
            return Err(SessionError::RoleNotHeld(role));
        }
        tracing::info!(%role, "role activated");
        self.session.state = SessionState::RoleActive(role);
        Ok(())
    }
}
