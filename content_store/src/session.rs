//! The signed-in session: a denormalized user snapshot and an administrator flag.
//!
//! The snapshot is a copy of the user record taken at sign-in, kept for quick display.
//! [`ContentStore::update_user`] refreshes it when the same user is updated, but any
//! write that bypasses that path leaves it stale.

use content_model::{Role, User};
use log::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::storage::Storage;
use crate::store::{read_json, write_json, ContentStore};

const ADMIN_FLAG: &str = "true";

/// Login and password that open an administrator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    login: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, login: &str, password: &str) -> bool {
        self.login == login && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new("admin", "admin")
    }
}

/// The snapshot stored for an administrator session.
pub fn administrator_snapshot() -> User {
    User {
        email: "admin@triglav.online".to_string(),
        nickname: "Administrator".to_string(),
        password: None,
        role: Role::Admin,
        registered_at: String::new(),
        characters: Vec::new(),
    }
}

impl<S: Storage> ContentStore<S> {
    /// The signed-in user's snapshot, if any.
    pub fn current_user(&self) -> Option<User> {
        read_json(&self.storage, &self.keys.session_user)
    }

    /// Whether an administrator session is active.
    pub fn is_admin(&self) -> bool {
        match self.storage.get(&self.keys.admin_auth) {
            Ok(flag) => flag.as_deref() == Some(ADMIN_FLAG),
            Err(e) => {
                warn!("failed to read admin flag: {e}");
                false
            }
        }
    }

    /// Sign in by email or nickname.
    ///
    /// The administrator credentials open an admin session with the administrator
    /// snapshot. Otherwise the identifier must name a registered user whose stored
    /// password matches.
    pub fn sign_in(&mut self, identifier: &str, password: &str) -> StoreResult<User> {
        let identifier = identifier.trim();
        if identifier.is_empty() || password.is_empty() {
            return Err(StoreError::InvalidInput(
                "login and password are required".to_string(),
            ));
        }

        if self.admin.matches(identifier, password) {
            self.storage.set(&self.keys.admin_auth, ADMIN_FLAG.to_string())?;
            let snapshot = self.refresh_session(&administrator_snapshot())?;
            info!("administrator signed in");
            return Ok(snapshot);
        }

        let user = self
            .find_user(identifier)
            .filter(|u| u.password.as_deref() == Some(password))
            .ok_or(StoreError::InvalidCredentials)?;
        let snapshot = self.refresh_session(&user)?;
        info!("user {} signed in", user.nickname);
        Ok(snapshot)
    }

    /// Open an administrator session from the dedicated admin login. Only the flag is set.
    pub fn sign_in_admin(&mut self, login: &str, password: &str) -> StoreResult<()> {
        if !self.admin.matches(login, password) {
            return Err(StoreError::InvalidCredentials);
        }
        self.storage.set(&self.keys.admin_auth, ADMIN_FLAG.to_string())?;
        info!("administrator signed in");
        Ok(())
    }

    /// End the session: drop the snapshot and the admin flag.
    pub fn sign_out(&mut self) -> StoreResult<()> {
        self.storage.remove(&self.keys.session_user)?;
        self.storage.remove(&self.keys.admin_auth)?;
        info!("signed out");
        Ok(())
    }

    /// Leave the admin panel, keeping any user snapshot.
    pub fn sign_out_admin(&mut self) -> StoreResult<()> {
        self.storage.remove(&self.keys.admin_auth)?;
        Ok(())
    }

    /// Store `user` as the session snapshot. The password is not copied.
    pub(crate) fn refresh_session(&mut self, user: &User) -> StoreResult<User> {
        let snapshot = User {
            password: None,
            ..user.clone()
        };
        write_json(&mut self.storage, &self.keys.session_user, &snapshot)?;
        Ok(snapshot)
    }
}
