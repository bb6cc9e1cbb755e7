//! User accounts and the characters they own.

mod character;

pub use character::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// A registered account. `email` and `nickname` are each unique across all users.
///
/// Fields other than the two keys carry serde defaults so partial snapshots (such as the
/// administrator's session record) still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub nickname: String,
    /// Stored in plaintext. There is no real authentication behind it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// RFC 3339 registration timestamp.
    #[serde(default)]
    pub registered_at: String,
    #[serde(default)]
    pub characters: Vec<Character>,
}

impl User {
    /// Create a regular user registered at `now`, with no characters.
    pub fn new(
        email: impl Into<String>,
        nickname: impl Into<String>,
        password: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            nickname: nickname.into(),
            password: Some(password.into()),
            role: Role::User,
            registered_at: timestamp(now),
            characters: Vec::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Check whether `identifier` is this user's email or nickname.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.email == identifier || self.nickname == identifier
    }

    pub fn has_character_named(&self, name: &str) -> bool {
        self.characters.iter().any(|c| c.name == name)
    }
}

/// A partial update of [`User`]. Only the fields set to `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub registered_at: Option<String>,
    pub characters: Option<Vec<Character>>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn with_characters(mut self, characters: Vec<Character>) -> Self {
        self.characters = Some(characters);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Merge the set fields over `target`.
    pub fn apply_to(self, target: &mut User) {
        if let Some(email) = self.email {
            target.email = email;
        }
        if let Some(nickname) = self.nickname {
            target.nickname = nickname;
        }
        if let Some(password) = self.password {
            target.password = Some(password);
        }
        if let Some(role) = self.role {
            target.role = role;
        }
        if let Some(registered_at) = self.registered_at {
            target.registered_at = registered_at;
        }
        if let Some(characters) = self.characters {
            target.characters = characters;
        }
    }
}
