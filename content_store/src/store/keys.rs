//! Fixed storage key names.

/// The five keys the store writes, after any configured prefix is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub game_data: String,
    pub news: String,
    pub users: String,
    /// Denormalized snapshot of the signed-in user.
    pub session_user: String,
    /// `"true"` while an administrator session is active.
    pub admin_auth: String,
}

impl StorageKeys {
    pub const GAME_DATA: &'static str = "content-data";
    pub const NEWS: &'static str = "content-news";
    pub const USERS: &'static str = "users-db";
    pub const SESSION_USER: &'static str = "session-user";
    pub const ADMIN_AUTH: &'static str = "admin-auth";

    /// Build the key set, prefixing each name with `prefix` if given.
    pub fn with_prefix(prefix: Option<&str>) -> Self {
        let prefix = prefix.unwrap_or_default();
        let key = |name: &str| format!("{prefix}{name}");
        Self {
            game_data: key(Self::GAME_DATA),
            news: key(Self::NEWS),
            users: key(Self::USERS),
            session_user: key(Self::SESSION_USER),
            admin_auth: key(Self::ADMIN_AUTH),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::with_prefix(None)
    }
}
